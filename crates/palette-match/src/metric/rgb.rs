//! Weighted Euclidean distance in the linear RGB cube.

use crate::color::{ColorSample, WeightVector};

/// Weighted squared Euclidean distance.
///
/// Weight slots: `[red, green, blue]`.
///
/// ```
/// use palette_match::{ColorSample, WeightVector};
/// use palette_match::metric::rgb_distance_sq;
///
/// let black = ColorSample::opaque(0.0, 0.0, 0.0);
/// let white = ColorSample::opaque(1.0, 1.0, 1.0);
/// assert_eq!(rgb_distance_sq(black, white, WeightVector::UNIT), 3.0);
/// ```
#[inline]
pub fn rgb_distance_sq(a: ColorSample, b: ColorSample, weights: WeightVector) -> f32 {
    let d_r = (a.channel(0) - b.channel(0)) * weights.slot(0);
    let d_g = (a.channel(1) - b.channel(1)) * weights.slot(1);
    let d_b = (a.channel(2) - b.channel(2)) * weights.slot(2);
    d_r * d_r + d_g * d_g + d_b * d_b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let c = ColorSample::opaque(0.2, 0.4, 0.6);
        assert_eq!(rgb_distance_sq(c, c, WeightVector::UNIT), 0.0);
    }

    #[test]
    fn test_black_white() {
        let black = ColorSample::opaque(0.0, 0.0, 0.0);
        let white = ColorSample::opaque(1.0, 1.0, 1.0);
        assert_eq!(rgb_distance_sq(black, white, WeightVector::UNIT), 3.0);
        assert_eq!(rgb_distance_sq(white, black, WeightVector::UNIT), 3.0);
    }

    #[test]
    fn test_zero_weight_hides_channel() {
        let black = ColorSample::opaque(0.0, 0.0, 0.0);
        let red = ColorSample::opaque(1.0, 0.0, 0.0);
        let w = WeightVector::new(0.0, 1.0, 1.0);
        assert_eq!(rgb_distance_sq(black, red, w), 0.0);
    }

    #[test]
    fn test_weight_scales_quadratically() {
        let black = ColorSample::opaque(0.0, 0.0, 0.0);
        let blue = ColorSample::opaque(0.0, 0.0, 0.5);
        let d1 = rgb_distance_sq(black, blue, WeightVector::new(1.0, 1.0, 1.0));
        let d2 = rgb_distance_sq(black, blue, WeightVector::new(1.0, 1.0, 2.0));
        assert_eq!(d2, 4.0 * d1);
    }

    #[test]
    fn test_alpha_is_ignored() {
        let a = ColorSample::new(0.3, 0.3, 0.3, 0.0);
        let b = ColorSample::new(0.3, 0.3, 0.3, 1.0);
        assert_eq!(rgb_distance_sq(a, b, WeightVector::UNIT), 0.0);
    }
}
