//! Hue wraparound and the archimedean-spiral term shared by polar metrics.

use std::f32::consts::TAU;

/// Shortest separation of two hues on a unit-period circle.
///
/// Both hues are fractions of a full turn. The result lies in `[0, 0.5]`
/// and does not depend on argument order.
///
/// ```
/// use palette_match::metric::circular_distance;
///
/// assert!((circular_distance(0.95, 0.05) - 0.1).abs() < 1e-6);
/// assert!((circular_distance(0.05, 0.95) - 0.1).abs() < 1e-6);
/// ```
#[inline]
pub fn circular_distance(h1: f32, h2: f32) -> f32 {
    let turn = (h1 - h2).rem_euclid(1.0);
    turn.min(1.0 - turn)
}

/// Squared distance between two points of a polar (radius, hue) plane.
///
/// The radial difference is weighted by `radius_weight`. The angular step
/// is weighted by `hue_weight`, damped by `r_min / r_max` so it vanishes
/// as either point approaches the achromatic center, and measured as an
/// arc at the mean radius of the two points.
#[inline]
pub(crate) fn spiral_distance_sq(
    r1: f32,
    r2: f32,
    hue_turns: f32,
    hue_weight: f32,
    radius_weight: f32,
) -> f32 {
    let (r_min, r_max) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };

    let d_radius = (r_max - r_min) * radius_weight;

    let mut theta = hue_turns * TAU * hue_weight;
    if r_max != 0.0 {
        theta *= r_min / r_max;
    }

    let arc = (r_min + r_max) / 2.0 * theta;
    d_radius * d_radius + arc * arc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circular_distance_range() {
        for i in 0..=20 {
            for j in 0..=20 {
                let d = circular_distance(i as f32 / 20.0, j as f32 / 20.0);
                assert!((0.0..=0.5).contains(&d), "d({i},{j}) = {d}");
            }
        }
    }

    #[test]
    fn test_circular_distance_opposite_and_equal() {
        assert!((circular_distance(0.0, 0.5) - 0.5).abs() < 1e-6);
        assert_eq!(circular_distance(0.3, 0.3), 0.0);
        // A full turn apart is the same hue
        assert!(circular_distance(0.0, 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_circular_distance_symmetric() {
        assert_eq!(circular_distance(0.95, 0.05), circular_distance(0.05, 0.95));
        assert_eq!(circular_distance(0.2, 0.7), circular_distance(0.7, 0.2));
    }

    #[test]
    fn test_spiral_zero_radius_ignores_hue() {
        assert_eq!(spiral_distance_sq(0.0, 0.0, 0.5, 2.0, 1.0), 0.0);
    }

    #[test]
    fn test_spiral_equal_radius_is_arc() {
        // Same radius, a quarter turn: arc = r * pi/2
        let r = 0.4;
        let expected = (r * TAU / 4.0).powi(2);
        let d = spiral_distance_sq(r, r, 0.25, 1.0, 1.0);
        assert!((d - expected).abs() < 1e-6, "{d} vs {expected}");
    }

    #[test]
    fn test_spiral_damps_toward_center() {
        let far = spiral_distance_sq(0.5, 0.5, 0.25, 1.0, 0.0);
        let near_grey = spiral_distance_sq(0.01, 0.5, 0.25, 1.0, 0.0);
        assert!(near_grey < far * 0.01, "{near_grey} vs {far}");
    }
}
