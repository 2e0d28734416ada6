//! Four-slot color sample
//!
//! A sample holds three color channels plus one alpha slot. What the three
//! channels mean depends on the [`ColorSpace`](crate::ColorSpace) the sample
//! was converted into; the alpha slot is carried along and never takes part
//! in distance computation.

/// A color expressed in one working color space.
///
/// | Space | slot 0 | slot 1 | slot 2 |
/// |-------|--------|--------|--------|
/// | RGB   | red (linear) | green (linear) | blue (linear) |
/// | LCH   | lightness `L*/100` | chroma `C*/180` | hue `h/360` |
/// | HSL   | hue `h/360` | saturation | lightness |
///
/// Slot 3 is alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorSample {
    v: [f32; 4],
}

impl ColorSample {
    /// Create a sample from three channels and an alpha value.
    #[inline]
    pub fn new(c0: f32, c1: f32, c2: f32, alpha: f32) -> Self {
        Self {
            v: [c0, c1, c2, alpha],
        }
    }

    /// Create an opaque sample.
    #[inline]
    pub fn opaque(c0: f32, c1: f32, c2: f32) -> Self {
        Self::new(c0, c1, c2, 1.0)
    }

    /// The three color channels, in memory order.
    #[inline]
    pub fn channels(&self) -> [f32; 3] {
        [self.v[0], self.v[1], self.v[2]]
    }

    /// Color channel `i` (0..=2). The alpha slot is not reachable here.
    ///
    /// # Panics
    ///
    /// Panics if `i > 2`.
    #[inline]
    pub fn channel(&self, i: usize) -> f32 {
        self.channels()[i]
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.v[3]
    }

    /// Same color with a different alpha slot.
    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.v[3] = alpha;
        self
    }
}

impl From<[f32; 4]> for ColorSample {
    fn from(v: [f32; 4]) -> Self {
        Self { v }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_sets_alpha_to_one() {
        let s = ColorSample::opaque(0.1, 0.2, 0.3);
        assert_eq!(s.alpha(), 1.0);
        assert_eq!(s.channels(), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_with_alpha_keeps_channels() {
        let s = ColorSample::opaque(0.1, 0.2, 0.3).with_alpha(0.25);
        assert_eq!(s.channels(), [0.1, 0.2, 0.3]);
        assert_eq!(s.alpha(), 0.25);
    }

    #[test]
    fn test_from_array() {
        let s = ColorSample::from([0.5, 0.25, 0.125, 0.0]);
        assert_eq!(s.channel(1), 0.25);
        assert_eq!(s.alpha(), 0.0);
    }

    #[test]
    #[should_panic]
    fn test_channel_excludes_alpha() {
        ColorSample::new(0.1, 0.2, 0.3, 0.4).channel(3);
    }
}
