//! Working palette: reference colors converted into one color space.

use super::reference::ReferencePalette;
use crate::color::{ColorSample, Srgb8};
use crate::metric::ColorSpace;

/// A reference palette converted into a single working [`ColorSpace`].
///
/// Samples are parallel-indexed with the reference colors: a match found at
/// index `i` in the working space is written out as `reference(i)`.
///
/// All conversion happens once, here. Per-pixel matching touches only the
/// precomputed samples.
#[derive(Debug, Clone)]
pub struct WorkingPalette {
    space: ColorSpace,
    samples: Vec<ColorSample>,
    reference: ReferencePalette,
}

impl WorkingPalette {
    /// Convert `reference` into `space`. Every entry is opaque.
    ///
    /// ```
    /// use palette_match::{ColorSpace, ReferencePalette, WorkingPalette};
    ///
    /// let reference = ReferencePalette::from_hex(&["#000000", "#ffffff"]).unwrap();
    /// let working = WorkingPalette::new(&reference, ColorSpace::Lch);
    /// assert_eq!(working.len(), 2);
    /// assert_eq!(working.space(), ColorSpace::Lch);
    /// ```
    pub fn new(reference: &ReferencePalette, space: ColorSpace) -> Self {
        let samples = reference.iter().map(|c| space.convert(c, 1.0)).collect();
        Self {
            space,
            samples,
            reference: reference.clone(),
        }
    }

    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in the working space, in palette order.
    #[inline]
    pub fn samples(&self) -> &[ColorSample] {
        &self.samples
    }

    /// Reference sRGB color of entry `idx`.
    #[inline]
    pub fn reference(&self, idx: usize) -> Option<Srgb8> {
        self.reference.get(idx)
    }
}
