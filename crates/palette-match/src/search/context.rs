//! Search context: a metric, its weights and its working palette, built
//! together.

use super::nearest::nearest;
use crate::color::{ColorSample, Srgb8, WeightVector};
use crate::metric::ColorSpace;
use crate::palette::{ReferencePalette, WorkingPalette};

/// Immutable bundle of everything a nearest-match query needs.
///
/// The color space picks the metric, the palette conversion and the weight
/// slot convention at once, so a context can never pair an LCH metric with
/// an RGB palette. Changing the space or the weights means building a new
/// context; there are no setters.
///
/// Contexts are `Send + Sync` and can be shared across threads scanning
/// different pixels.
///
/// # Example
///
/// ```
/// use palette_match::{ColorSpace, ReferencePalette, SearchContext, Srgb8, WeightVector};
///
/// let reference = ReferencePalette::from_hex(&["#000000", "#ffffff", "#ff0000"]).unwrap();
/// let ctx = SearchContext::new(&reference, ColorSpace::Lch, WeightVector::UNIT);
///
/// let (idx, color) = ctx.match_srgb(Srgb8::new(230, 20, 20));
/// assert_eq!(idx, 2);
/// assert_eq!(color, Srgb8::new(255, 0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct SearchContext {
    weights: WeightVector,
    palette: WorkingPalette,
}

impl SearchContext {
    /// Convert `reference` into `space` and pair it with `weights`.
    ///
    /// `weights` must follow the slot convention of `space`
    /// (see [`ColorSpace::weight_labels()`]).
    pub fn new(reference: &ReferencePalette, space: ColorSpace, weights: WeightVector) -> Self {
        Self::from_working(WorkingPalette::new(reference, space), weights)
    }

    /// Pair an already converted palette with `weights`.
    pub fn from_working(palette: WorkingPalette, weights: WeightVector) -> Self {
        tracing::debug!(
            space = %palette.space(),
            colors = palette.len(),
            weights = %weights,
            "Built search context"
        );
        Self { weights, palette }
    }

    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.palette.space()
    }

    #[inline]
    pub fn weights(&self) -> WeightVector {
        self.weights
    }

    #[inline]
    pub fn palette(&self) -> &WorkingPalette {
        &self.palette
    }

    /// Squared distance between two samples under this context's metric
    /// and weights.
    #[inline]
    pub fn distance_squared(&self, a: ColorSample, b: ColorSample) -> f32 {
        self.space().distance_squared(a, b, self.weights)
    }

    /// Index of the palette entry closest to `query`.
    ///
    /// `query` must already be in this context's color space.
    #[inline]
    pub fn nearest_index(&self, query: ColorSample) -> usize {
        self.nearest(query).0
    }

    /// Index and squared distance of the closest entry.
    #[inline]
    pub fn nearest(&self, query: ColorSample) -> (usize, f32) {
        // Working palettes are built from non-empty reference palettes
        nearest(self.space(), self.palette.samples(), self.weights, query)
            .unwrap_or((0, f32::INFINITY))
    }

    /// Convert an sRGB color into this context's space.
    #[inline]
    pub fn convert(&self, color: Srgb8, alpha: f32) -> ColorSample {
        self.space().convert(color, alpha)
    }

    /// Match an sRGB color and return the index and reference color of the
    /// closest entry.
    pub fn match_srgb(&self, color: Srgb8) -> (usize, Srgb8) {
        let idx = self.nearest_index(self.convert(color, 1.0));
        // idx always indexes the parallel reference table
        let matched = self.palette.reference(idx).unwrap_or(color);
        (idx, matched)
    }
}
