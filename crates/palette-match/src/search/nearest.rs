//! Exhaustive nearest-palette-entry search.
//!
//! Palettes are a few hundred entries at most, so every query scans the
//! whole palette. Ties go to the lowest index.

use crate::color::{ColorSample, WeightVector};
use crate::metric::ColorSpace;

/// Index and squared distance of the closest entry, or `None` for an empty
/// palette.
///
/// Only a strictly smaller distance replaces the current best, so among
/// equally distant entries the first one wins.
#[inline]
pub fn nearest(
    space: ColorSpace,
    palette: &[ColorSample],
    weights: WeightVector,
    query: ColorSample,
) -> Option<(usize, f32)> {
    if palette.is_empty() {
        return None;
    }

    let mut best_idx = 0;
    let mut best_dist = f32::INFINITY;

    for (i, &entry) in palette.iter().enumerate() {
        let dist = space.distance_squared(query, entry, weights);
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
        }
    }

    Some((best_idx, best_dist))
}

/// Index of the closest entry.
///
/// An empty palette has no closest entry; `0` is returned and must not be
/// used as an index. Callers that cannot rule out an empty palette should
/// use [`nearest()`] instead.
///
/// ```
/// use palette_match::{ColorSample, ColorSpace, WeightVector};
/// use palette_match::search::nearest_index;
///
/// let palette = [
///     ColorSample::opaque(0.0, 0.0, 0.0),
///     ColorSample::opaque(1.0, 1.0, 1.0),
///     ColorSample::opaque(1.0, 0.0, 0.0),
/// ];
/// let query = ColorSample::opaque(0.9, 0.1, 0.1);
/// assert_eq!(nearest_index(ColorSpace::Rgb, &palette, WeightVector::UNIT, query), 2);
/// ```
#[inline]
pub fn nearest_index(
    space: ColorSpace,
    palette: &[ColorSample],
    weights: WeightVector,
    query: ColorSample,
) -> usize {
    nearest(space, palette, weights, query).map_or(0, |(idx, _)| idx)
}
