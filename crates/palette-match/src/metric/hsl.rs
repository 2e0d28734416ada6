//! Distance in the HSL bicone.
//!
//! Saturation alone is not a usable radius: HSL reports full saturation for
//! near-black and near-white colors that carry almost no color. The metric
//! therefore places each color in the bicone, with radius
//! `s * (1 - |2l - 1|)`, and measures the hue step with the same
//! archimedean-spiral term as the LCH metric, plus a weighted lightness
//! difference.
//!
//! The weights have not been tuned against perceptual data; prefer
//! [`ColorSpace::Lch`](crate::ColorSpace::Lch) when accuracy matters.

use super::hue::{circular_distance, spiral_distance_sq};
use crate::color::{ColorSample, WeightVector};

/// Weight slot applied to hue.
pub const HSL_HUE_SLOT: usize = 0;
/// Weight slot applied to saturation (bicone radius).
pub const HSL_SATURATION_SLOT: usize = 1;
/// Weight slot applied to lightness.
pub const HSL_LIGHTNESS_SLOT: usize = 2;

/// Radius of an HSL color inside the bicone.
#[inline]
pub fn bicone_radius(saturation: f32, lightness: f32) -> f32 {
    saturation * (1.0 - (2.0 * lightness - 1.0).abs())
}

/// Squared HSL distance.
///
/// Channels are `(hue, saturation, lightness)`; weight slots follow the same
/// order.
#[inline]
pub fn hsl_distance_sq(a: ColorSample, b: ColorSample, weights: WeightVector) -> f32 {
    let d_lightness = (b.channel(2) - a.channel(2)) * weights.slot(HSL_LIGHTNESS_SLOT);
    let hue_diff = circular_distance(b.channel(0), a.channel(0));

    let polar = spiral_distance_sq(
        bicone_radius(a.channel(1), a.channel(2)),
        bicone_radius(b.channel(1), b.channel(2)),
        hue_diff,
        weights.slot(HSL_HUE_SLOT),
        weights.slot(HSL_SATURATION_SLOT),
    );

    polar + d_lightness * d_lightness
}
