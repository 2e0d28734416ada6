//! Lightness/chroma/hue distance with an archimedean-spiral hue term.
//!
//! The two colors are points of a polar (chroma, hue) plane stacked along a
//! lightness axis. Instead of the Cartesian chord between the points, the
//! hue step is measured as an arc at the mean chroma of the two points,
//! damped by `chroma_min / chroma_max` so that hue, which is noise near the
//! grey axis, stops mattering as either color approaches it.

use super::hue::{circular_distance, spiral_distance_sq};
use crate::color::{ColorSample, WeightVector};

/// Weight slot applied to hue.
pub const LCH_HUE_SLOT: usize = 0;
/// Weight slot applied to chroma.
pub const LCH_CHROMA_SLOT: usize = 1;
/// Weight slot applied to lightness.
pub const LCH_LIGHTNESS_SLOT: usize = 2;

/// Squared LCH distance.
///
/// Channels are in memory order `(lightness, chroma, hue)`, but weight
/// slots follow the hue-chroma-lightness order of the user-facing
/// controls: `weights[0]` scales hue, `weights[1]` chroma and
/// `weights[2]` lightness.
///
/// ```text
/// d_L     = (L2 - L1) * w_lightness
/// d_C     = (C_max - C_min) * w_chroma
/// theta   = circular_distance(h1, h2) * 2π * w_hue * (C_min / C_max)
/// result  = d_C² + ((C_min + C_max) / 2 * theta)² + d_L²
/// ```
#[inline]
pub fn lch_distance_sq(a: ColorSample, b: ColorSample, weights: WeightVector) -> f32 {
    let d_lightness = (b.channel(0) - a.channel(0)) * weights.slot(LCH_LIGHTNESS_SLOT);
    let hue_diff = circular_distance(b.channel(2), a.channel(2));

    let polar = spiral_distance_sq(
        a.channel(1),
        b.channel(1),
        hue_diff,
        weights.slot(LCH_HUE_SLOT),
        weights.slot(LCH_CHROMA_SLOT),
    );

    polar + d_lightness * d_lightness
}
