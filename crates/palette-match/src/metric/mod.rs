//! Distance metrics, one per working color space
//!
//! Every metric maps `(a, b, weights)` to a non-negative squared distance
//! that is `0` when `a == b`. Distances are only comparable within one
//! metric; an RGB distance and an LCH distance of the same two colors have
//! no meaningful relation.
//!
//! # Weight slots
//!
//! Each metric decides which channel a weight slot scales. For LCH the
//! order deliberately differs from the channel order in memory:
//!
//! | Space | `w[0]` | `w[1]` | `w[2]` |
//! |-------|--------|--------|--------|
//! | [`ColorSpace::Rgb`] | red | green | blue |
//! | [`ColorSpace::Lch`] | hue | chroma | lightness |
//! | [`ColorSpace::Hsl`] | hue | saturation | lightness |

mod hsl;
mod hue;
mod lch;
mod rgb;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{convert, ColorSample, Srgb8, WeightVector};

pub use hsl::{
    bicone_radius, hsl_distance_sq, HSL_HUE_SLOT, HSL_LIGHTNESS_SLOT, HSL_SATURATION_SLOT,
};
pub use hue::circular_distance;
pub use lch::{lch_distance_sq, LCH_CHROMA_SLOT, LCH_HUE_SLOT, LCH_LIGHTNESS_SLOT};
pub use rgb::rgb_distance_sq;

/// Working color space, and with it the distance metric.
///
/// Selecting a space selects three coupled things at once: how reference
/// colors are converted, how distances are measured, and which channel each
/// weight slot scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// Linear RGB, weighted Euclidean distance.
    #[default]
    Rgb,

    /// Normalized CIE L*C*h, spiral hue term with chroma damping.
    Lch,

    /// HSL bicone, spiral hue term over the bicone radius.
    Hsl,
}

impl ColorSpace {
    /// All supported spaces.
    pub const ALL: [ColorSpace; 3] = [ColorSpace::Rgb, ColorSpace::Lch, ColorSpace::Hsl];

    /// Squared distance between two samples of this space.
    #[inline]
    pub fn distance_squared(self, a: ColorSample, b: ColorSample, weights: WeightVector) -> f32 {
        match self {
            ColorSpace::Rgb => rgb_distance_sq(a, b, weights),
            ColorSpace::Lch => lch_distance_sq(a, b, weights),
            ColorSpace::Hsl => hsl_distance_sq(a, b, weights),
        }
    }

    /// Convert an sRGB reference color into this space.
    ///
    /// `alpha` is stored in the sample's alpha slot untouched.
    #[inline]
    pub fn convert(self, color: Srgb8, alpha: f32) -> ColorSample {
        match self {
            ColorSpace::Rgb => convert::to_linear_rgb(color, alpha),
            ColorSpace::Lch => convert::to_lch(color, alpha),
            ColorSpace::Hsl => convert::to_hsl(color, alpha),
        }
    }

    /// Channel each weight slot scales, in slot order.
    pub fn weight_labels(self) -> [&'static str; 3] {
        match self {
            ColorSpace::Rgb => ["red", "green", "blue"],
            ColorSpace::Lch => ["hue", "chroma", "lightness"],
            ColorSpace::Hsl => ["hue", "saturation", "lightness"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Lch => "lch",
            ColorSpace::Hsl => "hsl",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color space {0:?} (expected rgb, lch or hsl)")]
pub struct ParseColorSpaceError(String);

impl FromStr for ColorSpace {
    type Err = ParseColorSpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorSpace::Rgb),
            "lch" => Ok(ColorSpace::Lch),
            "hsl" => Ok(ColorSpace::Hsl),
            _ => Err(ParseColorSpaceError(s.to_string())),
        }
    }
}
