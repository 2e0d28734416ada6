//! Reference color to working color space conversion
//!
//! The conversion math itself belongs to the `palette` crate; this module
//! only normalizes its output into the channel layout of [`ColorSample`].

use ::palette::{FromColor, Hsl, Lch, LinSrgb};

use super::sample::ColorSample;
use super::srgb::Srgb8;

/// Maximum lightness of CIE L*C*h used for normalization.
pub const LCH_LIGHTNESS_MAX: f32 = 100.0;

/// Chroma of CIE L*C*h mapped to `1.0`.
pub const LCH_CHROMA_MAX: f32 = 180.0;

/// Degrees to a fraction of a full turn in `[0, 1)`.
#[inline]
fn hue_turns(degrees: f32) -> f32 {
    let turns = degrees / 360.0;
    let turns = turns - turns.floor();
    // floor() can leave exactly 1.0 for values a hair below a full turn
    if turns >= 1.0 {
        0.0
    } else {
        turns
    }
}

/// Linear RGB sample.
pub fn to_linear_rgb(color: Srgb8, alpha: f32) -> ColorSample {
    let lin: LinSrgb = color.to_float().into_linear();
    ColorSample::new(lin.red, lin.green, lin.blue, alpha)
}

/// Normalized CIE L*C*h (D65) sample: `(L/100, C/180, h/360)`.
pub fn to_lch(color: Srgb8, alpha: f32) -> ColorSample {
    let lin: LinSrgb = color.to_float().into_linear();
    let lch = Lch::from_color(lin);
    ColorSample::new(
        lch.l / LCH_LIGHTNESS_MAX,
        lch.chroma / LCH_CHROMA_MAX,
        hue_turns(lch.hue.into_positive_degrees()),
        alpha,
    )
}

/// HSL sample: `(h/360, s, l)`.
pub fn to_hsl(color: Srgb8, alpha: f32) -> ColorSample {
    let hsl: Hsl = Hsl::from_color(color.to_float());
    ColorSample::new(
        hue_turns(hsl.hue.into_positive_degrees()),
        hsl.saturation,
        hsl.lightness,
        alpha,
    )
}
