//! Palette types
//!
//! A [`ReferencePalette`] is the fixed sRGB table loaded from a palette
//! source. A [`WorkingPalette`] is that table converted into the color
//! space a metric works in, keeping the reference colors parallel-indexed
//! for output.

mod error;
mod reference;
mod working;

pub use error::{PaletteError, ParseColorError};
pub use reference::{ReferencePalette, LMP_COLOR_COUNT, QUAKE_NON_FULLBRIGHT};
pub use working::WorkingPalette;
