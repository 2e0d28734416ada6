//! Color types and conversion into working color spaces
//!
//! - [`Srgb8`]: 8-bit gamma-encoded reference colors (palette tables, pixels)
//! - [`ColorSample`]: a color in one working space, plus an alpha slot
//! - [`WeightVector`]: per-slot scaling factors for the metrics
//!
//! # Example
//!
//! ```
//! use palette_match::{ColorSpace, Srgb8};
//!
//! let red = Srgb8::new(255, 0, 0);
//! let sample = ColorSpace::Rgb.convert(red, 1.0);
//! let [r, g, b] = sample.channels();
//! assert!((r - 1.0).abs() < 1e-6);
//! assert_eq!((g, b), (0.0, 0.0));
//! ```

pub(crate) mod convert;
mod sample;
mod srgb;
mod weights;

pub use convert::{LCH_CHROMA_MAX, LCH_LIGHTNESS_MAX};
pub use sample::ColorSample;
pub use srgb::Srgb8;
pub use weights::{ParseWeightsError, WeightVector, WEIGHT_RANGE};
