//! palette-match: weighted nearest-color matching against small palettes
//!
//! This library reduces a color to the closest entry of a small fixed
//! palette (a few hundred colors at most) under one of several perceptually
//! motivated distance metrics. It is the matching half of a per-pixel
//! palettization operation; pixel I/O lives in the caller.
//!
//! # Quick Start
//!
//! ```
//! use palette_match::{ColorSpace, ReferencePalette, SearchContext, Srgb8, WeightVector};
//!
//! let reference = ReferencePalette::from_hex(&["#000000", "#ffffff", "#ff0000"]).unwrap();
//! let ctx = SearchContext::new(&reference, ColorSpace::Rgb, WeightVector::UNIT);
//!
//! let query = ctx.convert(Srgb8::new(240, 30, 30), 1.0);
//! assert_eq!(ctx.nearest_index(query), 2);
//! ```
//!
//! # Color Spaces and Metrics
//!
//! | Space | Channels | Metric |
//! |-------|----------|--------|
//! | [`ColorSpace::Rgb`] | linear red, green, blue | weighted Euclidean |
//! | [`ColorSpace::Lch`] | `L*/100`, `C*/180`, `h/360` | spiral arc + chroma + lightness |
//! | [`ColorSpace::Hsl`] | `h/360`, saturation, lightness | spiral arc in the bicone + lightness |
//!
//! Conversion from sRGB into each space is delegated to the `palette`
//! crate and happens once per palette entry when a [`WorkingPalette`] is
//! built, and once per query.
//!
//! ## The spiral hue term
//!
//! The LCH and HSL metrics treat the chroma (or bicone radius) and hue of a
//! color as polar coordinates. Two colors of different hue are not compared
//! along the straight chord between them; the hue step is measured as an arc
//! at their mean radius, the path an archimedean spiral would take between
//! them:
//!
//! ```text
//! theta = circular_distance(h1, h2) * 2π * w_hue * (r_min / r_max)
//! arc   = (r_min + r_max) / 2 * theta
//! d²    = (w_radius * (r_max - r_min))² + arc² + (w_lightness * dL)²
//! ```
//!
//! The `r_min / r_max` factor shrinks the hue term to nothing as either
//! color approaches the grey axis, where hue is undefined. Two fully
//! achromatic colors differ only in lightness.
//!
//! ## Weight slots
//!
//! Weight slot order is part of each metric's contract and does not always
//! follow channel order. LCH samples are stored lightness-chroma-hue but
//! weighted hue-chroma-lightness. See [`ColorSpace::weight_labels()`].
//!
//! ## Search
//!
//! Matching is an exhaustive scan. Ties go to the lowest palette index.
//! Distances are only comparable within one metric.

pub mod color;
pub mod metric;
pub mod palette;
pub mod search;


// `crate::` keeps the local `palette` module apart from the `palette` crate
pub use crate::color::{ColorSample, ParseWeightsError, Srgb8, WeightVector};
pub use crate::metric::{ColorSpace, ParseColorSpaceError};
pub use crate::palette::{PaletteError, ParseColorError, ReferencePalette, WorkingPalette};
pub use crate::search::SearchContext;
