//! Quantize - reduce images to a fixed palette
//!
//! Host for the `palette-match` crate: palette files, YAML configuration,
//! PNG I/O and the per-pixel quantization pass.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
