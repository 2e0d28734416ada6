use std::path::PathBuf;

use palette_match::PaletteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuantizeError {
    #[error("No palette configured (use --palette or set palette.path in the config)")]
    NoPalette,

    #[error("Palette error in {}: {source}", .path.display())]
    Palette {
        path: PathBuf,
        #[source]
        source: PaletteError,
    },

    #[error("Config error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}
