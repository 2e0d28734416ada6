//! Error types for palette construction
//!
//! Searching never fails; only building a palette from external data can.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided
    #[error("palette cannot be empty")]
    EmptyPalette,

    /// A `palette.lmp` blob holds fewer colors than requested
    #[error("palette.lmp has {len} bytes, {needed} needed for the requested colors")]
    TruncatedLmp {
        /// Length of the blob in bytes
        len: usize,
        /// Bytes required for the requested color count
        needed: usize,
    },

    /// A `palette.lmp` color count whose byte length does not fit in `usize`
    #[error("palette.lmp color count {count} is too large")]
    CountTooLarge { count: usize },

    /// Invalid hex color string at the given entry
    #[error("invalid color at entry {index}: {source}")]
    ParseColor {
        /// Zero-based entry index
        index: usize,
        #[source]
        source: ParseColorError,
    },

    /// Invalid hex color on a line of a text palette
    #[error("invalid color on line {line}: {source}")]
    ParseLine {
        /// One-based line number, counting comments and blank lines
        line: usize,
        #[source]
        source: ParseColorError,
    },
}
