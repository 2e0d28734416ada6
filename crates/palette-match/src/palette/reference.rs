//! Reference palette: the fixed table of 8-bit sRGB colors.
//!
//! A reference palette is what palette files contain and what the quantized
//! output is written in. Matching never happens against it directly; it is
//! converted into a [`WorkingPalette`](super::WorkingPalette) first.

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Srgb8;

/// Number of non-fullbright colors at the start of a Quake `palette.lmp`.
pub const QUAKE_NON_FULLBRIGHT: usize = 224;

/// Number of colors stored in a complete `palette.lmp`.
pub const LMP_COLOR_COUNT: usize = 256;

/// An ordered, non-empty table of sRGB reference colors.
///
/// Duplicate entries are allowed. Searches resolve ties toward the lowest
/// index, so a later duplicate is never selected.
///
/// # Example
///
/// ```
/// use palette_match::{ReferencePalette, Srgb8};
///
/// let palette = ReferencePalette::new(vec![
///     Srgb8::new(0, 0, 0),
///     Srgb8::new(255, 255, 255),
/// ]).unwrap();
/// assert_eq!(palette.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePalette {
    colors: Vec<Srgb8>,
}

impl ReferencePalette {
    /// Create a palette from reference colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: Vec<Srgb8>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Create a palette from hex strings such as `"#FF0000"` or `"#F00"`.
    ///
    /// ```
    /// use palette_match::ReferencePalette;
    ///
    /// let palette = ReferencePalette::from_hex(&["#000", "#FFFFFF", "#ff0000"]).unwrap();
    /// assert_eq!(palette.get(2).unwrap().to_hex(), "#ff0000");
    /// ```
    pub fn from_hex(hex: &[&str]) -> Result<Self, PaletteError> {
        let colors = hex
            .iter()
            .enumerate()
            .map(|(index, s)| {
                Srgb8::from_str(s).map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Parse a text palette: one hex color per line.
    ///
    /// Blank lines and lines starting with `;` or `//` are skipped. Errors
    /// report the one-based line number, counting skipped lines.
    pub fn from_hex_lines(text: &str) -> Result<Self, PaletteError> {
        let mut colors = Vec::new();
        for (line_no, line) in (1..).zip(text.lines()) {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with("//") {
                continue;
            }
            let color = Srgb8::from_str(line).map_err(|source| PaletteError::ParseLine {
                line: line_no,
                source,
            })?;
            colors.push(color);
        }
        Self::new(colors)
    }

    /// Read the first `count` colors of a Quake `palette.lmp` blob.
    ///
    /// The blob is a flat sequence of `R, G, B` bytes. Pass
    /// [`QUAKE_NON_FULLBRIGHT`] to skip the fullbright entries at the end
    /// of the stock palette.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `count` is zero
    /// - [`PaletteError::CountTooLarge`] if `count * 3` overflows
    /// - [`PaletteError::TruncatedLmp`] if the blob is shorter than `count * 3`
    pub fn from_lmp(bytes: &[u8], count: usize) -> Result<Self, PaletteError> {
        if count == 0 {
            return Err(PaletteError::EmptyPalette);
        }
        let needed = count
            .checked_mul(3)
            .ok_or(PaletteError::CountTooLarge { count })?;
        if bytes.len() < needed {
            return Err(PaletteError::TruncatedLmp {
                len: bytes.len(),
                needed,
            });
        }

        let colors = bytes[..needed]
            .chunks_exact(3)
            .map(|rgb| Srgb8::from_bytes([rgb[0], rgb[1], rgb[2]]))
            .collect();
        Self::new(colors)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<Srgb8> {
        self.colors.get(idx).copied()
    }

    #[inline]
    pub fn colors(&self) -> &[Srgb8] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = Srgb8> + '_ {
        self.colors.iter().copied()
    }
}
