use palette_match::ReferencePalette;
use std::path::Path;

use crate::error::QuantizeError;

/// Load a reference palette from disk.
///
/// Files with an `.lmp` extension are read as raw Quake palette lumps
/// (3 bytes per entry) and truncated to the first `count` entries. Anything
/// else is read as text with one hex color per line; `count` does not apply.
pub fn load_palette(path: &Path, count: usize) -> Result<ReferencePalette, QuantizeError> {
    let is_lmp = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("lmp"));

    let io_error = |source| QuantizeError::Io {
        path: path.to_path_buf(),
        source,
    };
    let palette_error = |source| QuantizeError::Palette {
        path: path.to_path_buf(),
        source,
    };

    let palette = if is_lmp {
        let bytes = std::fs::read(path).map_err(io_error)?;
        ReferencePalette::from_lmp(&bytes, count).map_err(palette_error)?
    } else {
        let text = std::fs::read_to_string(path).map_err(io_error)?;
        ReferencePalette::from_hex_lines(&text).map_err(palette_error)?
    };

    let format = if is_lmp { "lmp" } else { "hex" };
    tracing::info!(
        path = %path.display(),
        colors = palette.len(),
        format,
        "Loaded palette"
    );
    Ok(palette)
}
