use palette_match::{SearchContext, Srgb8};

use crate::error::RenderError;

/// Summary of one quantization pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuantizeStats {
    /// Pixels processed
    pub pixels: usize,
    /// Distinct palette entries that appear in the output
    pub colors_used: usize,
}

/// Replace a pixel's color with its nearest palette color.
///
/// Alpha is carried through untouched.
pub fn quantize_pixel(ctx: &SearchContext, pixel: [u8; 4]) -> [u8; 4] {
    let [r, g, b, a] = pixel;
    let (_, matched) = ctx.match_srgb(Srgb8::new(r, g, b));
    let [r, g, b] = matched.to_bytes();
    [r, g, b, a]
}

/// Quantize an RGBA8 buffer in place, in scanline order.
///
/// `pixels` must hold exactly `width * height * 4` bytes.
pub fn quantize_rgba(
    ctx: &SearchContext,
    width: u32,
    height: u32,
    pixels: &mut [u8],
) -> Result<QuantizeStats, RenderError> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(RenderError::UnsupportedDimensions { width, height })?;
    if pixels.len() != expected {
        return Err(RenderError::BufferSize {
            expected,
            actual: pixels.len(),
        });
    }

    let mut used = vec![false; ctx.palette().len()];
    // Runs of identical pixels are common; reuse the previous match
    let mut last: Option<(Srgb8, usize, Srgb8)> = None;

    for px in pixels.chunks_exact_mut(4) {
        let color = Srgb8::new(px[0], px[1], px[2]);
        let (idx, matched) = match last {
            Some((prev, idx, matched)) if prev == color => (idx, matched),
            _ => {
                let (idx, matched) = ctx.match_srgb(color);
                last = Some((color, idx, matched));
                (idx, matched)
            }
        };
        if let Some(slot) = used.get_mut(idx) {
            *slot = true;
        }
        px[..3].copy_from_slice(&matched.to_bytes());
    }

    let stats = QuantizeStats {
        pixels: expected / 4,
        colors_used: used.iter().filter(|&&u| u).count(),
    };
    tracing::debug!(
        width,
        height,
        colors_used = stats.colors_used,
        "Quantized pixel buffer"
    );
    Ok(stats)
}
