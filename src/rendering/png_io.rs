use palette_match::SearchContext;
use std::io::Cursor;
use std::path::Path;

use crate::error::{QuantizeError, RenderError};
use crate::rendering::quantize::{quantize_rgba, QuantizeStats};

/// Decoded image as 8-bit RGBA in scanline order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode any PNG into RGBA8.
///
/// Palette and low bit depth images are expanded, 16-bit channels are
/// stripped to 8 bits, and images without alpha get an opaque channel.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, RenderError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;

    let (width, height) = (info.width, info.height);
    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => {
            return Err(RenderError::PngDecode(
                "indexed image was not expanded".to_string(),
            ))
        }
    };

    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for row in buf[..info.buffer_size()]
        .chunks_exact(info.line_size)
        .take(height as usize)
    {
        for px in row[..width as usize * channels].chunks_exact(channels) {
            let rgba = match *px {
                [g] => [g, g, g, 255],
                [g, a] => [g, g, g, a],
                [r, g, b] => [r, g, b, 255],
                [r, g, b, a] => [r, g, b, a],
                _ => unreachable!("channel count is 1..=4"),
            };
            pixels.extend_from_slice(&rgba);
        }
    }

    tracing::debug!(width, height, color_type = ?info.color_type, "Decoded PNG");
    Ok(RgbaImage {
        width,
        height,
        pixels,
    })
}

/// Encode an RGBA8 image as PNG
pub fn encode_rgba(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    if image.width == 0 || image.height == 0 {
        return Err(RenderError::UnsupportedDimensions {
            width: image.width,
            height: image.height,
        });
    }
    let expected = image.width as usize * image.height as usize * 4;
    if image.pixels.len() != expected {
        return Err(RenderError::BufferSize {
            expected,
            actual: image.pixels.len(),
        });
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width, image.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&image.pixels)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Re-compress a PNG with oxipng, returning the input if that fails.
///
/// Color values under fully transparent pixels are kept as-is.
pub fn optimize_png(png_bytes: Vec<u8>) -> Vec<u8> {
    let options = oxipng::Options {
        strip: oxipng::StripChunks::Safe,
        optimize_alpha: false,
        ..Default::default()
    };
    match oxipng::optimize_from_memory(&png_bytes, &options) {
        Ok(optimized) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Optimized PNG"
            );
            optimized
        }
        Err(e) => {
            tracing::warn!(error = %e, "PNG optimization failed, keeping unoptimized output");
            png_bytes
        }
    }
}

/// Decode, quantize and re-encode a PNG held in memory
pub fn quantize_png(
    ctx: &SearchContext,
    png_bytes: &[u8],
    optimize: bool,
) -> Result<(Vec<u8>, QuantizeStats), RenderError> {
    let mut image = decode_rgba(png_bytes)?;
    let stats = quantize_rgba(ctx, image.width, image.height, &mut image.pixels)?;
    let encoded = encode_rgba(&image)?;
    let encoded = if optimize {
        optimize_png(encoded)
    } else {
        encoded
    };
    Ok((encoded, stats))
}

/// Quantize a PNG file and write the result to `output`
pub fn quantize_png_file(
    ctx: &SearchContext,
    input: &Path,
    output: &Path,
    optimize: bool,
) -> Result<QuantizeStats, QuantizeError> {
    let bytes = std::fs::read(input).map_err(|source| QuantizeError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let (encoded, stats) = quantize_png(ctx, &bytes, optimize)?;
    std::fs::write(output, &encoded).map_err(|source| QuantizeError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        pixels = stats.pixels,
        colors_used = stats.colors_used,
        bytes = encoded.len(),
        "Quantized image"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_match::{ColorSpace, ReferencePalette, WeightVector};
    use pretty_assertions::assert_eq;

    fn encode(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    #[test]
    fn test_decode_rgba_round_trip() {
        let image = RgbaImage {
            width: 2,
            height: 1,
            pixels: vec![1, 2, 3, 4, 250, 251, 252, 0],
        };
        let decoded = decode_rgba(&encode_rgba(&image).unwrap()).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_decode_rgb_adds_opaque_alpha() {
        let png = encode(2, 1, png::ColorType::Rgb, &[10, 20, 30, 40, 50, 60]);
        let decoded = decode_rgba(&png).unwrap();
        assert_eq!(decoded.pixels, vec![10, 20, 30, 255, 40, 50, 60, 255]);
    }

    #[test]
    fn test_decode_grayscale_alpha() {
        let png = encode(2, 1, png::ColorType::GrayscaleAlpha, &[100, 7, 200, 255]);
        let decoded = decode_rgba(&png).unwrap();
        assert_eq!(decoded.pixels, vec![100, 100, 100, 7, 200, 200, 200, 255]);
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode_rgba(b"not a png"),
            Err(RenderError::PngDecode(_))
        ));
    }

    #[test]
    fn test_encode_rejects_zero_size() {
        let image = RgbaImage {
            width: 0,
            height: 3,
            pixels: Vec::new(),
        };
        assert!(matches!(
            encode_rgba(&image),
            Err(RenderError::UnsupportedDimensions { .. })
        ));
    }

    #[test]
    fn test_quantize_png_keeps_alpha_and_palette() {
        let reference = ReferencePalette::from_hex(&["#000000", "#ffffff", "#00ff00"]).unwrap();
        let ctx = SearchContext::new(&reference, ColorSpace::Rgb, WeightVector::UNIT);
        let png = encode(
            3,
            1,
            png::ColorType::Rgba,
            &[20, 20, 20, 255, 30, 220, 40, 128, 240, 250, 245, 0],
        );

        let (out, stats) = quantize_png(&ctx, &png, false).unwrap();
        let decoded = decode_rgba(&out).unwrap();
        assert_eq!(
            decoded.pixels,
            vec![0, 0, 0, 255, 0, 255, 0, 128, 255, 255, 255, 0]
        );
        assert_eq!(stats.colors_used, 3);
    }

    #[test]
    fn test_optimize_keeps_pixels() {
        let image = RgbaImage {
            width: 4,
            height: 1,
            pixels: vec![
                0, 0, 0, 255, 255, 255, 255, 0, 0, 0, 0, 255, 12, 34, 56, 0,
            ],
        };
        let optimized = optimize_png(encode_rgba(&image).unwrap());
        assert_eq!(decode_rgba(&optimized).unwrap(), image);
    }
}
