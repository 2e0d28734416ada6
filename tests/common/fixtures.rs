//! Test fixtures and constants.

use std::path::{Path, PathBuf};

/// Small palette covering the primaries, black, white and a mid grey
pub const TEST_PALETTE: [&str; 7] = [
    "#000000", "#ffffff", "#808080", "#ff0000", "#00ff00", "#0000ff", "#ffff00",
];

/// Write `TEST_PALETTE` as a hex text file with a comment header
pub fn write_hex_palette(dir: &Path) -> PathBuf {
    let path = dir.join("palette.txt");
    let mut text = String::from("; test palette\n\n");
    for color in TEST_PALETTE {
        text.push_str(color);
        text.push('\n');
    }
    std::fs::write(&path, text).expect("write hex palette");
    path
}

/// Write a 256-entry Quake-style `.lmp` whose first entries are
/// `TEST_PALETTE` and whose remaining entries are magenta
pub fn write_lmp_palette(dir: &Path) -> PathBuf {
    let path = dir.join("palette.lmp");
    let mut bytes = Vec::with_capacity(768);
    for color in TEST_PALETTE {
        let rgb = u32::from_str_radix(&color[1..], 16).expect("valid hex");
        bytes.extend_from_slice(&rgb.to_be_bytes()[1..]);
    }
    while bytes.len() < 768 {
        bytes.extend_from_slice(&[255, 0, 255]);
    }
    std::fs::write(&path, bytes).expect("write lmp palette");
    path
}

/// Write a YAML config file
pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("quantize.yaml");
    std::fs::write(&path, yaml).expect("write config");
    path
}

/// A gradient with varying alpha: every pixel has a distinct alpha value
pub fn gradient_rgba(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            pixels.extend_from_slice(&[
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                ((x + y) * 7 % 256) as u8,
                (i % 256) as u8,
            ]);
        }
    }
    pixels
}

/// Encode an RGBA8 buffer as PNG bytes
pub fn encode_png(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("png header");
        writer.write_image_data(pixels).expect("png data");
    }
    buf
}

/// Write an RGBA8 buffer as a PNG file
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32, pixels: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode_png(width, height, pixels)).expect("write png");
    path
}
