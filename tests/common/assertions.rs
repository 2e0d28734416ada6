//! Assertion helpers for tests.

use palette_match::Srgb8;
use pretty_assertions::assert_eq;

use super::fixtures::TEST_PALETTE;

/// Assert every pixel's color is one of `TEST_PALETTE`
pub fn assert_only_palette_colors(pixels: &[u8]) {
    let palette: Vec<Srgb8> = TEST_PALETTE
        .iter()
        .map(|hex| hex.parse().expect("valid palette color"))
        .collect();
    for (i, px) in pixels.chunks_exact(4).enumerate() {
        let color = Srgb8::new(px[0], px[1], px[2]);
        assert!(
            palette.contains(&color),
            "Pixel {i} has color {color}, which is not in the palette"
        );
    }
}

/// Assert the alpha channel of two RGBA8 buffers is identical
pub fn assert_alpha_preserved(before: &[u8], after: &[u8]) {
    assert_eq!(before.len(), after.len(), "Buffer sizes differ");
    let alpha_before: Vec<u8> = before.chunks_exact(4).map(|px| px[3]).collect();
    let alpha_after: Vec<u8> = after.chunks_exact(4).map(|px| px[3]).collect();
    assert_eq!(alpha_before, alpha_after, "Alpha channel changed");
}
