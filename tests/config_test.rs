//! Configuration loading and palette resolution.

mod common;

use common::*;
use palette_match::{ColorSpace, Srgb8, WeightVector};
use pretty_assertions::assert_eq;
use quantize::error::QuantizeError;
use quantize::models::{AppConfig, Overrides};

#[test]
fn test_config_file_builds_context() {
    let dir = tempfile::tempdir().unwrap();
    write_hex_palette(dir.path());
    let config_path = write_config(
        dir.path(),
        "palette:\n  path: palette.txt\ncolor_space: lch\nweights: [1.0, 0.5, 1.5]\n",
    );

    let config = AppConfig::load(&config_path).unwrap();
    let ctx = config.build_context().unwrap();
    assert_eq!(ctx.space(), ColorSpace::Lch);
    assert_eq!(ctx.weights(), WeightVector::new(1.0, 0.5, 1.5));
    assert_eq!(ctx.palette().len(), TEST_PALETTE.len());
    assert_eq!(ctx.match_srgb(Srgb8::new(250, 5, 5)), (3, Srgb8::new(255, 0, 0)));
}

#[test]
fn test_config_weights_are_clamped() {
    let dir = tempfile::tempdir().unwrap();
    write_hex_palette(dir.path());
    let config_path = write_config(
        dir.path(),
        "palette:\n  path: palette.txt\nweights: [5.0, -1.0, 1.0]\n",
    );

    let ctx = AppConfig::load(&config_path).unwrap().build_context().unwrap();
    assert_eq!(ctx.weights(), WeightVector::new(2.0, 0.0, 1.0));
}

#[test]
fn test_lmp_count_from_config() {
    let dir = tempfile::tempdir().unwrap();
    write_lmp_palette(dir.path());
    let config_path = write_config(dir.path(), "palette:\n  path: palette.lmp\n");

    // Default count keeps the first 224 entries
    let ctx = AppConfig::load(&config_path).unwrap().build_context().unwrap();
    assert_eq!(ctx.palette().len(), 224);

    let ctx = AppConfig::load(&config_path)
        .unwrap()
        .with_overrides(Overrides {
            count: Some(3),
            ..Overrides::default()
        })
        .build_context()
        .unwrap();
    assert_eq!(ctx.palette().len(), 3);
    assert_eq!(ctx.match_srgb(Srgb8::new(255, 0, 255)).1, Srgb8::new(255, 255, 255));
}

#[test]
fn test_explicit_config_errors_propagate() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(dir.path(), "color_space: cmyk\n");

    assert!(matches!(
        AppConfig::load(&config_path),
        Err(QuantizeError::Config { .. })
    ));
    assert_eq!(
        AppConfig::load_or_default(Some(config_path.as_path())),
        AppConfig::default()
    );
}

#[test]
fn test_bad_palette_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let palette = dir.path().join("bad.txt");
    std::fs::write(&palette, "#000000\nnot-a-color\n").unwrap();

    let err = AppConfig::default()
        .with_overrides(Overrides {
            palette: Some(palette.clone()),
            ..Overrides::default()
        })
        .build_context()
        .unwrap_err();
    match err {
        QuantizeError::Palette { path, .. } => assert_eq!(path, palette),
        other => panic!("Expected Palette error, got {other:?}"),
    }
}

#[test]
fn test_empty_palette_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let palette = dir.path().join("empty.txt");
    std::fs::write(&palette, "; nothing here\n\n").unwrap();

    let result = AppConfig::default()
        .with_overrides(Overrides {
            palette: Some(palette),
            ..Overrides::default()
        })
        .build_context();
    assert!(matches!(result, Err(QuantizeError::Palette { .. })));
}
