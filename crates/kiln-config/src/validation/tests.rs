//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    assert!(validate(&KilnConfig::default()).is_ok());
}

#[test]
fn catches_zero_max_quads() {
    let mut config = KilnConfig::default();
    config.renderer.max_quads = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("renderer.max_quads"));
}

#[test]
fn catches_oversized_max_quads() {
    let mut config = KilnConfig::default();
    config.renderer.max_quads = 2_000_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("renderer.max_quads"));
}

#[test]
fn catches_tiny_window() {
    let mut config = KilnConfig::default();
    config.window.width = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
}

#[test]
fn catches_bad_clear_color() {
    let mut config = KilnConfig::default();
    config.window.clear_color = "blue".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.clear_color"));
}

#[test]
fn catches_nan_glyph_width() {
    let mut config = KilnConfig::default();
    config.font.glyph_width = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("font.glyph_width"));
}

#[test]
fn catches_font_grid_past_unicode() {
    let mut config = KilnConfig::default();
    config.font.first_char = 0x10FFF0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("last code point"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = KilnConfig::default();
    config.font.columns = 0;
    config.font.rows = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("font.columns"));
    assert!(err.contains("font.rows"));
    assert!(err.contains("; "));
}
