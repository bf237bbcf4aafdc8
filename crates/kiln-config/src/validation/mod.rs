//! Full configuration validation.
//!
//! Each check pushes a message into a shared list; the orchestrator joins
//! them into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::KilnConfig;
use kiln_common::{Color, ConfigError};

use helpers::validate_range;

/// Largest code point a font grid may cover.
const MAX_CODE_POINT: u64 = 0x10FFFF;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &KilnConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    validate_renderer(&mut errors, config);
    validate_font(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &KilnConfig) {
    validate_range(errors, "window.width", config.window.width, 64..=16384);
    validate_range(errors, "window.height", config.window.height, 64..=16384);
    if Color::from_hex(&config.window.clear_color).is_none() {
        errors.push(format!(
            "window.clear_color = {:?} is not a hex color",
            config.window.clear_color
        ));
    }
}

fn validate_renderer(errors: &mut Vec<String>, config: &KilnConfig) {
    validate_range(
        errors,
        "renderer.max_quads",
        config.renderer.max_quads,
        1..=1_000_000,
    );
}

fn validate_font(errors: &mut Vec<String>, config: &KilnConfig) {
    let font = &config.font;
    validate_range(errors, "font.columns", font.columns, 1..=64);
    validate_range(errors, "font.rows", font.rows, 1..=64);
    validate_range(errors, "font.glyph_width", font.glyph_width, 1.0..=512.0);
    validate_range(errors, "font.glyph_height", font.glyph_height, 1.0..=512.0);
    if font.end_char() > MAX_CODE_POINT + 1 {
        errors.push(format!(
            "font grid starting at {} runs past the last code point",
            font.first_char
        ));
    }
}
