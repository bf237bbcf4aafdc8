//! Bitmap font configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed-cell bitmap font atlas.
///
/// The atlas image is a grid of `columns` x `rows` equally sized cells;
/// cell `n` (row-major) holds the glyph for code point `first_char + n`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Atlas image path. Text is not drawn when unset.
    pub atlas: Option<PathBuf>,
    /// Cells per atlas row (valid range: 1-64).
    pub columns: u32,
    /// Cell rows in the atlas (valid range: 1-64).
    pub rows: u32,
    /// Code point stored in the first cell.
    pub first_char: u32,
    /// On-screen glyph width (valid range: 1.0-512.0).
    pub glyph_width: f64,
    /// On-screen glyph height (valid range: 1.0-512.0).
    pub glyph_height: f64,
    /// Extra horizontal space added after each glyph.
    pub tracking: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            atlas: None,
            columns: 16,
            rows: 16,
            first_char: 0,
            glyph_width: 16.0,
            glyph_height: 16.0,
            tracking: 0.0,
        }
    }
}

impl FontConfig {
    /// One past the last code point the grid covers.
    pub fn end_char(&self) -> u64 {
        self.first_char as u64 + self.columns as u64 * self.rows as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_config_defaults() {
        let config = FontConfig::default();
        assert!(config.atlas.is_none());
        assert_eq!(config.columns, 16);
        assert_eq!(config.rows, 16);
        assert_eq!(config.first_char, 0);
        assert_eq!(config.end_char(), 256);
    }

    #[test]
    fn font_config_atlas_path_from_toml() {
        let config: FontConfig = toml::from_str(
            r#"
atlas = "assets/font.png"
first_char = 32
rows = 6
"#,
        )
        .unwrap();
        assert_eq!(config.atlas, Some(PathBuf::from("assets/font.png")));
        assert_eq!(config.end_char(), 32 + 16 * 6);
    }
}
