//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window size, title, and presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 64-16384).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 64-16384).
    pub height: u32,
    pub vsync: bool,
    /// Hex color the frame is cleared to before the first batch.
    pub clear_color: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Kiln".into(),
            width: 1280,
            height: 720,
            vsync: true,
            clear_color: "#101418".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Kiln");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 720);
        assert!(config.vsync);
        assert_eq!(config.clear_color, "#101418");
    }

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str(
            r#"
title = "Sprites"
vsync = false
"#,
        )
        .unwrap();
        assert_eq!(config.title, "Sprites");
        assert!(!config.vsync);
        // Defaults preserved
        assert_eq!(config.width, 1280);
    }
}
