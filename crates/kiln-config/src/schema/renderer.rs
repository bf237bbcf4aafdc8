//! Batch renderer configuration types.

use serde::{Deserialize, Serialize};

/// Coordinate system the orthographic projection maps onto the window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    /// Pixel units, origin at the bottom-left corner, y up.
    #[default]
    Pixels,
    /// Pixel units, origin at the window center, y up.
    Centered,
}

/// Batch renderer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Quads one batch can hold before the caller must flush
    /// (valid range: 1-1000000).
    pub max_quads: u32,
    pub projection: Projection,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            max_quads: 10_000,
            projection: Projection::Pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_config_defaults() {
        let config = RendererConfig::default();
        assert_eq!(config.max_quads, 10_000);
        assert_eq!(config.projection, Projection::Pixels);
    }

    #[test]
    fn projection_serialization() {
        let json = serde_json::to_string(&Projection::Centered).unwrap();
        assert_eq!(json, "\"centered\"");
        let parsed: Projection = serde_json::from_str("\"pixels\"").unwrap();
        assert_eq!(parsed, Projection::Pixels);
    }
}
