//! Kiln configuration system.
//!
//! TOML-based configuration with validation. Every section uses serde
//! defaults so a partial file (or no file at all) works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use kiln_config::{config_to_toml, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_toml(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{KilnConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{default_config_path, load_default, load_from_path};

use kiln_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating it if missing.
///
/// The result is validated; validation failures are returned as
/// [`ConfigError::ValidationError`].
pub fn load_config() -> Result<KilnConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<KilnConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed TOML string.
pub fn config_to_toml(config: &KilnConfig) -> String {
    toml::to_string_pretty(config)
        .unwrap_or_else(|e| format!("# failed to serialize config: {e}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_toml_contains_all_sections() {
        let toml = config_to_toml(&KilnConfig::default());
        assert!(toml.contains("[window]"));
        assert!(toml.contains("[renderer]"));
        assert!(toml.contains("[font]"));
        assert!(toml.contains("[logging]"));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = KilnConfig::default();
        let text = config_to_toml(&config);
        let parsed: KilnConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.window.title, "Kiln");
        assert_eq!(parsed.renderer.max_quads, 10_000);
        assert_eq!(parsed.font.columns, 16);
    }

    #[test]
    fn load_config_from_missing_path_is_file_not_found() {
        let err = load_config_from(Path::new("/tmp/definitely_missing_kiln.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[renderer]\nmax_quads = 0\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("renderer.max_quads"));
    }
}
