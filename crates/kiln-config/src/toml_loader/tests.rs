//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::Projection;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_kiln_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, kiln_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[window]
title = "Batch Test"

[renderer]
max_quads = 2048
projection = "centered"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "Batch Test");
    assert_eq!(config.renderer.max_quads, 2048);
    assert_eq!(config.renderer.projection, Projection::Centered);
    // Defaults preserved
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.font.columns, 16);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, kiln_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[renderer]\nmax_quads = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.renderer.max_quads, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kiln").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "Kiln");
    assert_eq!(config.renderer.max_quads, 10_000);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::KilnConfig;

    let config: KilnConfig = toml::from_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // dirs::config_dir() can be unavailable in sandboxed CI
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("kiln"));
        assert!(path_str.ends_with("config.toml"));
    }
}
