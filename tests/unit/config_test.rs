//! Tests for configuration loading

use std::fs;

use stepconf::config::{CONFIG_FILE_NAME, Config};
use tempfile::TempDir;

#[test]
fn test_local_file_is_found() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "[render]\nindent = 2\n").unwrap();

    let path = Config::resolve_path(None, dir.path()).unwrap();
    assert_eq!(path, dir.path().join(CONFIG_FILE_NAME));
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.render.indent, 2);
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");
    let err = Config::load(Some(missing.as_path())).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[render\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config file"));
}
