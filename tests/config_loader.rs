use std::fs;
use std::path::PathBuf;

use stratum::config::{Config, ConfigError};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("failed to write config");
    (dir, path)
}

#[test]
fn loads_full_config() {
    let (_dir, path) = write_config(
        r#"
[ui]
tick_ms = 100

[greeting]
endpoint = "/v2/greeting"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.tick_ms, 100);
    assert_eq!(config.greeting.endpoint, "/v2/greeting");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.ui.tick_ms, 250);
    assert_eq!(config.greeting.endpoint, "/v1/greeting");
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[ui\ntick_ms = 100");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_tick_rate_is_rejected() {
    let (_dir, path) = write_config("[ui]\ntick_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn relative_endpoint_is_rejected() {
    let (_dir, path) = write_config("[greeting]\nendpoint = \"greeting\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
