mod common;

use common::temp_config;
use inkpost::config::{Config, ConfigError};
use inkpost::ui::Language;
use std::path::PathBuf;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert!(config.session.path.is_none());
    assert!(config.session.revalidate_on_start);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.language, Language::En);
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("inkpost/config.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_valid_toml() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "https://blog.example.com"
connect_timeout_seconds = 2

[session]
path = "/tmp/inkpost-test/session.json"
revalidate_on_start = false

[ui]
tick_rate_ms = 100
language = "ja"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://blog.example.com");
    assert_eq!(config.api.connect_timeout_seconds, 2);
    assert!(!config.session.revalidate_on_start);
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.ui.language, Language::Ja);
    assert_eq!(
        config.session_path(),
        PathBuf::from("/tmp/inkpost-test/session.json")
    );
}

#[test]
fn test_partial_sections_keep_defaults() {
    let (_dir, path) = temp_config("[ui]\nlanguage = \"ja\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.language, Language::Ja);
}

#[test]
fn test_parse_invalid_toml() {
    let (_dir, path) = temp_config("[api\nbase_url = ");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_unknown_language_is_parse_error() {
    let (_dir, path) = temp_config("[ui]\nlanguage = \"fr\"\n");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_validation_rejects_non_http_url() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"blog.example.com\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("api.base_url"));
}

#[test]
fn test_validation_rejects_zero_tick_rate() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_default_session_path_under_data_dir() {
    let path = Config::default().session_path();
    assert!(path.ends_with("inkpost/session.json"));
}

#[test]
fn test_config_roundtrip() {
    let mut config = Config::default();
    config.api.base_url = "https://example.org".to_string();
    config.ui.language = Language::Ja;

    let serialized = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&serialized).unwrap();
    assert_eq!(parsed, config);
}
