//! Configuration defaults and TOML parsing.

use tienda_client::infrastructure::config::{get_token_path, Config};

#[test]
fn defaults_match_the_documented_surface() {
    let config = Config::default();
    assert_eq!(config.base_url, "/api");
    assert_eq!(config.timeout_seconds, 30);
    assert!(config.token_path.is_none());
    assert!(config.logging.enable);
    assert_eq!(config.logging.level, "WARN");
    assert!(config.logging.path.is_none());
}

#[test]
fn partial_toml_falls_back_to_defaults() {
    let config = Config::from_toml("base_url = \"https://api.tienda.example\"").unwrap();
    assert_eq!(config.base_url, "https://api.tienda.example");
    assert_eq!(config.timeout_seconds, 30);
    assert!(config.logging.enable);
}

#[test]
fn full_toml_round_trips() {
    let content = r#"
base_url = "https://api.tienda.example"
timeout_seconds = 10
token_path = "/var/lib/tienda/accessToken"

[logging]
enable = false
path = "/tmp/tienda.log"
level = "DEBUG"
"#;
    let config = Config::from_toml(content).unwrap();
    assert_eq!(config.base_url, "https://api.tienda.example");
    assert_eq!(config.timeout_seconds, 10);
    assert_eq!(config.token_path.as_deref(), Some("/var/lib/tienda/accessToken"));
    assert!(!config.logging.enable);
    assert_eq!(config.logging.path.as_deref(), Some("/tmp/tienda.log"));
    assert_eq!(config.logging.level, "DEBUG");
}

#[test]
fn invalid_toml_is_an_error() {
    assert!(Config::from_toml("base_url = ").is_err());
}

#[test]
fn token_path_override_wins_over_the_default_location() {
    let config = Config {
        token_path: Some("/var/lib/tienda/accessToken".to_string()),
        ..Config::default()
    };
    assert_eq!(
        get_token_path(&config),
        std::path::PathBuf::from("/var/lib/tienda/accessToken")
    );

    // Empty override falls back to the default location
    let config = Config {
        token_path: Some(String::new()),
        ..Config::default()
    };
    assert!(get_token_path(&config).ends_with("tienda/accessToken"));
}
