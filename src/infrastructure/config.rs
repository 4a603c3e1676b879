use crate::domain::error::ApiClientError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the configured API base URL.
pub const BASE_URL_ENV: &str = "TIENDA_API_BASE_URL";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Override for the persisted access token file. Defaults to
    /// `<config dir>/tienda/accessToken` when unset.
    pub token_path: Option<String>,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: "WARN".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            token_path: None,
            logging: Logging::default(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ApiClientError> {
        Ok(toml::from_str(content)?)
    }
}

// Defaults
fn default_base_url() -> String {
    // Relative default only works behind a same-origin proxy; deployments
    // are expected to set base_url or the environment override.
    "/api".to_string()
}
fn default_timeout_seconds() -> u64 {
    30
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tienda").join("config.toml"))
}

/// Where the persisted access token lives (config override or default path).
pub fn get_token_path(config: &Config) -> PathBuf {
    match &config.token_path {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tienda")
            .join("accessToken"),
    }
}

pub fn load_config() -> Result<Config, ApiClientError> {
    let mut config = Config::default();

    if let Some(path) = get_config_path() {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            match Config::from_toml(&content) {
                Ok(parsed) => config = parsed,
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    if let Ok(url) = std::env::var(BASE_URL_ENV) {
        if !url.is_empty() {
            config.base_url = url;
        }
    }

    Ok(config)
}

pub fn generate_config_sample() -> Result<(), ApiClientError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            eprintln!("Config file already exists at: {}", path.display());
            return Ok(());
        }

        // Create directory if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Generate sample config
        let sample = Config::default();
        let toml_content = toml::to_string_pretty(&sample)
            .map_err(|e| ApiClientError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, toml_content)
            .map_err(|e| ApiClientError::Config(format!("Failed to write config file: {}", e)))?;
        println!("Generated config file at: {}", path.display());
    } else {
        return Err(ApiClientError::Config(
            "Cannot determine config directory".to_string(),
        ));
    }

    Ok(())
}
