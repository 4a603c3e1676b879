use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed with status {status}")]
    Status { status: u16, body: String },

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
