use crate::domain::traits::TokenProvider;
use crate::infrastructure::config::{get_token_path, Config};
use std::path::PathBuf;

/// Reads the access token persisted by the auth subsystem.
///
/// The file is re-read on every call, so a token rotated on disk is picked
/// up by the next request without restarting the process. A missing file or
/// an empty file both mean "no token".
pub struct StoredTokenProvider {
    path: PathBuf,
}

impl StoredTokenProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(get_token_path(config))
    }
}

impl TokenProvider for StoredTokenProvider {
    fn access_token(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }
}

/// Fixed token, for tests and callers that manage credentials themselves.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn access_token(&self) -> Option<String> {
        Some(self.token.clone())
    }
}
