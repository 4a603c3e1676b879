use crate::domain::error::ApiClientError;
use crate::infrastructure::config::Config;
use crate::infrastructure::credentials::StoredTokenProvider;
use crate::infrastructure::network::client::ApiClient;
use std::sync::Arc;

/// Shared state for the command-line front end: the loaded configuration and
/// an authenticated client wired to the persisted token file. Read-only
/// after construction.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub client: ApiClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ApiClientError> {
        let provider = Arc::new(StoredTokenProvider::from_config(&config));
        let client = ApiClient::with_token_provider(&config, provider)?;
        Ok(Self { config, client })
    }
}
