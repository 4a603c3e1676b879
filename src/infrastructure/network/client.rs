use crate::domain::error::ApiClientError;
use crate::domain::traits::TokenProvider;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::http::create_client;
use reqwest::{Client, RequestBuilder};
use std::sync::Arc;
use tracing::debug;

/// Request-issuing handle pre-bound to the API base URL.
///
/// Two variants, constructed explicitly rather than held in process-wide
/// state: the base client sends requests as-is, the authenticated client
/// consults its `TokenProvider` before every request and attaches
/// `Authorization: Bearer <token>` when one is available. Cloning is cheap;
/// the inner `reqwest::Client` already shares its connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token_provider: Option<Arc<dyn TokenProvider>>,
}

impl ApiClient {
    /// Base client: base URL binding only, no authentication.
    pub fn new(config: &Config) -> Result<Self, ApiClientError> {
        Ok(Self {
            http: create_client(config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token_provider: None,
        })
    }

    /// Authenticated variant: same base URL binding, plus a bearer token
    /// read from `provider` on each outgoing request.
    pub fn with_token_provider(
        config: &Config,
        provider: Arc<dyn TokenProvider>,
    ) -> Result<Self, ApiClientError> {
        let mut client = Self::new(config)?;
        client.token_provider = Some(provider);
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a GET request for `path` (joined onto the base URL).
    ///
    /// The token provider is asked fresh here, not at construction, so a
    /// rotated credential applies to the next call.
    pub fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);
        let mut request = self.http.get(&url);
        if let Some(provider) = &self.token_provider {
            if let Some(token) = provider.access_token() {
                request = request.bearer_auth(token);
            }
        }
        request
    }
}
