// HTTP client utilities
use crate::domain::error::ApiClientError;
use reqwest::Client;

/// Create the underlying HTTP client with pooling and timeout settings.
///
/// Construction failure is fatal at startup; there is no degraded mode
/// without a client.
pub fn create_client(timeout_seconds: u64) -> Result<Client, ApiClientError> {
    Ok(Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .user_agent(concat!("tienda/", env!("CARGO_PKG_VERSION")))
        .build()?)
}
