use crate::domain::model::{ProductQuery, ResponseEnvelope};
use async_trait::async_trait;

/// Source of the bearer token attached to authenticated requests.
///
/// Consulted fresh on every outgoing request, never cached, so a rotated
/// token takes effect on the very next call. `None` means the request goes
/// out without an `Authorization` header.
pub trait TokenProvider: Send + Sync {
    fn access_token(&self) -> Option<String>;
}

/// Trait for the catalog fetch surface
///
/// Abstraction over the backend catalog endpoints so callers can swap in a
/// fake for testing. Every method resolves to the uniform envelope; failures
/// are folded in, never raised.
#[async_trait]
pub trait CatalogApi {
    /// List product categories
    async fn categories(&self) -> ResponseEnvelope;

    /// List products, paginated/sorted/filtered per `query`
    async fn products(&self, query: &ProductQuery) -> ResponseEnvelope;

    /// List the category names used to build filter controls
    async fn filters(&self) -> ResponseEnvelope;
}
