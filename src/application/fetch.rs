//! Catalog fetch functions.
//!
//! Each function issues one GET against the backend and resolves to the
//! uniform `{success, message, data, meta}` envelope. Failures of any kind
//! (connect error, timeout, non-2xx status, body that is not the envelope)
//! are folded into the envelope with `success = false` rather than returned
//! as `Err`; callers that need to distinguish failure kinds can use the
//! `try_*` variants.

use crate::domain::error::ApiClientError;
use crate::domain::model::{ProductQuery, ResponseEnvelope};
use crate::domain::traits::CatalogApi;
use crate::infrastructure::network::client::ApiClient;
use async_trait::async_trait;
use reqwest::RequestBuilder;
use tracing::warn;

const CATEGORIES_PATH: &str = "/categories";
const PRODUCTS_PATH: &str = "/products";
const FILTERS_PATH: &str = "/categories/get-names";

/// Message used when a request fails without any response detail at all.
/// Kept verbatim from the storefront backend's conventions.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Ocurrió un error al actualizar el evento";

/// Fetch the category list.
pub async fn fetch_categories(client: &ApiClient) -> ResponseEnvelope {
    resolve(try_fetch_categories(client).await)
}

/// Fetch a page of products. Parameters are passed through verbatim as
/// query-string entries; unset ones are omitted, not defaulted.
pub async fn fetch_products(client: &ApiClient, query: &ProductQuery) -> ResponseEnvelope {
    resolve(try_fetch_products(client, query).await)
}

/// Fetch the category names used to build filter controls.
pub async fn fetch_filters(client: &ApiClient) -> ResponseEnvelope {
    resolve(try_fetch_filters(client).await)
}

/// Fallible variant of [`fetch_categories`], exposing the error kind.
pub async fn try_fetch_categories(client: &ApiClient) -> Result<ResponseEnvelope, ApiClientError> {
    send(client.get(CATEGORIES_PATH)).await
}

/// Fallible variant of [`fetch_products`], exposing the error kind.
pub async fn try_fetch_products(
    client: &ApiClient,
    query: &ProductQuery,
) -> Result<ResponseEnvelope, ApiClientError> {
    send(client.get(PRODUCTS_PATH).query(query)).await
}

/// Fallible variant of [`fetch_filters`], exposing the error kind.
pub async fn try_fetch_filters(client: &ApiClient) -> Result<ResponseEnvelope, ApiClientError> {
    send(client.get(FILTERS_PATH)).await
}

#[async_trait]
impl CatalogApi for ApiClient {
    async fn categories(&self) -> ResponseEnvelope {
        fetch_categories(self).await
    }

    async fn products(&self, query: &ProductQuery) -> ResponseEnvelope {
        fetch_products(self, query).await
    }

    async fn filters(&self) -> ResponseEnvelope {
        fetch_filters(self).await
    }
}

/// One request, one envelope. The body is read as text first so a non-2xx
/// body stays available for message extraction.
async fn send(request: RequestBuilder) -> Result<ResponseEnvelope, ApiClientError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ApiClientError::Status {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiClientError::MalformedResponse(e.to_string()))
}

fn resolve(result: Result<ResponseEnvelope, ApiClientError>) -> ResponseEnvelope {
    match result {
        Ok(envelope) => envelope,
        Err(err) => {
            warn!("catalog request failed: {}", err);
            ResponseEnvelope::failure(failure_message(&err))
        }
    }
}

/// Message derivation, in priority order: the server-supplied `message`
/// from the error response body, then the stringified error, then the fixed
/// fallback for transport failures that carry no response at all.
fn failure_message(err: &ApiClientError) -> String {
    match err {
        ApiClientError::Status { body, .. } => {
            extract_server_message(body).unwrap_or_else(|| err.to_string())
        }
        ApiClientError::Http(_) => FALLBACK_FAILURE_MESSAGE.to_string(),
        other => other.to_string(),
    }
}

fn extract_server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .map(std::borrow::ToOwned::to_owned)
}
