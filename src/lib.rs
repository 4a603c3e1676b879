//! Thin client for the storefront catalog API.
//!
//! The library surface is the [`ApiClient`] (base or bearer-authenticated)
//! and the three fetch functions, each of which resolves to the backend's
//! conventional `{success, message, data, meta}` envelope and never returns
//! an error: any failure is folded into the envelope with `success = false`.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

// Re-export for convenience
pub use application::fetch::{
    fetch_categories, fetch_filters, fetch_products, try_fetch_categories, try_fetch_filters,
    try_fetch_products, FALLBACK_FAILURE_MESSAGE,
};
pub use domain::error::ApiClientError;
pub use domain::model::{ProductQuery, ResponseEnvelope, SortOrder};
pub use domain::traits::{CatalogApi, TokenProvider};
pub use infrastructure::credentials::{StaticTokenProvider, StoredTokenProvider};
pub use infrastructure::network::client::ApiClient;
