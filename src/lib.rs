//! Catalog Proxy - A caching product-catalog proxy
//!
//! Forwards catalog queries to a remote product API, adding price sorting
//! over whole categories and short-lived caching of full result sets.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod upstream;

#[cfg(test)]
mod test_support;

pub use api::AppState;
pub use catalog::{QueryParams, QueryResolver, SortOrder};
pub use config::Config;
pub use error::{ApiError, UpstreamError};
