//! API Handlers
//!
//! HTTP request handlers for each catalog proxy endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;

use crate::cache::{CacheStore, SharedCache};
use crate::catalog::{QueryParams, QueryResolver};
use crate::config::Config;
use crate::error::{ApiError, Result as UpstreamResult};
use crate::models::{HealthResponse, ProductListRequest, ProductListing, StatsResponse};
use crate::upstream::{HttpProductSource, Product, ProductSource};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Request orchestration over the upstream client and the cache
    pub resolver: QueryResolver,
}

impl AppState {
    /// Creates a new AppState around an upstream source and a cache store.
    pub fn new(source: Arc<dyn ProductSource>, cache: SharedCache, bulk_page_size: u64) -> Self {
        Self {
            resolver: QueryResolver::new(source, cache, bulk_page_size),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the HTTP upstream client and an empty cache with the configured TTL.
    pub fn from_config(config: &Config) -> UpstreamResult<Self> {
        let source = HttpProductSource::from_config(config)?;
        Ok(Self::new(
            Arc::new(source),
            CacheStore::shared(config.cache_ttl),
            config.bulk_page_size,
        ))
    }

    pub fn cache(&self) -> &SharedCache {
        self.resolver.cache()
    }
}

/// Handler for GET /api/products
///
/// An unparseable query string is treated like an empty one.
pub async fn list_products_handler(
    State(state): State<AppState>,
    query: Option<Query<ProductListRequest>>,
) -> Result<Json<ProductListing>, ApiError> {
    let req = query.map(|Query(req)| req).unwrap_or_default();
    let params = QueryParams::from_request(&req);

    let listing = state
        .resolver
        .list_products(&params)
        .await
        .map_err(ApiError::Products)?;

    Ok(Json(listing))
}

/// Handler for GET /api/products/:id
pub async fn product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .resolver
        .product(&id)
        .await
        .map_err(ApiError::Product)?;

    Ok(Json(product))
}

/// Handler for GET /api/products/categories/all
pub async fn categories_handler(
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let categories = state
        .resolver
        .categories()
        .await
        .map_err(ApiError::Categories)?;

    Ok(Json(categories.as_ref().clone()))
}

/// Handler for GET /api/cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache().read().await.stats();
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
