//! API Routes
//!
//! Configures the Axum router with all catalog proxy endpoints.

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers::{
    cache_stats_handler, categories_handler, health_handler, list_products_handler,
    product_handler, AppState,
};

/// Builds the CORS layer for the browser frontend.
///
/// Restricts to `origin` when given and valid, otherwise allows any origin.
pub fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let allow_origin = match origin.map(HeaderValue::from_str) {
        Some(Ok(value)) => AllowOrigin::exact(value),
        Some(Err(_)) => {
            warn!(origin = origin.unwrap_or_default(), "invalid CORS origin, allowing any");
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Creates the main router with all endpoints and a permissive CORS policy.
pub fn create_router(state: AppState) -> Router {
    create_router_with_cors(state, cors_layer(None))
}

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/products` - Product listing
/// - `GET /api/products/:id` - Single product
/// - `GET /api/products/categories/all` - Category list
/// - `GET /api/cache/stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: as configured by `cors`
/// - Tracing: Logs all requests
pub fn create_router_with_cors(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/products", get(list_products_handler))
        .route("/api/products/categories/all", get(categories_handler))
        .route("/api/products/:id", get(product_handler))
        .route("/api/cache/stats", get(cache_stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
