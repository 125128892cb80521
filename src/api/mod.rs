//! API Module
//!
//! HTTP handlers and routing for the catalog proxy REST API.
//!
//! # Endpoints
//! - `GET /api/products` - Paginated, optionally sorted and filtered listing
//! - `GET /api/products/:id` - Single product
//! - `GET /api/products/categories/all` - Category list
//! - `GET /api/cache/stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{cors_layer, create_router, create_router_with_cors};
