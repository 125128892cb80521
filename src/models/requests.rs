//! Request DTOs for the catalog proxy API
//!
//! Query parameters are captured as raw strings so a malformed number
//! falls back to its default instead of rejecting the request.

use serde::Deserialize;

/// Query string of `GET /api/products`
///
/// # Fields
/// - `limit`: Page size (default 12)
/// - `skip`: Offset into the listing (default 0)
/// - `sort`: `price-low`, `price-high`, or absent
/// - `category`: Category filter; `all` / `All Categories` mean none
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListRequest {
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub skip: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}
