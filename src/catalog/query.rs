//! Query parameter normalization.
//!
//! Raw query strings never fail to parse: anything unusable falls back to
//! its default.

use crate::models::ProductListRequest;

/// Page size when `limit` is absent or invalid.
pub const DEFAULT_LIMIT: u64 = 12;

/// Offset when `skip` is absent or invalid.
pub const DEFAULT_SKIP: u64 = 0;

/// Category values meaning "no filter", compared case-insensitively.
const ALL_CATEGORY_SENTINELS: [&str; 2] = ["all", "all categories"];

// == Sort Order ==
/// Requested ordering of the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Upstream order, served with native pagination
    #[default]
    None,
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
}

impl SortOrder {
    /// Parses the `sort` query value; unknown values mean no sorting.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("price-low") => SortOrder::PriceLow,
            Some("price-high") => SortOrder::PriceHigh,
            _ => SortOrder::None,
        }
    }

    pub fn is_sorting(self) -> bool {
        !matches!(self, SortOrder::None)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::PriceLow => "price-low",
            SortOrder::PriceHigh => "price-high",
        }
    }
}

// == Query Params ==
/// Normalized product listing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub limit: u64,
    pub skip: u64,
    pub sort: SortOrder,
    /// Effective category filter, `None` for the whole catalog
    pub category: Option<String>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            skip: DEFAULT_SKIP,
            sort: SortOrder::None,
            category: None,
        }
    }
}

impl QueryParams {
    /// Normalizes raw query values.
    pub fn parse(
        limit: Option<&str>,
        skip: Option<&str>,
        sort: Option<&str>,
        category: Option<&str>,
    ) -> Self {
        Self {
            limit: parse_count(limit).unwrap_or(DEFAULT_LIMIT),
            skip: parse_count(skip).unwrap_or(DEFAULT_SKIP),
            sort: SortOrder::parse(sort),
            category: normalize_category(category),
        }
    }

    pub fn from_request(req: &ProductListRequest) -> Self {
        Self::parse(
            req.limit.as_deref(),
            req.skip.as_deref(),
            req.sort.as_deref(),
            req.category.as_deref(),
        )
    }
}

impl From<&ProductListRequest> for QueryParams {
    fn from(req: &ProductListRequest) -> Self {
        Self::from_request(req)
    }
}

fn parse_count(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse().ok())
}

/// Maps absent, blank and "all" sentinel categories to `None`.
pub fn normalize_category(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim();
    if value.is_empty()
        || ALL_CATEGORY_SENTINELS
            .iter()
            .any(|sentinel| value.eq_ignore_ascii_case(sentinel))
    {
        None
    } else {
        Some(value.to_string())
    }
}
