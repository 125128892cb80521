//! Cache Key Module
//!
//! Deterministic keys for the two kinds of cached data.

use std::fmt;

// == Cache Key ==
/// Identifies one cached value.
///
/// Product sets are keyed by the already-normalized category, so every
/// spelling of "no filter" shares the whole-catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Complete, unsorted product set of a category (`None` = whole catalog)
    ProductSet { category: Option<String> },
    /// The category list singleton
    Categories,
}

impl CacheKey {
    /// Key for the full product set of `category`.
    pub fn product_set(category: Option<&str>) -> Self {
        CacheKey::ProductSet {
            category: category.map(str::to_string),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::ProductSet { category } => {
                write!(f, "products:{}|ALL", category.as_deref().unwrap_or("all"))
            }
            CacheKey::Categories => f.write_str("categories"),
        }
    }
}
