//! Catalog Module
//!
//! Query normalization, in-memory price sorting and the resolver that ties
//! the upstream client and the cache together.

mod query;
mod resolver;
mod sort;


pub use query::{normalize_category, QueryParams, SortOrder, DEFAULT_LIMIT, DEFAULT_SKIP};
pub use resolver::QueryResolver;
pub use sort::{compare_price, page_window, sorted_page};
