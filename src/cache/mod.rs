//! Cache Module
//!
//! Time-bounded in-memory cache for full product sets and the category list.

mod entry;
mod key;
mod stats;
mod store;

// Re-export public types
pub use entry::CacheEntry;
pub use key::CacheKey;
pub use stats::CacheStats;
pub use store::{CacheStore, CachedValue, SharedCache};
