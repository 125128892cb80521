//! Configuration Module
//!
//! Handles loading and managing proxy configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default upstream catalog endpoint.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://dummyjson.com/products";

/// Default cache time-to-live in seconds (5 minutes).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Page size used when bulk-fetching a whole category.
pub const DEFAULT_BULK_PAGE_SIZE: u64 = 100;

/// Proxy configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream product API
    pub upstream_base_url: String,
    /// How long cached product sets and categories stay valid
    pub cache_ttl: Duration,
    /// Timeout applied to every upstream request
    pub upstream_timeout: Duration,
    /// Page size for bulk category fetches
    pub bulk_page_size: u64,
    /// Allowed CORS origin, any origin when unset
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `UPSTREAM_BASE_URL` - Upstream product API (default: https://dummyjson.com/products)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `UPSTREAM_TIMEOUT` - Upstream request timeout in seconds (default: 10)
    /// - `BULK_PAGE_SIZE` - Page size for bulk fetches (default: 100)
    /// - `CORS_ALLOWED_ORIGIN` - Allowed browser origin (default: any)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.upstream_base_url),
            cache_ttl: parse_var("CACHE_TTL")
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
            upstream_timeout: parse_var("UPSTREAM_TIMEOUT")
                .map(Duration::from_secs)
                .unwrap_or(defaults.upstream_timeout),
            bulk_page_size: parse_var("BULK_PAGE_SIZE")
                .filter(|size: &u64| *size > 0)
                .unwrap_or(defaults.bulk_page_size),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            upstream_timeout: Duration::from_secs(10),
            bulk_page_size: DEFAULT_BULK_PAGE_SIZE,
            cors_allowed_origin: None,
        }
    }
}
