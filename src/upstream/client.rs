//! Upstream Client
//!
//! Thin HTTP wrapper over the remote product API. No retries: the first
//! failure is returned to the caller.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, UpstreamError};
use crate::upstream::types::{Categories, Product, ProductPage};

// == Product Source ==
/// Anything that can serve catalog data the way the upstream API does.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetches one natively paginated page, optionally scoped to a category.
    async fn fetch_page(&self, category: Option<&str>, limit: u64, skip: u64)
        -> Result<ProductPage>;

    /// Fetches a single product by identifier.
    async fn fetch_one(&self, id: &str) -> Result<Product>;

    /// Fetches the category list.
    async fn fetch_categories(&self) -> Result<Categories>;
}

// == HTTP Product Source ==
/// `ProductSource` backed by the real upstream REST API.
///
/// Routes used, relative to the base URL:
/// - `GET /?limit=&skip=`
/// - `GET /category/{name}?limit=&skip=`
/// - `GET /{id}`
/// - `GET /categories`
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: Client,
    base_url: Url,
}

impl HttpProductSource {
    /// Creates a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| UpstreamError::InvalidUrl {
            message: format!("{}: {}", base_url, e),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl {
                message: format!("{} cannot be used as a base url", base_url),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::from_reqwest(base_url, e))?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Creates a client from the proxy configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.upstream_base_url, config.upstream_timeout)
    }

    /// Base URL with extra percent-encoded path segments appended.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| UpstreamError::InvalidUrl {
                    message: format!("{} cannot be used as a base url", self.base_url),
                })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(url = %url, "upstream request");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| UpstreamError::from_reqwest(url.as_str(), e))?;

        response
            .json::<T>()
            .await
            .map_err(|e| match UpstreamError::from_reqwest(url.as_str(), e) {
                UpstreamError::Transport { url, message } => UpstreamError::Decode { url, message },
                other => other,
            })
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_page(
        &self,
        category: Option<&str>,
        limit: u64,
        skip: u64,
    ) -> Result<ProductPage> {
        let mut url = match category {
            Some(name) => self.endpoint(&["category", name])?,
            None => self.endpoint(&[])?,
        };
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("skip", &skip.to_string());

        self.get_json(url).await
    }

    async fn fetch_one(&self, id: &str) -> Result<Product> {
        let url = self.endpoint(&[id])?;
        self.get_json(url).await
    }

    async fn fetch_categories(&self) -> Result<Categories> {
        let url = self.endpoint(&["categories"])?;
        self.get_json(url).await
    }
}
