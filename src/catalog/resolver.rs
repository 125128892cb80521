//! Query Resolver
//!
//! Chooses between the sorted path (cached full set, sorted and sliced in
//! memory) and the unsorted path (one natively paginated upstream call).

use std::sync::Arc;

use tracing::debug;

use crate::cache::SharedCache;
use crate::catalog::{sorted_page, QueryParams};
use crate::error::Result;
use crate::models::ProductListing;
use crate::upstream::{fetch_all, Categories, Product, ProductSource};

// == Query Resolver ==
/// Stateless request orchestration; all state lives in the injected cache.
#[derive(Clone)]
pub struct QueryResolver {
    source: Arc<dyn ProductSource>,
    cache: SharedCache,
    bulk_page_size: u64,
}

impl QueryResolver {
    pub fn new(source: Arc<dyn ProductSource>, cache: SharedCache, bulk_page_size: u64) -> Self {
        Self {
            source,
            cache,
            bulk_page_size,
        }
    }

    /// The cache store this resolver reads and writes.
    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    // == List Products ==
    /// Resolves one product listing request.
    pub async fn list_products(&self, params: &QueryParams) -> Result<ProductListing> {
        let category = params.category.as_deref();

        if params.sort.is_sorting() {
            let full_set = self.full_set(category).await?;
            let products = sorted_page(&full_set, params.sort, params.skip, params.limit);

            debug!(
                category = category.unwrap_or("all"),
                sort = params.sort.as_str(),
                total = full_set.len(),
                returned = products.len(),
                "served sorted page"
            );

            return Ok(ProductListing {
                total: full_set.len() as u64,
                limit: params.limit,
                skip: params.skip,
                products,
            });
        }

        let page = self
            .source
            .fetch_page(category, params.limit, params.skip)
            .await?;

        Ok(ProductListing {
            total: page.total,
            limit: params.limit,
            skip: params.skip,
            products: page.products,
        })
    }

    /// Complete product set for `category`, from cache or a bulk fetch.
    ///
    /// The lock is never held across the fetch; concurrent misses may each
    /// fetch and the last write wins.
    async fn full_set(&self, category: Option<&str>) -> Result<Arc<Vec<Product>>> {
        if let Some(products) = self.cache.write().await.get_products(category) {
            return Ok(products);
        }

        let products = Arc::new(fetch_all(self.source.as_ref(), category, self.bulk_page_size).await?);
        self.cache
            .write()
            .await
            .put_products(category, Arc::clone(&products));

        Ok(products)
    }

    // == Single Product ==
    /// Looks up one product, bypassing the cache.
    pub async fn product(&self, id: &str) -> Result<Product> {
        self.source.fetch_one(id).await
    }

    // == Categories ==
    /// Category list, cached as a singleton.
    pub async fn categories(&self) -> Result<Arc<Categories>> {
        if let Some(categories) = self.cache.write().await.get_categories() {
            return Ok(categories);
        }

        let categories = Arc::new(self.source.fetch_categories().await?);
        self.cache
            .write()
            .await
            .put_categories(Arc::clone(&categories));

        Ok(categories)
    }
}
