//! In-memory `ProductSource` for unit tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::error::{Result, UpstreamError};
use crate::upstream::{Categories, Product, ProductPage, ProductSource};

pub fn product(id: u64, price: f64) -> Product {
    serde_json::from_value(json!({
        "id": id,
        "title": format!("Product {}", id),
        "price": price,
    }))
    .unwrap()
}

/// Serves a fixed catalog with upstream pagination semantics and counts calls.
#[derive(Default)]
pub struct MockCatalog {
    all: Vec<Product>,
    categories: BTreeMap<String, Vec<Product>>,
    reported_total: Option<u64>,
    page_cap: AtomicUsize,
    failing: AtomicBool,
    fail_after: AtomicUsize,
    page_calls: AtomicUsize,
    one_calls: AtomicUsize,
    category_calls: AtomicUsize,
    requests: Mutex<Vec<(Option<String>, u64, u64)>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            page_cap: AtomicUsize::new(usize::MAX),
            fail_after: AtomicUsize::new(usize::MAX),
            ..Self::default()
        }
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            all: products,
            ..Self::new()
        }
    }

    pub fn category(mut self, name: &str, products: Vec<Product>) -> Self {
        self.all.extend(products.iter().cloned());
        self.categories.insert(name.to_string(), products);
        self
    }

    /// Reports this total regardless of the products actually held.
    pub fn with_reported_total(mut self, total: u64) -> Self {
        self.reported_total = Some(total);
        self
    }

    /// Serves at most `cap` products per page.
    pub fn set_page_cap(&self, cap: usize) {
        self.page_cap.store(cap, Ordering::SeqCst);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Lets `n` page requests succeed, then fails the rest.
    pub fn fail_after(&self, n: usize) {
        self.fail_after.store(n, Ordering::SeqCst);
    }

    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }

    pub fn one_calls(&self) -> usize {
        self.one_calls.load(Ordering::SeqCst)
    }

    pub fn category_calls(&self) -> usize {
        self.category_calls.load(Ordering::SeqCst)
    }

    pub fn requested_pages(&self) -> Vec<(Option<String>, u64, u64)> {
        self.requests.lock().unwrap().clone()
    }

    fn check_failing(&self, url: &str) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ProductSource for MockCatalog {
    async fn fetch_page(
        &self,
        category: Option<&str>,
        limit: u64,
        skip: u64,
    ) -> Result<ProductPage> {
        let call = self.page_calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((category.map(str::to_string), limit, skip));

        self.check_failing("mock://products")?;
        if call >= self.fail_after.load(Ordering::SeqCst) {
            return Err(UpstreamError::Transport {
                url: "mock://products".to_string(),
                message: "connection reset".to_string(),
            });
        }

        let source: &[Product] = match category {
            Some(name) => self.categories.get(name).map(Vec::as_slice).unwrap_or(&[]),
            None => &self.all,
        };
        let start = (skip as usize).min(source.len());
        let take = (limit as usize).min(self.page_cap.load(Ordering::SeqCst));
        let end = start.saturating_add(take).min(source.len());

        Ok(ProductPage {
            products: source[start..end].to_vec(),
            total: self.reported_total.unwrap_or(source.len() as u64),
            skip,
            limit,
        })
    }

    async fn fetch_one(&self, id: &str) -> Result<Product> {
        self.one_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failing("mock://products/id")?;

        self.all
            .iter()
            .find(|p| p.id().map(|v| v.to_string()).as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| UpstreamError::Status {
                url: format!("mock://products/{}", id),
                status: 404,
            })
    }

    async fn fetch_categories(&self) -> Result<Categories> {
        self.category_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failing("mock://products/categories")?;

        Ok(json!(self.categories.keys().collect::<Vec<_>>()))
    }
}
