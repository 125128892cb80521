//! Bulk Fetcher
//!
//! Walks the upstream's native pagination to collect an entire category
//! (or the whole catalog) in upstream order.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::upstream::client::ProductSource;
use crate::upstream::types::Product;

/// Fetches every product for `category` using pages of `page_size`.
///
/// Stops once the accumulated count reaches the `total` reported by the
/// latest page, or as soon as a page comes back empty. Any failing page
/// aborts the whole fetch and nothing partial is returned.
pub async fn fetch_all(
    source: &dyn ProductSource,
    category: Option<&str>,
    page_size: u64,
) -> Result<Vec<Product>> {
    let page_size = page_size.max(1);
    let mut products: Vec<Product> = Vec::new();
    let mut skip = 0u64;
    let mut pages = 0usize;

    loop {
        let page = source.fetch_page(category, page_size, skip).await?;
        pages += 1;

        let received = page.products.len();
        let total = page.total;
        products.extend(page.products);

        debug!(
            category = category.unwrap_or("all"),
            skip, received, total, "fetched upstream page"
        );

        if products.len() as u64 >= total {
            break;
        }
        if received == 0 {
            warn!(
                category = category.unwrap_or("all"),
                skip,
                total,
                collected = products.len(),
                "upstream returned an empty page before reaching total, stopping"
            );
            break;
        }
        skip += page_size;
    }

    info!(
        category = category.unwrap_or("all"),
        pages,
        count = products.len(),
        "bulk fetch complete"
    );

    Ok(products)
}
