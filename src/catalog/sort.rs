//! Price ordering and in-memory pagination over a full product set.

use std::cmp::Ordering;

use crate::catalog::SortOrder;
use crate::upstream::Product;

/// Compares two products by price for `order`.
///
/// Products without a numeric price go last in both directions.
pub fn compare_price(a: &Product, b: &Product, order: SortOrder) -> Ordering {
    match (a.price(), b.price()) {
        (Some(x), Some(y)) => match order {
            SortOrder::PriceLow => x.total_cmp(&y),
            SortOrder::PriceHigh => y.total_cmp(&x),
            SortOrder::None => Ordering::Equal,
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Returns the `[skip, skip + limit)` window of `products` after a stable
/// price sort. Out-of-range windows come back short or empty.
///
/// The input keeps its order; only the page is cloned.
pub fn sorted_page(products: &[Product], order: SortOrder, skip: u64, limit: u64) -> Vec<Product> {
    let mut ordered: Vec<&Product> = products.iter().collect();
    if order.is_sorting() {
        // slice::sort_by is stable
        ordered.sort_by(|a, b| compare_price(a, b, order));
    }

    page_window(&ordered, skip, limit)
        .iter()
        .map(|product| (*product).clone())
        .collect()
}

/// Clamps `[skip, skip + limit)` to the bounds of `items`.
pub fn page_window<T>(items: &[T], skip: u64, limit: u64) -> &[T] {
    let len = items.len();
    let start = usize::try_from(skip).unwrap_or(usize::MAX).min(len);
    let end = start
        .saturating_add(usize::try_from(limit).unwrap_or(usize::MAX))
        .min(len);
    &items[start..end]
}
