//! Upstream Module
//!
//! Access to the remote product API: the single-request client and the
//! bulk fetcher built on top of it.

pub mod bulk;
pub mod client;
pub mod types;

pub use bulk::fetch_all;
pub use client::{HttpProductSource, ProductSource};
pub use types::{Categories, Product, ProductPage};
