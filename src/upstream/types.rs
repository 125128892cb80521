//! Upstream wire types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// == Product ==
/// A product record as returned by the upstream API.
///
/// Every field is kept verbatim so responses pass through unmodified;
/// only `id` and `price` are interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product(Map<String, Value>);

impl Product {
    /// Wraps a raw JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Upstream identifier, when present.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// Numeric price, `None` when missing or not a number.
    pub fn price(&self) -> Option<f64> {
        self.0.get("price").and_then(Value::as_f64)
    }

    /// Looks up any other field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl From<Map<String, Value>> for Product {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

// == Product Page ==
/// One page of the upstream product listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Category list, forwarded in whatever shape upstream returns.
pub type Categories = Value;
