//! The product record served by the remote catalog.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Identifier of a product in the remote catalog.
pub type ProductId = u64;

/// Customer rating attached to a product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, typically between 0 and 5.
    pub rate: f64,
    /// Number of ratings the average is computed from.
    pub count: u32,
}

/// A single catalog entry.
///
/// Products are deserialized verbatim from the catalog service and are never
/// mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Price formatted with two decimals, e.g. `"109.95"`.
    pub fn price_label(&self) -> String {
        format!("{:.2}", self.price)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} ({} reviews)", self.rate, self.count)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn product(id: ProductId, category: &str) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            price: 10.0 * id as f64,
            category: category.to_string(),
            description: String::new(),
            image: format!("https://example.test/img/{id}.jpg"),
            rating: Rating::default(),
        }
    }
}
