//! Catalog product records.

use serde::{Deserialize, Serialize};

use storefront_core::ProductId;

/// A catalog entry. Entries are immutable once the catalog is built.
///
/// Field names serialize in the envelope's camelCase wire format
/// (`productId`, `inStock`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    /// Non-negative decimal price.
    pub price: f64,
    pub in_stock: bool,
    /// Ordered feature list, preserved as authored.
    pub features: Vec<String>,
}

impl Product {
    /// Project this entry to the shape used in search results.
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            product_id: self.product_id.clone(),
            name: self.name.clone(),
            price: self.price,
            in_stock: self.in_stock,
        }
    }
}

/// Projection of [`Product`] carried in search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub in_stock: bool,
}
