//! Catalog product record.

use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, DomainResult, Money, ProductId};

/// One product as described by the catalog document.
///
/// Field names follow the catalog's JSON layout (`inStock`, `imageUrl`).
/// Products are plain data to the rest of the system: the cart snapshots
/// what it needs at add time and never reads back through the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: String,
    pub in_stock: bool,
    pub image_url: String,
}

impl Product {
    /// Validate a decoded product.
    ///
    /// Deserialization of `ProductId`/`Money` is transparent, so the catalog
    /// boundary re-checks what a hand-written document could get wrong.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(DomainError::invalid_argument("product id cannot be blank"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_argument(format!(
                "product '{}' has a blank name",
                self.id
            )));
        }
        self.price.validate().map_err(|_| {
            DomainError::invalid_argument(format!(
                "product '{}' has an invalid price",
                self.id
            ))
        })
    }
}
