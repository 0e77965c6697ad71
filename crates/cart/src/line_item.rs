//! Cart line item: a product snapshot plus a quantity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfront_catalog::Product;
use shopfront_core::{Money, ProductId};

/// One entry in the cart.
///
/// Name, price, and image are **snapshots taken at add time** - the line
/// never reads back through the catalog, so a later catalog price change
/// does not retroactively reprice what is already in the cart. That is a
/// deliberate, tested policy.
///
/// Serialized with the persisted cart layout's field names (`id`,
/// `imageUrl`, `addedAt`); `price` persists as a decimal number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
    pub image_url: String,
    pub quantity: u32,
    /// When the product first entered the cart; restores first-added display
    /// order after a persistence round-trip.
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    /// Snapshot a catalog product into a new line.
    pub fn snapshot(product: &Product, quantity: u32, added_at: DateTime<Utc>) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            quantity,
            added_at,
        }
    }

    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}
