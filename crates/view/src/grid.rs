//! Product grid projection with category filtering.

use serde::Serialize;

use shopfront_catalog::{CategoryFilter, Product, ProductCatalog};
use shopfront_core::{Money, ProductId};

/// Whether a card's add-to-cart control is live.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    InStock,
    OutOfStock,
}

impl Availability {
    pub fn allows_add(self) -> bool {
        matches!(self, Availability::InStock)
    }

    /// Status line shown on the card.
    pub fn status_text(self) -> &'static str {
        match self {
            Availability::InStock => "In Stock",
            Availability::OutOfStock => "Out of Stock",
        }
    }
}

/// One card in the product grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCardView {
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub image_url: String,
    pub availability: Availability,
}

impl ProductCardView {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.rounded(),
            image_url: product.image_url.clone(),
            availability: if product.in_stock {
                Availability::InStock
            } else {
                Availability::OutOfStock
            },
        }
    }
}

/// Project the catalog through a category filter into grid cards, in
/// document order.
pub fn render_grid(catalog: &ProductCatalog, filter: &CategoryFilter) -> Vec<ProductCardView> {
    catalog
        .filter(filter)
        .into_iter()
        .map(ProductCardView::from_product)
        .collect()
}
