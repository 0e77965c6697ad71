//! Cart page projection: line-item rows plus the totals summary.

use serde::Serialize;

use shopfront_cart::CartStore;
use shopfront_core::{Money, ProductId};
use shopfront_session::SessionStorage;

/// One removable, quantity-editable row.
///
/// Money values are presentation-rounded; the raw unrounded values stay
/// inside the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItemView {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
    pub image_url: String,
}

/// The summary block under the rows, rounded to two decimals.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct TotalsSummary {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

/// Full description of the cart page.
///
/// The empty cart is its own case rather than a zero-row list, so the
/// consumer renders an empty-state message and suppresses the summary panel
/// instead of showing `$0.00` totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderedCart {
    Empty,
    Lines {
        items: Vec<LineItemView>,
        summary: TotalsSummary,
    },
}

impl RenderedCart {
    pub fn is_empty(&self) -> bool {
        matches!(self, RenderedCart::Empty)
    }
}

/// Project the current cart state into a renderable description.
///
/// Rows come out in first-added order, matching the store's iteration
/// order.
pub fn render<S: SessionStorage>(store: &CartStore<S>) -> RenderedCart {
    if store.is_empty() {
        return RenderedCart::Empty;
    }

    let items = store
        .items()
        .iter()
        .map(|line| LineItemView {
            product_id: line.product_id.clone(),
            name: line.name.clone(),
            unit_price: line.price.rounded(),
            quantity: line.quantity,
            line_total: line.line_total().rounded(),
            image_url: line.image_url.clone(),
        })
        .collect();

    let totals = store.compute_totals();
    RenderedCart::Lines {
        items,
        summary: TotalsSummary {
            subtotal: totals.subtotal.rounded(),
            tax: totals.tax.rounded(),
            total: totals.total.rounded(),
        },
    }
}
