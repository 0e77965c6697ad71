//! Authoritative cart state and its persistence.

use std::collections::BTreeMap;

use chrono::Utc;

use shopfront_catalog::Product;
use shopfront_core::{DomainError, DomainResult, Money, ProductId};
use shopfront_session::SessionStorage;

use crate::line_item::CartLineItem;

/// Region key holding the persisted cart.
pub const CART_STORAGE_KEY: &str = "cart";

/// Fixed sales tax rate applied to the subtotal.
pub const TAX_RATE: f64 = 0.05;

/// Result of a cart mutation: the counts the calling page needs plus an
/// optional persistence warning.
///
/// A set `persist_warning` means the in-memory mutation succeeded but the
/// session region rejected the write - the cart works for the rest of the
/// page visit and may not survive a reload. It is never fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct CartUpdate {
    pub distinct_items: usize,
    pub total_units: u64,
    pub persist_warning: Option<DomainError>,
}

/// Derived totals over the current cart state.
///
/// All three values are unrounded; presentation rounds to two decimals.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CartTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

/// Sole owner of the cart mapping.
///
/// Holds line items keyed by product id (keys unique, first-added order
/// preserved for display) and a handle to the session region it persists
/// into. Invariants on every exit path:
///
/// - each stored key equals the `product_id` of its line;
/// - every line has `quantity >= 1` (entries are removed, never zeroed).
///
/// All operations run to completion before the next begins; there is no
/// locking because the environment is single-threaded. Two tabs sharing one
/// region can still race each other (last writer wins) - a documented
/// limitation, out of scope here.
#[derive(Debug)]
pub struct CartStore<S: SessionStorage> {
    items: Vec<CartLineItem>,
    storage: S,
}

impl<S: SessionStorage> CartStore<S> {
    /// Open the cart backed by the given region: restore the persisted
    /// mapping if one exists, otherwise start empty.
    ///
    /// Restore never fails the page. An undecodable document starts the cart
    /// empty; an entry that violates the mapping invariants is dropped. Both
    /// are logged.
    pub fn open(storage: S) -> Self {
        let items = match storage.get(CART_STORAGE_KEY) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<BTreeMap<String, CartLineItem>>(&raw) {
                Ok(map) => Self::restore_lines(map),
                Err(err) => {
                    tracing::warn!(%err, "persisted cart is undecodable; starting empty");
                    Vec::new()
                }
            },
        };
        Self { items, storage }
    }

    fn restore_lines(map: BTreeMap<String, CartLineItem>) -> Vec<CartLineItem> {
        let mut lines: Vec<CartLineItem> = Vec::with_capacity(map.len());
        for (key, line) in map {
            if key != line.product_id.as_str() {
                tracing::warn!(%key, "dropping persisted entry whose key does not match its line");
                continue;
            }
            if line.quantity == 0 {
                tracing::warn!(%key, "dropping persisted entry with zero quantity");
                continue;
            }
            if line.price.validate().is_err() {
                tracing::warn!(%key, "dropping persisted entry with an invalid price");
                continue;
            }
            lines.push(line);
        }
        // First-added display order survives the round-trip via the add
        // timestamps; ties keep a stable id order.
        lines.sort_by(|a, b| {
            a.added_at
                .cmp(&b.added_at)
                .then_with(|| a.product_id.cmp(&b.product_id))
        });
        lines
    }

    /// Add a product to the cart (merge-on-add).
    ///
    /// A quantity of zero fails with `InvalidArgument` and an out-of-stock
    /// product fails with `InvalidOperation`, both before any state change.
    /// If the product is already in the cart its quantity is incremented;
    /// there is never a second line for the same product.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> DomainResult<CartUpdate> {
        if quantity == 0 {
            return Err(DomainError::invalid_argument("quantity must be at least 1"));
        }
        if !product.in_stock {
            return Err(DomainError::invalid_operation(format!(
                "product '{}' is out of stock",
                product.id
            )));
        }

        match self.items.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity);
            }
            None => {
                self.items
                    .push(CartLineItem::snapshot(product, quantity, Utc::now()));
            }
        }
        tracing::debug!(product_id = %product.id, quantity, "added to cart");
        Ok(self.persisted_update())
    }

    /// Replace a line's quantity exactly (not additive).
    ///
    /// Zero fails with `InvalidArgument` - removal is only ever explicit via
    /// [`CartStore::remove_item`]. An unknown id fails with `NotFound`; the
    /// mapping is untouched on every error path.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) -> DomainResult<CartUpdate> {
        if quantity == 0 {
            return Err(DomainError::invalid_argument("quantity must be at least 1"));
        }

        let line = self
            .items
            .iter_mut()
            .find(|l| &l.product_id == product_id)
            .ok_or_else(DomainError::not_found)?;
        line.quantity = quantity;

        tracing::debug!(%product_id, quantity, "quantity changed");
        Ok(self.persisted_update())
    }

    /// Remove a line. Idempotent: an absent id is a successful no-op, so a
    /// double-clicked remove control never surfaces an error.
    pub fn remove_item(&mut self, product_id: &ProductId) -> CartUpdate {
        let before = self.items.len();
        self.items.retain(|l| &l.product_id != product_id);
        if self.items.len() < before {
            tracing::debug!(%product_id, "removed from cart");
        }
        self.persisted_update()
    }

    /// Empty the cart and persist the empty state (logout, checkout-complete).
    pub fn clear(&mut self) -> CartUpdate {
        self.items.clear();
        tracing::debug!("cart cleared");
        self.persisted_update()
    }

    /// Derived totals: `subtotal = Σ line totals`, `tax = subtotal × 5%`,
    /// `total = subtotal + tax`. Pure over current state, unrounded.
    pub fn compute_totals(&self) -> CartTotals {
        let subtotal: Money = self.items.iter().map(CartLineItem::line_total).sum();
        let tax = subtotal * TAX_RATE;
        CartTotals {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    /// Total unit count across all lines (the icon badge number).
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn distinct_item_count(&self) -> usize {
        self.items.len()
    }

    /// Lines in first-added order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|l| &l.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persisted_update(&mut self) -> CartUpdate {
        CartUpdate {
            distinct_items: self.items.len(),
            total_units: self.total_item_count(),
            persist_warning: self.persist(),
        }
    }

    /// Write the mapping to the session region. Failure is reported, never
    /// propagated as a hard error: rolling back the visitor's in-progress
    /// action over a transient storage fault would be the worse trade.
    fn persist(&mut self) -> Option<DomainError> {
        let map: BTreeMap<&str, &CartLineItem> = self
            .items
            .iter()
            .map(|l| (l.product_id.as_str(), l))
            .collect();

        let payload = match serde_json::to_string(&map) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(%err, "cart serialization failed; in-memory cart unaffected");
                return Some(DomainError::persistence(err.to_string()));
            }
        };

        match self.storage.set(CART_STORAGE_KEY, &payload) {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(%err, "cart persist failed; in-memory cart unaffected");
                Some(DomainError::persistence(err.to_string()))
            }
        }
    }
}
