//! Shopping cart module.
//!
//! `CartStore` is the sole owner of cart state: a keyed collection of line
//! items, the three mutations (add, set quantity, remove), derived totals,
//! and persistence to the session region. All operations are synchronous and
//! leave the mapping invariants intact on every exit path.

pub mod line_item;
pub mod store;

pub use line_item::CartLineItem;
pub use store::{CartStore, CartTotals, CartUpdate, CART_STORAGE_KEY, TAX_RATE};
