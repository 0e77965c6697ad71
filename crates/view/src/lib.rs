//! Read-only projections of storefront state.
//!
//! Everything in this crate is a declarative description the presentation
//! layer can render with whatever technology it likes - the projections
//! never touch a widget tree, and each render replaces the previous
//! description wholesale (acceptable for carts of this size; row controls
//! are re-bound from the `product_id` keys after every replacement).

pub mod cart_view;
pub mod grid;
pub mod icon;

pub use cart_view::{render, LineItemView, RenderedCart, TotalsSummary};
pub use grid::{render_grid, Availability, ProductCardView};
pub use icon::CartIcon;
