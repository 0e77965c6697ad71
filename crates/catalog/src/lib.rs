//! Product catalog module.
//!
//! This crate contains the read-only product list the storefront sells from:
//! decoding the catalog document, lookups by id, and category filtering. The
//! catalog is loaded once per page load and never mutated afterwards.

pub mod catalog;
pub mod product;

pub use catalog::{CategoryFilter, ProductCatalog};
pub use product::Product;
