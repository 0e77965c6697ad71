//! Page controller for the storefront demo.
//!
//! Wires the resolved catalog, the session gate, the cart store, and the
//! view projections together, and owns the stateless-page widgets (carousel,
//! collapsible text, modal). Every cart mutation runs the same sequence the
//! page depends on: mutate → persist → re-render → refresh the icon.

pub mod carousel;
pub mod storefront;
pub mod widgets;

pub use carousel::Carousel;
pub use storefront::{CheckoutAck, Storefront};
pub use widgets::{ContentToggle, Modal};
