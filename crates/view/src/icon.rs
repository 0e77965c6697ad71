//! Cart icon badge.

use shopfront_cart::CartStore;
use shopfront_session::SessionStorage;

/// The single-number badge next to the cart icon.
///
/// Purely derived from the store's total unit count - no state of its own
/// beyond the last refreshed number. Refresh after every cart mutation and
/// once on page load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartIcon {
    count: u64,
}

impl CartIcon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh<S: SessionStorage>(&mut self, store: &CartStore<S>) {
        self.count = store.total_item_count();
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}
