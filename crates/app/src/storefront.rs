//! Storefront page controller.

use shopfront_cart::{CartStore, CartUpdate};
use shopfront_catalog::{CategoryFilter, ProductCatalog};
use shopfront_core::{DomainError, DomainResult, ProductId};
use shopfront_session::{gate, GateOutcome, Page, Session, SessionStorage};
use shopfront_view::{render, render_grid, CartIcon, ProductCardView, RenderedCart, TotalsSummary};

/// Acknowledgment returned by the checkout placeholder. No payment happens;
/// the cart is cleared and the visitor gets the final numbers back.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutAck {
    pub totals: TotalsSummary,
}

/// One logged-in visitor's storefront: resolved catalog, session, cart, and
/// the current view descriptions.
///
/// The storage handle is cloned between the session and the cart so both
/// talk to the same region, the way two scripts share one `sessionStorage`.
#[derive(Debug)]
pub struct Storefront<S: SessionStorage + Clone> {
    catalog: ProductCatalog,
    session: Session<S>,
    cart: CartStore<S>,
    rendered_cart: RenderedCart,
    icon: CartIcon,
}

impl<S: SessionStorage + Clone> Storefront<S> {
    /// Open the storefront for the session living in `storage`.
    ///
    /// The cart is never constructed for an anonymous visitor: an
    /// unauthenticated session fails with `InvalidOperation` before any
    /// cart state exists.
    pub fn open(catalog: ProductCatalog, storage: S) -> DomainResult<Self> {
        let session = Session::new(storage.clone());
        if gate(&session, Page::Cart) != GateOutcome::Proceed {
            return Err(DomainError::invalid_operation(
                "the cart requires a logged-in session",
            ));
        }

        let cart = CartStore::open(storage);
        let mut storefront = Self {
            catalog,
            session,
            cart,
            rendered_cart: RenderedCart::Empty,
            icon: CartIcon::new(),
        };
        storefront.sync_views();
        Ok(storefront)
    }

    /// Gate a navigation attempt for this visitor.
    pub fn route(&self, page: Page) -> GateOutcome {
        gate(&self.session, page)
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// The product grid under the given category filter.
    pub fn product_grid(&self, filter: &CategoryFilter) -> Vec<ProductCardView> {
        render_grid(&self.catalog, filter)
    }

    /// Add a catalog product to the cart.
    ///
    /// The product must exist in the resolved catalog (`NotFound`
    /// otherwise); stock and quantity rules are enforced by the store.
    pub fn add_to_cart(&mut self, product_id: &ProductId, quantity: u32) -> DomainResult<CartUpdate> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(DomainError::not_found)?;
        let update = self.cart.add_item(product, quantity)?;
        self.sync_views();
        Ok(update)
    }

    /// Apply a quantity editor's text input to a cart line.
    ///
    /// UI input arrives as text; anything that is not a positive integer is
    /// rejected here with `InvalidArgument`, before it reaches the store.
    pub fn change_quantity(&mut self, product_id: &ProductId, input: &str) -> DomainResult<CartUpdate> {
        let quantity: u32 = input.trim().parse().map_err(|_| {
            DomainError::invalid_argument(format!(
                "quantity input '{input}' is not a positive integer"
            ))
        })?;
        let update = self.cart.set_quantity(product_id, quantity)?;
        self.sync_views();
        Ok(update)
    }

    /// Remove a cart line (idempotent, like the store operation it wraps).
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> CartUpdate {
        let update = self.cart.remove_item(product_id);
        self.sync_views();
        update
    }

    /// Checkout placeholder: acknowledge with the final rounded totals and
    /// clear the cart. An empty cart has nothing to check out.
    pub fn checkout(&mut self) -> DomainResult<CheckoutAck> {
        if self.cart.is_empty() {
            return Err(DomainError::invalid_operation(
                "cannot check out an empty cart",
            ));
        }

        let totals = self.cart.compute_totals();
        let ack = CheckoutAck {
            totals: TotalsSummary {
                subtotal: totals.subtotal.rounded(),
                tax: totals.tax.rounded(),
                total: totals.total.rounded(),
            },
        };
        self.cart.clear();
        self.sync_views();
        tracing::info!(total = %ack.totals.total, "checkout acknowledged");
        Ok(ack)
    }

    /// End the session: clear the cart, wipe the region, leave the views
    /// showing an empty cart.
    pub fn logout(&mut self) {
        self.cart.clear();
        self.session.log_out();
        self.sync_views();
    }

    /// The current cart page description.
    pub fn rendered_cart(&self) -> &RenderedCart {
        &self.rendered_cart
    }

    /// The current icon badge.
    pub fn icon(&self) -> CartIcon {
        self.icon
    }

    /// Re-project state into the page: new cart description, fresh badge.
    /// Runs after every mutation; the previous description is discarded
    /// wholesale.
    fn sync_views(&mut self) {
        self.rendered_cart = render(&self.cart);
        self.icon.refresh(&self.cart);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use shopfront_session::MemorySessionStorage;

    const CATALOG_JSON: &str = r#"[
        {
            "id": "p1",
            "name": "Wireless Mouse",
            "description": "A two-button wireless mouse.",
            "price": 9.99,
            "category": "electronics",
            "inStock": true,
            "imageUrl": "images/mouse.jpg"
        },
        {
            "id": "p2",
            "name": "Mechanical Keyboard",
            "description": "Tenkeyless, brown switches.",
            "price": 49.50,
            "category": "electronics",
            "inStock": false,
            "imageUrl": "images/keyboard.jpg"
        }
    ]"#;

    type Region = Rc<RefCell<MemorySessionStorage>>;

    fn logged_in_region() -> Region {
        let region: Region = Rc::new(RefCell::new(MemorySessionStorage::new()));
        Session::new(Rc::clone(&region)).log_in().unwrap();
        region
    }

    fn catalog() -> ProductCatalog {
        ProductCatalog::from_json(CATALOG_JSON).unwrap()
    }

    fn id(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    #[test]
    fn anonymous_visitors_cannot_open_the_storefront() {
        let region: Region = Rc::new(RefCell::new(MemorySessionStorage::new()));
        let err = Storefront::open(catalog(), region).unwrap_err();
        match err {
            DomainError::InvalidOperation(_) => {}
            _ => panic!("Expected InvalidOperation for anonymous visitor"),
        }
    }

    #[test]
    fn mutations_keep_the_views_in_sync() {
        let mut shop = Storefront::open(catalog(), logged_in_region()).unwrap();
        assert!(shop.rendered_cart().is_empty());
        assert_eq!(shop.icon().count(), 0);

        shop.add_to_cart(&id("p1"), 2).unwrap();
        assert_eq!(shop.icon().count(), 2);
        match shop.rendered_cart() {
            RenderedCart::Lines { items, summary } => {
                assert_eq!(items.len(), 1);
                assert_eq!(summary.total.to_string(), "$20.98");
            }
            RenderedCart::Empty => panic!("Expected rows after an add"),
        }

        shop.remove_from_cart(&id("p1"));
        assert!(shop.rendered_cart().is_empty());
        assert_eq!(shop.icon().count(), 0);
    }

    #[test]
    fn adding_an_uncatalogued_product_is_a_caller_error() {
        let mut shop = Storefront::open(catalog(), logged_in_region()).unwrap();
        let err = shop.add_to_cart(&id("ghost"), 1).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn quantity_text_input_is_rejected_before_the_store() {
        let mut shop = Storefront::open(catalog(), logged_in_region()).unwrap();
        shop.add_to_cart(&id("p1"), 2).unwrap();

        for bad in ["abc", "-3", "1.5", ""] {
            let err = shop.change_quantity(&id("p1"), bad).unwrap_err();
            match err {
                DomainError::InvalidArgument(_) => {}
                _ => panic!("Expected InvalidArgument for input {bad:?}"),
            }
        }
        // "0" parses but the store applies the uniform zero policy.
        let err = shop.change_quantity(&id("p1"), "0").unwrap_err();
        match err {
            DomainError::InvalidArgument(_) => {}
            _ => panic!("Expected InvalidArgument for zero quantity"),
        }
        assert_eq!(shop.icon().count(), 2);
    }

    #[test]
    fn checkout_acknowledges_and_clears() {
        let mut shop = Storefront::open(catalog(), logged_in_region()).unwrap();
        shop.add_to_cart(&id("p1"), 2).unwrap();

        let ack = shop.checkout().unwrap();
        assert_eq!(ack.totals.total.to_string(), "$20.98");
        assert!(shop.rendered_cart().is_empty());

        let err = shop.checkout().unwrap_err();
        match err {
            DomainError::InvalidOperation(_) => {}
            _ => panic!("Expected InvalidOperation for empty-cart checkout"),
        }
    }

    #[test]
    fn logout_clears_the_cart_and_closes_the_gate() {
        let region = logged_in_region();
        let mut shop = Storefront::open(catalog(), Rc::clone(&region)).unwrap();
        shop.add_to_cart(&id("p1"), 2).unwrap();

        shop.logout();
        assert!(shop.rendered_cart().is_empty());
        assert_eq!(shop.route(Page::Products), GateOutcome::RedirectToLogin);
        assert!(region.borrow().is_empty());
    }
}
