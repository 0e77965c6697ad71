//! Scripted storefront session (demo binary).
//!
//! Walks one visitor through the whole flow: gate redirect, login, browsing
//! the grid, cart mutations, checkout, logout.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};

use shopfront_app::{Carousel, ContentToggle, Storefront};
use shopfront_catalog::{CategoryFilter, ProductCatalog};
use shopfront_core::ProductId;
use shopfront_session::{gate, GateOutcome, MemorySessionStorage, Page, Session};
use shopfront_view::RenderedCart;

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
    },
    {
        "id": "p3",
        "name": "Ceramic Mug",
        "description": "Holds 350ml of coffee.",
        "price": 7.25,
        "category": "kitchen",
        "inStock": true,
        "imageUrl": "images/mug.jpg"
    }
]"#;

fn main() -> Result<()> {
    shopfront_observability::init();

    let catalog = ProductCatalog::from_json(CATALOG_JSON).context("load product catalog")?;
    let region = Rc::new(RefCell::new(MemorySessionStorage::new()));

    // Anonymous visit bounces off the gate.
    let mut session = Session::new(Rc::clone(&region));
    if gate(&session, Page::Products) == GateOutcome::RedirectToLogin {
        println!("-> redirected to the login page");
    }
    session.log_in().context("start session")?;

    let mut shop = Storefront::open(catalog, Rc::clone(&region)).context("open storefront")?;

    // Home page widgets.
    let mut carousel = Carousel::new(3);
    carousel.next();
    carousel.prev();
    println!(
        "carousel shows slide {} of {}",
        carousel.visible().unwrap_or(0) + 1,
        carousel.len()
    );
    let mut toggle = ContentToggle::new();
    toggle.toggle();
    println!("toggle button now reads '{}'", toggle.button_label());

    // Product grid, filtered.
    println!("\n== products ==");
    for card in shop.product_grid(&CategoryFilter::All) {
        println!(
            "{:<20} {:>8}  [{}]",
            card.name,
            card.price.to_string(),
            card.availability.status_text()
        );
    }
    let kitchen = shop.product_grid(&CategoryFilter::Category("kitchen".to_string()));
    println!("kitchen category has {} product(s)", kitchen.len());

    // Cart mutations.
    let mouse: ProductId = "p1".parse()?;
    let mug: ProductId = "p3".parse()?;

    let update = shop.add_to_cart(&mouse, 2)?;
    if let Some(warning) = update.persist_warning {
        tracing::warn!(%warning, "cart may not survive a reload");
    }
    shop.add_to_cart(&mug, 1)?;
    shop.change_quantity(&mug, "4")?;
    shop.remove_from_cart(&"nonexistent".parse()?);

    println!("\n== cart ({} items) ==", shop.icon().count());
    print_cart(shop.rendered_cart());

    // Checkout placeholder clears the cart.
    let ack = shop.checkout()?;
    println!("\norder acknowledged, charged {}", ack.totals.total);
    print_cart(shop.rendered_cart());

    shop.logout();
    println!("-> logged out, session region cleared");

    Ok(())
}

fn print_cart(rendered: &RenderedCart) {
    match rendered {
        RenderedCart::Empty => println!("Your cart is empty."),
        RenderedCart::Lines { items, summary } => {
            for row in items {
                println!(
                    "{:<20} x{:<3} @ {:>8} = {:>8}",
                    row.name,
                    row.quantity,
                    row.unit_price.to_string(),
                    row.line_total.to_string()
                );
            }
            println!(
                "subtotal {} | tax {} | total {}",
                summary.subtotal, summary.tax, summary.total
            );
        }
    }
}
