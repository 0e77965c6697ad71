//! Immutable product catalog with category filtering.

use shopfront_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;

/// Category selection for the product grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Show every product.
    All,
    /// Show only products tagged with this category.
    Category(String),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => product.category == *name,
        }
    }
}

/// The resolved product list, loaded once per page load.
///
/// Read-only after construction; the cart and the grid only ever borrow from
/// it. Document order is preserved for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Build a catalog from already-decoded products.
    ///
    /// Every product is validated and ids must be unique; a bad entry fails
    /// the whole load with `InvalidArgument` (a half-loaded catalog would
    /// let the grid sell products the cart cannot resolve).
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        for product in &products {
            product.validate()?;
        }
        for (index, product) in products.iter().enumerate() {
            if products[..index].iter().any(|p| p.id == product.id) {
                return Err(DomainError::invalid_argument(format!(
                    "duplicate product id '{}' in catalog",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// Decode a catalog document (a JSON array of products).
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)
            .map_err(|e| DomainError::invalid_argument(format!("catalog document: {e}")))?;
        Self::new(products)
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products matching the filter, in document order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Distinct categories in first-seen order (drives the filter control).
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(product.category.as_str());
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
