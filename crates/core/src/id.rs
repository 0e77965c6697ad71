//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
///
/// Catalog documents key products by opaque strings (`"p1"`, `"sku-widget"`),
/// so the identifier preserves the exact string and must round-trip through
/// serialization unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an identifier. Blank input fails with `InvalidArgument`.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_argument("product id cannot be blank"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_the_exact_string() {
        let id = ProductId::new("p1").unwrap();
        assert_eq!(id.as_str(), "p1");
        assert_eq!(id.to_string(), "p1");
    }

    #[test]
    fn blank_id_is_rejected() {
        let err = ProductId::new("   ").unwrap_err();
        match err {
            DomainError::InvalidArgument(_) => {}
            _ => panic!("Expected InvalidArgument for blank id"),
        }
    }

    #[test]
    fn round_trips_through_json() {
        let id = ProductId::new("p1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"p1\"");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
