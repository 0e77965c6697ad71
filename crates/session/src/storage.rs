//! Session-scoped storage region (trait + in-memory implementation).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Storage failure. Writes can fail (quota, region unavailable); reads
/// degrade to "absent" instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage quota exceeded")]
    QuotaExceeded,

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A string-keyed, string-valued storage region scoped to one browsing
/// session.
///
/// Consumers serialize their own payloads; the region knows nothing about
/// carts or login flags. Implementations are expected to be synchronous -
/// every operation completes before the caller continues (single-threaded,
/// event-driven environment).
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str);

    /// Drop every entry in the region (logout / session end).
    fn clear(&mut self);
}

/// In-memory region backing a single session.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStorage {
    entries: HashMap<String, String>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Shared handle over one region.
///
/// The cart store and the session gate both write to the same region, the
/// way two scripts on a page share one `sessionStorage`. The environment is
/// single-threaded, so `Rc<RefCell<_>>` is the right sharing primitive.
impl<S: SessionStorage> SessionStorage for Rc<RefCell<S>> {
    fn get(&self, key: &str) -> Option<String> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.borrow_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) {
        self.borrow_mut().remove(key);
    }

    fn clear(&mut self) {
        self.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let mut storage = MemorySessionStorage::new();
        assert_eq!(storage.get("cart"), None);

        storage.set("cart", "{}").unwrap();
        assert_eq!(storage.get("cart").as_deref(), Some("{}"));

        storage.remove("cart");
        assert_eq!(storage.get("cart"), None);
    }

    #[test]
    fn clear_drops_every_entry() {
        let mut storage = MemorySessionStorage::new();
        storage.set("cart", "{}").unwrap();
        storage.set("isLoggedIn", "true").unwrap();

        storage.clear();
        assert!(storage.is_empty());
        assert_eq!(storage.get("isLoggedIn"), None);
    }

    #[test]
    fn shared_handles_see_each_other_writes() {
        let region = Rc::new(RefCell::new(MemorySessionStorage::new()));
        let mut writer = Rc::clone(&region);
        let reader = Rc::clone(&region);

        writer.set("isLoggedIn", "true").unwrap();
        assert_eq!(reader.get("isLoggedIn").as_deref(), Some("true"));
    }
}
