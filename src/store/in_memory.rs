//! An in-memory data store for tests and single-threaded programs.
//!
//! ```rust
//! use effect_injection::store::{DataStore, InMemoryDataStore};
//!
//! let store: InMemoryDataStore = [("name".to_string(), "Brandon".to_string())]
//!     .into_iter()
//!     .collect();
//! assert_eq!(store.get("name"), Ok("Brandon".to_string()));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};

use super::DataStore;
use crate::error::StoreError;

/// A [`DataStore`] backed by a `HashMap` behind a `RefCell`.
///
/// Intended for tests and examples. It is single-threaded: the type is not
/// `Sync`, so it cannot be shared across threads.
///
/// # Examples
///
/// ```rust
/// use effect_injection::store::{DataStore, InMemoryDataStore};
///
/// let store = InMemoryDataStore::new();
/// store.set("a", "1");
/// store.set("a", "2");
/// assert_eq!(store.get("a"), Ok("2".to_string()));
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Default)]
pub struct InMemoryDataStore {
    entries: RefCell<HashMap<String, String>>,
}

static_assertions::assert_not_impl_any!(InMemoryDataStore: Sync);

impl InMemoryDataStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if nothing has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Returns `true` if a value is stored under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Returns a copy of the current contents.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.borrow().clone()
    }

    /// Consumes the store and returns its contents.
    #[must_use]
    pub fn into_inner(self) -> HashMap<String, String> {
        self.entries.into_inner()
    }
}

impl DataStore for InMemoryDataStore {
    fn get(&self, key: &str) -> Result<String, StoreError> {
        let value = self.entries.borrow().get(key).cloned();
        tracing::trace!(key, found = value.is_some(), "in-memory store get");
        value.ok_or_else(|| StoreError::key_not_found(key))
    }

    fn set(&self, key: &str, value: &str) {
        tracing::trace!(key, value, "in-memory store set");
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl FromIterator<(String, String)> for InMemoryDataStore {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iterable: T) -> Self {
        Self {
            entries: RefCell::new(iterable.into_iter().collect()),
        }
    }
}

impl Debug for InMemoryDataStore {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("InMemoryDataStore")
            .field("entries", &self.entries.borrow())
            .finish()
    }
}
