//! The key/value data store capability.
//!
//! [`DataStore`] is the single dependency that every wiring style abstracts
//! over. Cake wirings borrow a store through an accessor, Reader programs find
//! it in their [`Config`](crate::reader::Config), and Free programs are
//! interpreted against it (or against any other
//! [`Environment`](crate::free::Environment)).
//!
//! # Examples
//!
//! ```rust
//! use effect_injection::store::{DataStore, InMemoryDataStore};
//!
//! let store = InMemoryDataStore::new();
//! store.set("name", "Brandon");
//! assert_eq!(store.get("name"), Ok("Brandon".to_string()));
//! assert!(store.get("missing").is_err());
//! ```

mod in_memory;

pub use in_memory::InMemoryDataStore;

use std::rc::Rc;

use crate::error::StoreError;

/// A key/value store exposing `get` and `set`.
///
/// Both operations take `&self`: a store is a shared collaborator, so
/// implementations that hold state use interior mutability.
///
/// # Contract
///
/// - `get` returns the value last written for `key`, or
///   [`StoreError::KeyNotFound`] if the key was never written.
/// - `set` records `value` under `key`, replacing any prior entry. It never
///   fails.
pub trait DataStore {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyNotFound`] if no value was set for `key`.
    fn get(&self, key: &str) -> Result<String, StoreError>;

    /// Writes `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str);
}

impl<T: DataStore + ?Sized> DataStore for &T {
    fn get(&self, key: &str) -> Result<String, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

impl<T: DataStore + ?Sized> DataStore for Rc<T> {
    fn get(&self, key: &str) -> Result<String, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

impl<T: DataStore + ?Sized> DataStore for Box<T> {
    fn get(&self, key: &str) -> Result<String, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}
