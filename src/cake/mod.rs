//! Cake-style dependency injection.
//!
//! The computation is a default method on [`CakeProgram`]. It reaches the
//! store only through [`HasDataStore`], so any type that can hand out a store
//! gets the program for free. [`BakedCake`] is the simplest such wiring.
//!
//! # Examples
//!
//! ```rust
//! use effect_injection::cake::{BakedCake, CakeProgram};
//! use effect_injection::store::InMemoryDataStore;
//!
//! let cake = BakedCake::new(InMemoryDataStore::new());
//! assert_eq!(cake.greeting(), Ok("Hello Brandon".to_string()));
//! ```

use crate::error::StoreError;
use crate::greeting::{NAME_KEY, NAME_VALUE, format_greeting};
use crate::store::DataStore;

/// Types that can provide a data store.
pub trait HasDataStore {
    /// Returns the store this component works against.
    fn data_store(&self) -> &dyn DataStore;
}

/// The greeting computation, written against [`HasDataStore`].
///
/// Implemented for every [`HasDataStore`] type.
pub trait CakeProgram: HasDataStore {
    /// Stores the name, reads it back and formats the greeting.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyNotFound`] if the store does not return the
    /// name it was just given.
    fn greeting(&self) -> Result<String, StoreError> {
        let data_store = self.data_store();
        data_store.set(NAME_KEY, NAME_VALUE);
        let name = data_store.get(NAME_KEY)?;
        Ok(format_greeting(name))
    }
}

impl<T: HasDataStore + ?Sized> CakeProgram for T {}

/// A component wired to one concrete store.
#[derive(Debug, Default)]
pub struct BakedCake<S: DataStore> {
    data_store: S,
}

impl<S: DataStore> BakedCake<S> {
    /// Wires the component to `data_store`.
    #[must_use]
    pub const fn new(data_store: S) -> Self {
        Self { data_store }
    }

    /// Unwires the component and returns its store.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.data_store
    }
}

impl<S: DataStore> HasDataStore for BakedCake<S> {
    fn data_store(&self) -> &dyn DataStore {
        &self.data_store
    }
}
