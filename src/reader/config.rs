//! The environment Reader programs run against.

use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use crate::store::DataStore;

/// Everything a Reader program needs from the outside world.
///
/// Cloning a `Config` shares the same store: Reader composition clones the
/// environment for every step, and every step must see the same data.
///
/// # Examples
///
/// ```rust
/// use effect_injection::reader::Config;
/// use effect_injection::store::{DataStore, InMemoryDataStore};
///
/// let config = Config::new(InMemoryDataStore::new());
/// config.clone().data_store().set("name", "Brandon");
/// assert_eq!(config.data_store().get("name"), Ok("Brandon".to_string()));
/// ```
#[derive(Clone)]
pub struct Config {
    data_store: Rc<dyn DataStore>,
}

impl Config {
    /// Creates a configuration owning `data_store`.
    #[must_use]
    pub fn new<S: DataStore + 'static>(data_store: S) -> Self {
        Self::from_shared(Rc::new(data_store))
    }

    /// Creates a configuration from an already shared store.
    #[must_use]
    pub fn from_shared(data_store: Rc<dyn DataStore>) -> Self {
        Self { data_store }
    }

    /// Returns the configured store.
    #[must_use]
    pub fn data_store(&self) -> &dyn DataStore {
        self.data_store.as_ref()
    }
}

impl Debug for Config {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Config")
            .field("data_store", &"<data store>")
            .finish()
    }
}
