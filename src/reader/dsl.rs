//! Store operations as Readers over [`Config`].

use super::config::Config;
use super::monad::Reader;
use crate::error::StoreError;
use crate::greeting::{NAME_KEY, NAME_VALUE, format_greeting};

/// A Reader that reads `key` from the configured store.
///
/// # Examples
///
/// ```rust
/// use effect_injection::reader::{get, Config};
/// use effect_injection::store::InMemoryDataStore;
///
/// let config = Config::new(InMemoryDataStore::new());
/// assert!(get("missing").run(config).is_err());
/// ```
pub fn get(key: impl Into<String>) -> Reader<Config, Result<String, StoreError>> {
    let key = key.into();
    Reader::asks(move |config: Config| config.data_store().get(&key))
}

/// A Reader that writes `value` under `key` in the configured store.
pub fn set(key: impl Into<String>, value: impl Into<String>) -> Reader<Config, ()> {
    let key = key.into();
    let value = value.into();
    Reader::asks(move |config: Config| config.data_store().set(&key, &value))
}

/// Stores the name, reads it back and formats the greeting.
///
/// The store is not chosen here; it arrives through the [`Config`] the
/// returned Reader is run with.
///
/// # Examples
///
/// ```rust
/// use effect_injection::reader::{greeting_program, Config};
/// use effect_injection::store::InMemoryDataStore;
///
/// let config = Config::new(InMemoryDataStore::new());
/// assert_eq!(greeting_program().run(config), Ok("Hello Brandon".to_string()));
/// ```
pub fn greeting_program() -> Reader<Config, Result<String, StoreError>> {
    set(NAME_KEY, NAME_VALUE)
        .flat_map(|()| get(NAME_KEY))
        .fmap(|name| name.map(format_greeting))
}
