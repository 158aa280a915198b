//! Reader-style dependency injection.
//!
//! Store operations are [`Reader`]s over a [`Config`]. A program is composed
//! from them without naming any store, and the store is supplied once, when
//! the composed Reader is run.
//!
//! # Examples
//!
//! ```rust
//! use effect_injection::reader::{get, set, Config};
//! use effect_injection::store::InMemoryDataStore;
//!
//! let program = set("name", "Brandon")
//!     .flat_map(|()| get("name"))
//!     .fmap(|name| name.map(|name| format!("Hello {name}")));
//!
//! let config = Config::new(InMemoryDataStore::new());
//! assert_eq!(program.run(config), Ok("Hello Brandon".to_string()));
//! ```

mod config;
mod dsl;
mod monad;

pub use config::Config;
pub use dsl::{get, greeting_program, set};
pub use monad::Reader;
