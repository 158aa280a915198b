//! # effect-injection
//!
//! Three ways to keep a computation independent of the data store it uses.
//!
//! ## Overview
//!
//! Every module implements the same tiny program: store the name `Brandon`,
//! read it back and format `Hello Brandon`. What differs is how the store
//! reaches the program:
//!
//! - **Cake** ([`cake`]): the program is a default trait method that asks its
//!   receiver for a store.
//! - **Reader** ([`reader`]): the program is a `Reader<Config, _>` and the store
//!   arrives inside the `Config` it is run with.
//! - **Free** ([`free`]): the program is a data structure of store commands,
//!   executed later by an interpreter against any environment.
//!
//! ## Feature Flags
//!
//! - `store`: The `DataStore` capability and an in-memory implementation
//! - `free`: Programs as data, with an interpreter
//! - `reader`: The Reader monad and Reader-based store operations
//! - `cake`: Trait-based store injection
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use effect_injection::prelude::*;
//!
//! let free = run_in_memory(greeting_program()).map(|(greeting, _)| greeting);
//! let reader = reader::greeting_program().run(Config::new(InMemoryDataStore::new()));
//! let cake = BakedCake::new(InMemoryDataStore::new()).greeting();
//!
//! assert_eq!(free, Ok("Hello Brandon".to_string()));
//! assert_eq!(reader, free);
//! assert_eq!(cake, free);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the commonly used types. The Free DSL (`get`, `set`,
/// `greeting_program`) is exported at the top level; the Reader versions are
/// reached through the re-exported [`reader`] module.
///
/// # Usage
///
/// ```rust
/// use effect_injection::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::StoreError;

    #[cfg(feature = "store")]
    pub use crate::store::{DataStore, InMemoryDataStore};

    #[cfg(feature = "free")]
    pub use crate::free::{
        Command, Environment, Program, StoreEnvironment, get, greeting_program, interpret,
        interpret_with_store, run_in_memory, set,
    };

    #[cfg(feature = "reader")]
    pub use crate::reader::{self, Config, Reader};

    #[cfg(feature = "cake")]
    pub use crate::cake::{BakedCake, CakeProgram, HasDataStore};
}

mod error;
pub mod greeting;

pub use error::StoreError;

#[cfg(feature = "store")]
pub mod store;

#[cfg(feature = "free")]
pub mod free;

#[cfg(feature = "reader")]
pub mod reader;

#[cfg(feature = "cake")]
pub mod cake;
