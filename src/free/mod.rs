//! Free-style effects: programs as data.
//!
//! A store-dependent computation is reified into a [`Program`] value built
//! from [`Command`]s. The program knows nothing about where values live; an
//! interpreter supplies that later by walking the program against an
//! [`Environment`].
//!
//! ```text
//! Program<A> = Halt(A)
//!            | Step(Command<Program<A>>)
//!
//! Command<R> = Get { key, next: String -> R }
//!            | Set { key, value, next: () -> R }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effect_injection::free::{get, run_in_memory, set, Program};
//!
//! let program: Program<String> = set("a", "1")
//!     .then(set("a", "2"))
//!     .then(get("a"));
//!
//! let (value, _) = run_in_memory(program).unwrap();
//! assert_eq!(value, "2");
//! ```

mod command;
mod dsl;
mod interpreter;
mod program;
mod programs;

pub use command::{Command, GetContinuation, SetContinuation};
pub use dsl::{get, set};
pub use interpreter::{
    Environment, StoreEnvironment, interpret, interpret_with_store, run_in_memory,
};
pub use program::Program;
pub use programs::greeting_program;
