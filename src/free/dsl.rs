//! Single-step program constructors.
//!
//! [`get`] and [`set`] are the only primitive ways into the effect language.
//! Larger programs are composed from them with `map`, `flat_map` and `then`.

use super::command::Command;
use super::program::Program;

/// A program that reads `key` and finishes with the value read.
///
/// # Examples
///
/// ```rust
/// use effect_injection::free::{get, Command, Program};
///
/// let program = get("name");
/// assert!(matches!(program, Program::Step(Command::Get { ref key, .. }) if key == "name"));
/// ```
pub fn get(key: impl Into<String>) -> Program<String> {
    Program::Step(Command::get(key, Program::Halt))
}

/// A program that writes `value` under `key` and finishes with `()`.
///
/// # Examples
///
/// ```rust
/// use effect_injection::free::{set, run_in_memory};
///
/// let ((), environment) = run_in_memory(set("a", "1")).unwrap();
/// assert_eq!(environment["a"], "1");
/// ```
pub fn set(key: impl Into<String>, value: impl Into<String>) -> Program<()> {
    Program::Step(Command::set(key, value, || Program::Halt(())))
}
