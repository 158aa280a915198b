//! Running programs against a key/value environment.
//!
//! The interpreter walks a [`Program`] one command at a time: `Get` reads
//! from the environment and feeds the value to the continuation, `Set`
//! writes and resumes. It stops at the first `Halt` or the first missing key.
//!
//! Interpretation is a plain loop, so the number of commands a program
//! performs is not limited by the call stack.

use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Debug, Formatter};
use std::hash::BuildHasher;

use super::command::Command;
use super::program::Program;
use crate::error::StoreError;
use crate::store::DataStore;

/// A mutable key/value mapping a program can be interpreted against.
///
/// The environment belongs to the caller. An interpreter only borrows it for
/// the duration of one run.
pub trait Environment {
    /// Returns the value stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn assign(&mut self, key: String, value: String);
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn assign(&mut self, key: String, value: String) {
        self.insert(key, value);
    }
}

impl Environment for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn assign(&mut self, key: String, value: String) {
        self.insert(key, value);
    }
}

/// Adapts any [`DataStore`] into an [`Environment`].
///
/// This lets a Free program run against the same store object a Cake wiring
/// or a Reader `Config` would use.
///
/// # Examples
///
/// ```rust
/// use effect_injection::free::{get, set, StoreEnvironment};
/// use effect_injection::store::{DataStore, InMemoryDataStore};
///
/// let store = InMemoryDataStore::new();
/// let mut environment = StoreEnvironment::new(&store);
/// let result = set("a", "1").then(get("a")).interpret(&mut environment);
///
/// assert_eq!(result, Ok("1".to_string()));
/// assert_eq!(store.get("a"), Ok("1".to_string()));
/// ```
pub struct StoreEnvironment<'store, S: DataStore + ?Sized> {
    store: &'store S,
}

impl<'store, S: DataStore + ?Sized> StoreEnvironment<'store, S> {
    /// Wraps a borrowed store.
    #[must_use]
    pub const fn new(store: &'store S) -> Self {
        Self { store }
    }

    /// Returns the wrapped store.
    #[must_use]
    pub const fn store(&self) -> &'store S {
        self.store
    }
}

impl<S: DataStore + ?Sized> Environment for StoreEnvironment<'_, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.store.get(key).ok()
    }

    fn assign(&mut self, key: String, value: String) {
        self.store.set(&key, &value);
    }
}

impl<S: DataStore + ?Sized> Debug for StoreEnvironment<'_, S> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("StoreEnvironment")
            .field("store", &"<data store>")
            .finish()
    }
}

/// Interprets `program` against `environment` and returns its result.
///
/// Each `Get` looks its key up in the environment and resumes the program with
/// the value found; each `Set` writes into the environment (overwriting) and
/// resumes. The loop ends at the first `Halt`.
///
/// # Errors
///
/// Returns [`StoreError::KeyNotFound`] as soon as a `Get` reads a key the
/// environment does not contain. Writes performed before that point remain in
/// the environment.
///
/// # Examples
///
/// ```rust
/// use effect_injection::free::{get, interpret};
/// use effect_injection::StoreError;
/// use std::collections::HashMap;
///
/// let mut environment: HashMap<String, String> = HashMap::new();
/// let result = interpret(get("missing"), &mut environment);
/// assert_eq!(result, Err(StoreError::key_not_found("missing")));
/// ```
pub fn interpret<A, E>(program: Program<A>, environment: &mut E) -> Result<A, StoreError>
where
    E: Environment + ?Sized,
{
    let span = tracing::debug_span!("interpret");
    let _entered = span.enter();

    let mut current = program;
    let mut steps: usize = 0;

    loop {
        match current {
            Program::Halt(value) => {
                tracing::debug!(steps, "program halted");
                return Ok(value);
            }
            Program::Step(Command::Get { key, next }) => {
                steps += 1;
                tracing::trace!(step = steps, key = %key, "get");
                let Some(value) = environment.lookup(&key) else {
                    tracing::warn!(step = steps, key = %key, "key not found");
                    return Err(StoreError::KeyNotFound { key });
                };
                current = next(value);
            }
            Program::Step(Command::Set { key, value, next }) => {
                steps += 1;
                tracing::trace!(step = steps, key = %key, value = %value, "set");
                environment.assign(key, value);
                current = next();
            }
        }
    }
}

/// Interprets `program` directly against a [`DataStore`].
///
/// # Errors
///
/// Returns [`StoreError::KeyNotFound`] when a `Get` reads a key the store
/// does not contain.
pub fn interpret_with_store<A, S>(program: Program<A>, store: &S) -> Result<A, StoreError>
where
    S: DataStore + ?Sized,
{
    interpret(program, &mut StoreEnvironment::new(store))
}

/// Interprets `program` against a fresh, empty environment.
///
/// Returns the result together with the final contents of the environment.
///
/// # Errors
///
/// Returns [`StoreError::KeyNotFound`] when a `Get` reads a key that was not
/// set earlier in the same program.
///
/// # Examples
///
/// ```rust
/// use effect_injection::free::{run_in_memory, set};
///
/// let ((), environment) = run_in_memory(set("name", "Brandon")).unwrap();
/// assert_eq!(environment["name"], "Brandon");
/// ```
pub fn run_in_memory<A>(
    program: Program<A>,
) -> Result<(A, HashMap<String, String>), StoreError> {
    let mut environment = HashMap::new();
    let result = interpret(program, &mut environment)?;
    Ok((result, environment))
}
