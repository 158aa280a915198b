//! Reified data store programs.

use std::fmt::{self, Debug, Display, Formatter};

use super::command::Command;
use super::interpreter::{self, Environment};
use crate::error::StoreError;

/// A description of a computation that talks to a data store.
///
/// A program is either finished ([`Program::Halt`]) or needs one more store
/// effect ([`Program::Step`]) whose continuation produces the rest of the
/// program. Nothing runs until the program is handed to an interpreter.
///
/// # Type Parameters
///
/// * `A` - The result type of the computation
///
/// # Laws
///
/// Observed through interpretation (same result, same environment writes),
/// `Program` satisfies the Functor and Monad laws:
///
/// - **Functor Identity**: `p.map(|x| x) == p`
/// - **Functor Composition**: `p.map(f).map(g) == p.map(|x| g(f(x)))`
/// - **Left Identity**: `Program::pure(a).flat_map(f) == f(a)`
/// - **Right Identity**: `m.flat_map(Program::pure) == m`
/// - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// # Stack Usage
///
/// `map` and `flat_map` on a `Step` do not walk the program: they wrap the
/// pending continuation and return immediately. The work happens when the
/// interpreter resumes that continuation, at a call depth equal to the number
/// of combinators stacked on the same step. Interpretation itself is a loop,
/// so the number of store effects is not bounded by the call stack.
///
/// Stacking combinators on one pending step is therefore bounded by the
/// thread's stack. A few thousand are fine on a default 2 MiB test thread;
/// around ten thousand `map` calls on the same `Step` overflow it and abort
/// the process. Build long programs right-nested instead: apply further
/// combinators inside the continuation passed to `flat_map`, where the
/// program they see is already the next `Step` or a `Halt`.
///
/// ```rust
/// use effect_injection::free::{get, run_in_memory, set, Program};
///
/// let program = set("k", "v").then(get("k")).flat_map(|value| {
///     // `Halt` here, so each `map` runs immediately.
///     (0..10_000).fold(Program::pure(value.len()), |program, _| program.map(|n| n + 1))
/// });
/// assert_eq!(run_in_memory(program).map(|(value, _)| value), Ok(10_001));
/// ```
///
/// # Examples
///
/// ```rust
/// use effect_injection::free::{get, set, Program};
/// use std::collections::HashMap;
///
/// let program: Program<String> = set("name", "Brandon")
///     .flat_map(|()| get("name"))
///     .map(|name| format!("Hello {name}"));
///
/// let mut environment: HashMap<String, String> = HashMap::new();
/// assert_eq!(program.interpret(&mut environment), Ok("Hello Brandon".to_string()));
/// assert_eq!(environment["name"], "Brandon");
/// ```
pub enum Program<A> {
    /// The computation has finished with a result.
    Halt(A),

    /// One more command to perform; its continuation yields the rest.
    Step(Command<Program<A>>),
}

impl<A> Program<A> {
    /// Lifts a plain value into a finished program.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_injection::free::Program;
    ///
    /// let program = Program::pure(42);
    /// assert!(program.is_halt());
    /// ```
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::Halt(value)
    }

    /// Returns `true` if the program has finished.
    #[must_use]
    pub const fn is_halt(&self) -> bool {
        matches!(self, Self::Halt(_))
    }

    /// Returns `true` if the program still has a command to perform.
    #[must_use]
    pub const fn is_step(&self) -> bool {
        matches!(self, Self::Step(_))
    }

    /// Runs the program against `environment`.
    ///
    /// See [`interpret`](super::interpret).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyNotFound`] when a `Get` reads a key that the
    /// environment does not contain.
    pub fn interpret<E>(self, environment: &mut E) -> Result<A, StoreError>
    where
        E: Environment + ?Sized,
    {
        interpreter::interpret(self, environment)
    }
}

impl<A: 'static> Program<A> {
    /// Applies a function to the eventual result (Functor `fmap`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_injection::free::{run_in_memory, Program};
    ///
    /// let program = Program::pure(21).map(|x| x * 2);
    /// assert_eq!(run_in_memory(program).map(|(value, _)| value), Ok(42));
    /// ```
    pub fn map<B: 'static, F>(self, function: F) -> Program<B>
    where
        F: FnOnce(A) -> B + 'static,
    {
        match self {
            Self::Halt(value) => Program::Halt(function(value)),
            Self::Step(command) => {
                Program::Step(command.map_result(move |rest| rest.map(function)))
            }
        }
    }

    /// Chains a program that depends on the result (Monad `bind`/`>>=`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_injection::free::{get, set};
    /// use std::collections::HashMap;
    ///
    /// let mut environment: HashMap<String, String> = HashMap::new();
    /// let program = set("a", "1").flat_map(|()| get("a"));
    /// assert_eq!(program.interpret(&mut environment), Ok("1".to_string()));
    /// ```
    pub fn flat_map<B: 'static, F>(self, function: F) -> Program<B>
    where
        F: FnOnce(A) -> Program<B> + 'static,
    {
        match self {
            Self::Halt(value) => function(value),
            Self::Step(command) => {
                Program::Step(command.map_result(move |rest| rest.flat_map(function)))
            }
        }
    }

    /// Alias for `flat_map`.
    #[inline]
    pub fn and_then<B: 'static, F>(self, function: F) -> Program<B>
    where
        F: FnOnce(A) -> Program<B> + 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two programs, discarding the result of the first (Haskell's `>>`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_injection::free::{get, set};
    /// use std::collections::HashMap;
    ///
    /// let mut environment: HashMap<String, String> = HashMap::new();
    /// let program = set("a", "1").then(set("a", "2")).then(get("a"));
    /// assert_eq!(program.interpret(&mut environment), Ok("2".to_string()));
    /// ```
    #[inline]
    pub fn then<B: 'static>(self, next: Program<B>) -> Program<B> {
        self.flat_map(move |_| next)
    }
}

impl<A: Debug> Debug for Program<A> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Halt(value) => formatter.debug_tuple("Halt").field(value).finish(),
            Self::Step(command) => formatter.debug_tuple("Step").field(command).finish(),
        }
    }
}

impl<A: Display> Display for Program<A> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Halt(value) => write!(formatter, "Halt({value})"),
            Self::Step(command) => write!(formatter, "Step({command})"),
        }
    }
}

static_assertions::assert_not_impl_any!(Program<String>: Send, Sync);
