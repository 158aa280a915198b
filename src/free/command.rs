//! Primitive data store commands.
//!
//! A [`Command`] is one indivisible store effect paired with its
//! continuation: what to build once the effect has been performed.

use std::fmt::{self, Debug, Display, Formatter};

/// Continuation of a `Get`: receives the value read from the store.
pub type GetContinuation<R> = Box<dyn FnOnce(String) -> R>;

/// Continuation of a `Set`: receives nothing, the write carries no payload.
pub type SetContinuation<R> = Box<dyn FnOnce() -> R>;

/// A single data store command.
///
/// `R` is the type of whatever comes next. Inside a
/// [`Program`](super::Program) it is the rest of the program.
///
/// # Examples
///
/// ```rust
/// use effect_injection::free::Command;
///
/// let command: Command<usize> = Command::get("name", |value| value.len());
/// let command = command.map_result(|length| length * 2);
///
/// match command {
///     Command::Get { key, next } => {
///         assert_eq!(key, "name");
///         assert_eq!(next("Brandon".to_string()), 14);
///     }
///     Command::Set { .. } => unreachable!(),
/// }
/// ```
pub enum Command<R> {
    /// Read the value stored under `key`, then continue with it.
    Get {
        /// The key to read.
        key: String,
        /// Builds the next stage from the value read.
        next: GetContinuation<R>,
    },
    /// Write `value` under `key`, then continue.
    Set {
        /// The key to write.
        key: String,
        /// The value to write.
        value: String,
        /// Builds the next stage once the write is done.
        next: SetContinuation<R>,
    },
}

impl<R> Command<R> {
    /// Creates a `Get` command.
    pub fn get<F>(key: impl Into<String>, next: F) -> Self
    where
        F: FnOnce(String) -> R + 'static,
    {
        Self::Get {
            key: key.into(),
            next: Box::new(next),
        }
    }

    /// Creates a `Set` command.
    pub fn set<F>(key: impl Into<String>, value: impl Into<String>, next: F) -> Self
    where
        F: FnOnce() -> R + 'static,
    {
        Self::Set {
            key: key.into(),
            value: value.into(),
            next: Box::new(next),
        }
    }

    /// Returns the key this command reads or writes.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Get { key, .. } | Self::Set { key, .. } => key,
        }
    }

    /// Returns `true` for a `Get` command.
    #[must_use]
    pub const fn is_get(&self) -> bool {
        matches!(self, Self::Get { .. })
    }

    /// Returns `true` for a `Set` command.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set { .. })
    }
}

impl<R: 'static> Command<R> {
    /// Transforms what the continuation produces.
    ///
    /// The key, the value and the kind of command are kept as they are;
    /// `function` runs after the original continuation. Mapping with the
    /// identity function yields an equivalent command.
    pub fn map_result<S, F>(self, function: F) -> Command<S>
    where
        F: FnOnce(R) -> S + 'static,
    {
        match self {
            Self::Get { key, next } => Command::Get {
                key,
                next: Box::new(move |value| function(next(value))),
            },
            Self::Set { key, value, next } => Command::Set {
                key,
                value,
                next: Box::new(move || function(next())),
            },
        }
    }
}

impl<R> Debug for Command<R> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get { key, .. } => formatter
                .debug_struct("Get")
                .field("key", key)
                .field("next", &"<continuation>")
                .finish(),
            Self::Set { key, value, .. } => formatter
                .debug_struct("Set")
                .field("key", key)
                .field("value", value)
                .field("next", &"<continuation>")
                .finish(),
        }
    }
}

impl<R> Display for Command<R> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get { key, .. } => write!(formatter, "Get({key})"),
            Self::Set { key, value, .. } => write!(formatter, "Set({key}, {value})"),
        }
    }
}
