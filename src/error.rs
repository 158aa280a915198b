//! Error types for data store access.
//!
//! A missing key is the only failure the store capability defines. It is a
//! violation of the caller's contract (reading a key that was never written),
//! so it is surfaced immediately and ends the current computation.

use thiserror::Error;

/// Represents an error raised while reading from a data store.
///
/// # Examples
///
/// ```rust
/// use effect_injection::StoreError;
///
/// let error = StoreError::key_not_found("missing");
/// assert_eq!(error.to_string(), "key not found: missing");
/// assert_eq!(error.key(), "missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The requested key has no value in the store.
    #[error("key not found: {key}")]
    KeyNotFound {
        /// The key that was looked up.
        key: String,
    },
}

impl StoreError {
    /// Creates a `KeyNotFound` error for the given key.
    #[must_use]
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Returns the key this error refers to.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::KeyNotFound { key } => key,
        }
    }
}
