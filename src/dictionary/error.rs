//! Error types for dictionary construction.
//!
//! Lookups, updates and removals never fail: absence is reported as `None`.
//! The only fallible operation is the strict initializer
//! [`OrderedMap::try_from_pairs`](super::OrderedMap::try_from_pairs), which
//! refuses to silently drop a repeated key.

use std::fmt;

/// Represents a key that appeared more than once in an initializer.
///
/// # Examples
///
/// ```rust
/// use dictionaries::dictionary::{DuplicateKeyError, OrderedMap};
///
/// let result = OrderedMap::try_from_pairs([("TYO", "Tokyo"), ("TYO", "Haneda")]);
///
/// assert_eq!(result.unwrap_err(), DuplicateKeyError::new("TYO", 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyError<K> {
    key: K,
    position: usize,
}

impl<K> DuplicateKeyError<K> {
    /// Creates an error for `key` repeated at the zero-based pair `position`.
    #[must_use]
    pub const fn new(key: K, position: usize) -> Self {
        Self { key, position }
    }

    /// Returns the repeated key.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the zero-based position of the pair that repeated the key.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Consumes the error and returns the repeated key.
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K: fmt::Debug> fmt::Display for DuplicateKeyError<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "duplicate key {:?} at position {}",
            self.key, self.position
        )
    }
}

impl<K: fmt::Debug> std::error::Error for DuplicateKeyError<K> {}
