//! Mutable dictionaries with explicit optional semantics.
//!
//! This module provides:
//!
//! - [`OrderedMap`]: insertion-ordered hash map with `Option`-returning
//!   lookup, update and removal
//! - [`SharedOrderedMap`]: an `OrderedMap` behind a read-write lock, for
//!   sharing between threads (requires the `sync` feature)
//! - [`DuplicateKeyError`]: returned by the strict initializer
//!   [`OrderedMap::try_from_pairs`]
//!
//! # Examples
//!
//! ## Insert versus update
//!
//! ```rust
//! use dictionaries::dictionary::OrderedMap;
//!
//! let mut airports = OrderedMap::new();
//! airports.set("LHR", "London");
//! airports.set("LHR", "London Heathrow");
//!
//! // The second `set` replaced the value instead of adding an entry
//! assert_eq!(airports.len(), 1);
//! assert_eq!(airports.get("LHR"), Some(&"London Heathrow"));
//! ```
//!
//! ## Absent versus empty
//!
//! ```rust
//! use dictionaries::dictionary::OrderedMap;
//!
//! let mut scores: OrderedMap<&str, i32> = OrderedMap::new();
//! scores.set("zero", 0);
//!
//! assert_eq!(scores.get("zero"), Some(&0)); // present, value is zero
//! assert_eq!(scores.get("none"), None);     // absent
//! ```
//!
//! ## Removal by absent assignment
//!
//! ```rust
//! use dictionaries::dictionary::OrderedMap;
//!
//! let mut airports = OrderedMap::from([("TYO", "Tokyo"), ("DUB", "Dublin")]);
//! airports.set_or_remove("DUB", None);
//!
//! assert!(!airports.contains_key("DUB"));
//! assert_eq!(airports.len(), 1);
//! ```

// =============================================================================
// Default Hasher Selection
// =============================================================================

/// Hash builder used when an `OrderedMap` does not name one.
///
/// Selected by cargo features:
///
/// - `fxhash`: `rustc_hash::FxBuildHasher`
/// - `ahash` (without `fxhash`): `ahash::RandomState`
/// - neither: `std::hash::RandomState`
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used when an `OrderedMap` does not name one.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used when an `OrderedMap` does not name one.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::hash::RandomState;

mod error;
mod index;
mod iter;
mod ordered_map;
#[cfg(feature = "sync")]
mod shared;

pub use error::DuplicateKeyError;
pub use iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
pub use ordered_map::OrderedMap;
#[cfg(feature = "sync")]
pub use shared::SharedOrderedMap;
