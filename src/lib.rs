//! # dictionaries
//!
//! An insertion-ordered dictionary for Rust with explicit `Option`-based
//! lookup, update and removal semantics.
//!
//! ## Overview
//!
//! The central type is [`OrderedMap`](dictionary::OrderedMap), a generic
//! key-value store that:
//!
//! - distinguishes "key absent" from "key present with an empty value" by
//!   returning `Option` instead of sentinels
//! - replaces the value of an existing key instead of storing a duplicate
//! - removes a key when it is assigned an absent value
//!   ([`set_or_remove`](dictionary::OrderedMap::set_or_remove))
//! - iterates in insertion order
//!
//! ## Feature Flags
//!
//! - `sync` (default): [`SharedOrderedMap`](dictionary::SharedOrderedMap), a
//!   lock-guarded handle for sharing one map across threads
//! - `serde`: `Serialize` / `Deserialize` for `OrderedMap`
//! - `fxhash`: use `rustc-hash`'s `FxBuildHasher` as the default hasher
//! - `ahash`: use `ahash`'s `RandomState` as the default hasher
//! - `full`: `sync` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use dictionaries::prelude::*;
//!
//! let mut airports = OrderedMap::from([("TYO", "Tokyo"), ("DUB", "Dublin")]);
//!
//! airports.set("LHR", "London");
//! assert_eq!(airports.len(), 3);
//!
//! assert_eq!(airports.update_value("TYO", "Tokyo International"), Some("Tokyo"));
//!
//! airports.set_or_remove("DUB", None);
//! assert_eq!(airports.get("DUB"), None);
//! assert_eq!(airports.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use dictionaries::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dictionary::*;
}

pub mod dictionary;
