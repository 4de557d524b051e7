//! Thread-safe handle to an [`OrderedMap`].
//!
//! [`SharedOrderedMap`] puts an `OrderedMap` behind an
//! `Arc<parking_lot::RwLock<_>>`. Clones share the same map. Readers return
//! owned data (cloned values, key and value snapshots) so no lock guard
//! escapes a call.
//!
//! # Examples
//!
//! ```rust
//! use dictionaries::dictionary::SharedOrderedMap;
//! use std::thread;
//!
//! let airports: SharedOrderedMap<String, String> = SharedOrderedMap::new();
//!
//! let writer = airports.clone();
//! thread::spawn(move || writer.set("TYO".to_string(), "Tokyo".to_string()))
//!     .join()
//!     .unwrap();
//!
//! assert_eq!(airports.get("TYO"), Some("Tokyo".to_string()));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

use parking_lot::RwLock;

use super::DefaultHashBuilder;
use super::ordered_map::OrderedMap;

/// A cloneable, lock-guarded [`OrderedMap`] for use across threads.
///
/// Each method takes the lock for the duration of one operation.
/// [`read`](Self::read) and [`write`](Self::write) run several operations
/// under a single lock acquisition.
pub struct SharedOrderedMap<K, V, S = DefaultHashBuilder> {
    inner: Arc<RwLock<OrderedMap<K, V, S>>>,
}

static_assertions::assert_impl_all!(SharedOrderedMap<String, String>: Send, Sync, Clone);

impl<K, V> SharedOrderedMap<K, V> {
    /// Creates a handle to a new empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::from_map(OrderedMap::new())
    }
}

impl<K, V, S> SharedOrderedMap<K, V, S> {
    /// Wraps an existing map.
    #[must_use]
    pub fn from_map(map: OrderedMap<K, V, S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs `reader` with shared access to the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::{OrderedMap, SharedOrderedMap};
    ///
    /// let shared = SharedOrderedMap::from_map(OrderedMap::from([("a", 1), ("b", 2)]));
    /// let total: i32 = shared.read(|map| map.values().sum());
    /// assert_eq!(total, 3);
    /// ```
    pub fn read<R, F>(&self, reader: F) -> R
    where
        F: FnOnce(&OrderedMap<K, V, S>) -> R,
    {
        reader(&self.inner.read())
    }

    /// Runs `writer` with exclusive access to the map.
    pub fn write<R, F>(&self, writer: F) -> R
    where
        F: FnOnce(&mut OrderedMap<K, V, S>) -> R,
    {
        writer(&mut self.inner.write())
    }

    /// Returns the keys present at the time of the call.
    #[must_use]
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.inner.read().keys().cloned().collect()
    }

    /// Returns the values present at the time of the call, in key order.
    #[must_use]
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.inner.read().values().cloned().collect()
    }

    /// Returns a copy of the whole map.
    #[must_use]
    pub fn snapshot(&self) -> OrderedMap<K, V, S>
    where
        K: Clone,
        V: Clone,
        S: Clone,
    {
        self.inner.read().clone()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

impl<K, V, S> SharedOrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Returns a clone of the value for `key`, or `None` if it is absent.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.read().get(key).cloned()
    }

    /// Returns `true` if the map contains a value for `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().contains_key(key)
    }

    /// See [`OrderedMap::set`].
    pub fn set(&self, key: K, value: V) {
        self.inner.write().set(key, value);
    }

    /// See [`OrderedMap::update_value`].
    pub fn update_value(&self, key: K, value: V) -> Option<V> {
        self.inner.write().update_value(key, value)
    }

    /// See [`OrderedMap::set_or_remove`].
    pub fn set_or_remove(&self, key: K, value: Option<V>) {
        self.inner.write().set_or_remove(key, value);
    }

    /// See [`OrderedMap::remove`].
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.write().remove(key)
    }

    /// See [`OrderedMap::update_with`].
    pub fn update_with<F>(&self, key: K, updater: F) -> Option<V>
    where
        F: FnOnce(Option<&V>) -> Option<V>,
    {
        self.inner.write().update_with(key, updater)
    }
}

impl<K, V, S> Clone for SharedOrderedMap<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V, S: Default> Default for SharedOrderedMap<K, V, S> {
    fn default() -> Self {
        Self::from_map(OrderedMap::default())
    }
}

impl<K, V, S> From<OrderedMap<K, V, S>> for SharedOrderedMap<K, V, S> {
    fn from(map: OrderedMap<K, V, S>) -> Self {
        Self::from_map(map)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for SharedOrderedMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("SharedOrderedMap")
            .field(&*self.inner.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_clones_share_state() {
        let shared: SharedOrderedMap<&str, i32> = SharedOrderedMap::new();
        let other = shared.clone();

        other.set("a", 1);
        assert_eq!(shared.get("a"), Some(1));
        assert_eq!(shared.len(), 1);
    }

    #[rstest]
    fn test_keys_are_a_snapshot() {
        let shared = SharedOrderedMap::from_map(OrderedMap::from([("a", 1), ("b", 2)]));
        let keys = shared.keys();

        shared.remove("a");
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(shared.keys(), vec!["b"]);
    }

    #[rstest]
    fn test_write_runs_under_one_lock() {
        let shared: SharedOrderedMap<&str, i32> = SharedOrderedMap::new();
        let length = shared.write(|map| {
            map.set("a", 1);
            map.set("b", 2);
            map.len()
        });
        assert_eq!(length, 2);
    }

    #[rstest]
    fn test_panicking_writer_leaves_map_usable() {
        let shared: SharedOrderedMap<i32, i32> =
            SharedOrderedMap::from_map((0..10).map(|key| (key, key)).collect());

        let handle = shared.clone();
        let result = std::thread::spawn(move || {
            handle.write(|map| {
                map.retain(|key, _| {
                    assert!(*key != 5, "stop at five");
                    key % 2 == 0
                });
            });
        })
        .join();
        assert!(result.is_err());

        for key in shared.keys() {
            assert_eq!(shared.get(&key), Some(key));
        }
        shared.set(42, 42);
        assert_eq!(shared.get(&42), Some(42));
    }

    #[rstest]
    fn test_debug() {
        let shared = SharedOrderedMap::from_map(OrderedMap::from([("a", 1)]));
        assert_eq!(format!("{shared:?}"), r#"SharedOrderedMap({"a": 1})"#);
    }
}
