//! Insertion-ordered hash map with explicit optional semantics.
//!
//! This module provides [`OrderedMap`], a mutable dictionary that keeps its
//! entries in a `Vec` in insertion order and finds them through a hash
//! index.
//!
//! # Overview
//!
//! - O(1) average `get`, `set`, `update_value`, `remove`
//! - O(1) `len` and `is_empty`
//! - O(n) iteration, `shift_remove`, `retain`
//!
//! Lookups never fail: a missing key is reported as `None`, which keeps
//! "absent" apart from "present with a zero or empty value".
//!
//! # Examples
//!
//! ```rust
//! use dictionaries::dictionary::OrderedMap;
//!
//! let mut airports = OrderedMap::from([("TYO", "Tokyo"), ("DUB", "Dublin")]);
//!
//! airports.set("LHR", "London");
//! assert_eq!(airports.len(), 3);
//!
//! airports.set("LHR", "London Heathrow");
//! assert_eq!(airports.len(), 3);
//! assert_eq!(airports.get("LHR"), Some(&"London Heathrow"));
//!
//! let previous = airports.update_value("TYO", "Tokyo International");
//! assert_eq!(previous, Some("Tokyo"));
//!
//! airports.set_or_remove("DUB", None);
//! assert_eq!(airports.len(), 2);
//! assert_eq!(airports.get("DUB"), None);
//! ```
//!
//! # Internal Structure
//!
//! - `entries`: `Vec` of buckets (hash, key, value) in insertion order
//! - `index`: full hash to positions in `entries`
//! - `hash_builder`: the `BuildHasher` used for every key

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::mem;
use std::ops::Index;

use super::DefaultHashBuilder;
use super::error::DuplicateKeyError;
use super::index::PositionIndex;
use super::iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};

// =============================================================================
// Bucket Definition
// =============================================================================

/// A stored entry together with the cached hash of its key.
#[derive(Clone)]
pub(super) struct Bucket<K, V> {
    pub(super) hash: u64,
    pub(super) key: K,
    pub(super) value: V,
}

impl<K, V> Bucket<K, V> {
    #[inline]
    pub(super) const fn pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    #[inline]
    pub(super) const fn pair_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    #[inline]
    pub(super) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// Rebuilds the position index when dropped if the entry count changed.
struct ReindexOnDrop<'a, K, V> {
    before: usize,
    entries: &'a mut Vec<Bucket<K, V>>,
    index: &'a mut PositionIndex,
}

impl<K, V> Drop for ReindexOnDrop<'_, K, V> {
    fn drop(&mut self) {
        if self.entries.len() == self.before {
            return;
        }
        self.index.clear();
        for (position, bucket) in self.entries.iter().enumerate() {
            self.index.insert(bucket.hash, position);
        }
    }
}

// =============================================================================
// OrderedMap Definition
// =============================================================================

/// A mutable hash map that remembers insertion order.
///
/// Every key maps to exactly one value. Setting a key that is already
/// present replaces its value and keeps its position.
///
/// # Time Complexity
///
/// | Operation       | Complexity   |
/// |-----------------|--------------|
/// | `new`           | O(1)         |
/// | `get`           | O(1) average |
/// | `set`           | O(1) average |
/// | `update_value`  | O(1) average |
/// | `remove`        | O(1) average |
/// | `shift_remove`  | O(n)         |
/// | `contains_key`  | O(1) average |
/// | `len`           | O(1)         |
/// | `is_empty`      | O(1)         |
///
/// # Ordering
///
/// Iteration follows insertion order. [`remove`](Self::remove) fills the
/// hole with the last entry; [`shift_remove`](Self::shift_remove) keeps the
/// relative order of all remaining entries.
///
/// # Examples
///
/// ```rust
/// use dictionaries::dictionary::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.set("one".to_string(), 1);
/// assert_eq!(map.get("one"), Some(&1));
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V, S = DefaultHashBuilder> {
    entries: Vec<Bucket<K, V>>,
    index: PositionIndex,
    hash_builder: S,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let map: OrderedMap<String, i32> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty map with room for at least `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V> OrderedMap<K, V> {
    /// Builds a map from pairs, rejecting repeated keys.
    ///
    /// The lenient initializers ([`FromIterator`], [`From`]) keep the last
    /// value of a repeated key. This one reports the first repetition
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateKeyError`] carrying the repeated key and the
    /// zero-based position of the pair that repeated it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let map = OrderedMap::try_from_pairs([("TYO", "Tokyo"), ("DUB", "Dublin")]).unwrap();
    /// assert_eq!(map.len(), 2);
    ///
    /// let error = OrderedMap::try_from_pairs([("TYO", 1), ("DUB", 2), ("TYO", 3)]).unwrap_err();
    /// assert_eq!(error.key(), &"TYO");
    /// assert_eq!(error.position(), 2);
    /// ```
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self, DuplicateKeyError<K>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::try_from_pairs_with_hasher(pairs, DefaultHashBuilder::default())
    }
}

impl<K, V, S> OrderedMap<K, V, S> {
    /// Creates an empty map that hashes keys with `hash_builder`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    /// use std::hash::RandomState;
    ///
    /// let mut map = OrderedMap::with_hasher(RandomState::new());
    /// map.set("key", 1);
    /// assert_eq!(map.get("key"), Some(&1));
    /// ```
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            entries: Vec::new(),
            index: PositionIndex::default(),
            hash_builder,
        }
    }

    /// Creates an empty map with the given capacity and hasher.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: PositionIndex::with_capacity(capacity),
            hash_builder,
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2)]);
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries the map can hold without reallocating.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns a reference to the map's hash builder.
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns an iterator over `(&K, &V)` pairs in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let map = OrderedMap::from([("TYO", "Tokyo"), ("DUB", "Dublin")]);
    ///
    /// for (code, name) in map.iter() {
    ///     println!("{code}: {name}");
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.entries)
    }

    /// Returns an iterator over `(&K, &mut V)` pairs in insertion order.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.entries)
    }

    /// Returns an iterator over the keys in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let map = OrderedMap::from([("TYO", "Tokyo"), ("DUB", "Dublin")]);
    /// let codes: Vec<&str> = map.keys().copied().collect();
    /// assert_eq!(codes, vec!["TYO", "DUB"]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(&self.entries)
    }

    /// Returns an iterator over the values, in the same order as [`keys`](Self::keys).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2)]);
    /// let sum: i32 = map.values().sum();
    /// assert_eq!(sum, 3);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(&self.entries)
    }

    /// Returns a mutable iterator over the values.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut::new(&mut self.entries)
    }

    /// Returns the entry at `position` in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let map = OrderedMap::from([("TYO", "Tokyo"), ("DUB", "Dublin")]);
    /// assert_eq!(map.get_index(1), Some((&"DUB", &"Dublin")));
    /// assert_eq!(map.get_index(2), None);
    /// ```
    #[must_use]
    pub fn get_index(&self, position: usize) -> Option<(&K, &V)> {
        self.entries.get(position).map(Bucket::pair)
    }

    /// Removes every entry, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Keeps only the entries for which `keep` returns `true`.
    ///
    /// The relative order of the kept entries is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let mut map: OrderedMap<i32, i32> = (0..6).map(|number| (number, number * 10)).collect();
    /// map.retain(|key, _| key % 2 == 0);
    ///
    /// let keys: Vec<i32> = map.keys().copied().collect();
    /// assert_eq!(keys, vec![0, 2, 4]);
    /// ```
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        // The guard reindexes on unwind too, so a panicking `keep` leaves
        // the surviving entries reachable.
        let mut guard = ReindexOnDrop {
            before: self.entries.len(),
            entries: &mut self.entries,
            index: &mut self.index,
        };
        guard
            .entries
            .retain_mut(|bucket| keep(&bucket.key, &mut bucket.value));
    }

    fn push(&mut self, hash: u64, key: K, value: V) {
        self.index.insert(hash, self.entries.len());
        self.entries.push(Bucket { hash, key, value });
    }

    /// Removes the entry at `position`, moving the last entry into its place.
    fn swap_remove_at(&mut self, position: usize) -> (K, V) {
        self.index.remove(self.entries[position].hash, position);
        let last = self.entries.len() - 1;
        if position != last {
            self.index
                .relocate(self.entries[last].hash, last, position);
        }
        self.entries.swap_remove(position).into_pair()
    }

    /// Removes the entry at `position`, shifting every later entry down by one.
    fn shift_remove_at(&mut self, position: usize) -> (K, V) {
        let removed = self.entries.remove(position);
        self.index.remove(removed.hash, position);
        for (offset, bucket) in self.entries[position..].iter().enumerate() {
            let new_position = position + offset;
            self.index.relocate(bucket.hash, new_position + 1, new_position);
        }
        removed.into_pair()
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Builds a map from pairs with the given hasher, rejecting repeated keys.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateKeyError`] on the first repeated key.
    pub fn try_from_pairs_with_hasher<I>(
        pairs: I,
        hash_builder: S,
    ) -> Result<Self, DuplicateKeyError<K>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs = pairs.into_iter();
        let mut map = Self::with_capacity_and_hasher(pairs.size_hint().0, hash_builder);
        for (position, (key, value)) in pairs.enumerate() {
            let hash = map.hash_of(&key);
            if map.find(hash, &key).is_some() {
                return Err(DuplicateKeyError::new(key, position));
            }
            map.push(hash, key, value);
        }
        Ok(map)
    }

    #[inline]
    fn hash_of<Q>(&self, key: &Q) -> u64
    where
        Q: Hash + ?Sized,
    {
        self.hash_builder.hash_one(key)
    }

    /// Finds the position of `key` among the entries carrying `hash`.
    fn find<Q>(&self, hash: u64, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.index
            .positions(hash)
            .find(|&position| self.entries[position].key.borrow() == key)
    }

    fn position_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.entries.is_empty() {
            return None;
        }
        self.find(self.hash_of(key), key)
    }

    /// Returns a reference to the value for `key`, or `None` if it is absent.
    ///
    /// The key may be any borrowed form of the map's key type.
    ///
    /// # Complexity
    ///
    /// O(1) average
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let map = OrderedMap::from([("TYO".to_string(), "Tokyo")]);
    ///
    /// assert_eq!(map.get("TYO"), Some(&"Tokyo"));
    /// assert_eq!(map.get("SFO"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position_of(key)
            .map(|position| &self.entries[position].value)
    }

    /// Returns the stored key and its value.
    #[must_use]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position_of(key)
            .map(|position| self.entries[position].pair())
    }

    /// Returns a mutable reference to the value for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("count", 10)]);
    /// if let Some(count) = map.get_mut("count") {
    ///     *count += 1;
    /// }
    /// assert_eq!(map.get("count"), Some(&11));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position_of(key)
            .map(|position| &mut self.entries[position].value)
    }

    /// Returns the position of `key` in iteration order.
    #[must_use]
    pub fn get_index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position_of(key)
    }

    /// Returns `true` if the map contains a value for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let map = OrderedMap::from([("key", 42)]);
    ///
    /// assert!(map.contains_key("key"));
    /// assert!(!map.contains_key("other"));
    /// ```
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position_of(key).is_some()
    }

    /// Associates `value` with `key`.
    ///
    /// Inserts a new entry if `key` is absent, otherwise overwrites the
    /// existing value in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("LHR", "London");
    /// map.set("LHR", "London Heathrow");
    ///
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get("LHR"), Some(&"London Heathrow"));
    /// ```
    pub fn set(&mut self, key: K, value: V) {
        self.update_value(key, value);
    }

    /// Sets `key` to `value`, returning the previous value if there was one.
    ///
    /// The resulting map is identical to the one produced by
    /// [`set`](Self::set).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("TYO", "Tokyo")]);
    ///
    /// assert_eq!(map.update_value("TYO", "Tokyo International"), Some("Tokyo"));
    /// assert_eq!(map.update_value("SFO", "San Francisco"), None);
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn update_value(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_of(&key);
        match self.find(hash, &key) {
            Some(position) => Some(mem::replace(&mut self.entries[position].value, value)),
            None => {
                self.push(hash, key, value);
                None
            }
        }
    }

    /// Sets `key` when `value` is `Some`, removes it when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("DUB", "Dublin")]);
    ///
    /// map.set_or_remove("LHR", Some("London"));
    /// assert_eq!(map.get("LHR"), Some(&"London"));
    ///
    /// map.set_or_remove("DUB", None);
    /// assert_eq!(map.get("DUB"), None);
    /// ```
    pub fn set_or_remove(&mut self, key: K, value: Option<V>) {
        match value {
            Some(value) => self.set(key, value),
            None => {
                self.remove(&key);
            }
        }
    }

    /// Removes `key` and returns its value, or `None` if it was absent.
    ///
    /// The last entry takes the removed entry's position. Use
    /// [`shift_remove`](Self::shift_remove) to keep the order of the
    /// remaining entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("a", 1), ("b", 2)]);
    ///
    /// assert_eq!(map.remove("a"), Some(1));
    /// assert_eq!(map.remove("a"), None);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key` and returns the stored key together with its value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.position_of(key)?;
        Some(self.swap_remove_at(position))
    }

    /// Removes `key`, keeping the relative order of the remaining entries.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(map.shift_remove("a"), Some(1));
    ///
    /// let keys: Vec<&str> = map.keys().copied().collect();
    /// assert_eq!(keys, vec!["b", "c"]);
    /// ```
    pub fn shift_remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.position_of(key)?;
        Some(self.shift_remove_at(position).1)
    }

    /// Inserts, updates or removes the value for `key` depending on `updater`.
    ///
    /// `updater` receives the current value (`None` if `key` is absent).
    /// Returning `Some` stores the new value; returning `None` removes the
    /// key. The previous value, if any, is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("count", 10)]);
    ///
    /// // Increment existing value
    /// map.update_with("count", |current| current.map(|value| value + 1));
    /// assert_eq!(map.get("count"), Some(&11));
    ///
    /// // Insert if absent
    /// map.update_with("fresh", |current| Some(current.copied().unwrap_or(100)));
    /// assert_eq!(map.get("fresh"), Some(&100));
    ///
    /// // Remove by returning None
    /// assert_eq!(map.update_with("count", |_| None), Some(11));
    /// assert_eq!(map.get("count"), None);
    /// ```
    pub fn update_with<F>(&mut self, key: K, updater: F) -> Option<V>
    where
        F: FnOnce(Option<&V>) -> Option<V>,
    {
        let hash = self.hash_of(&key);
        let position = self.find(hash, &key);
        let current = position.map(|position| &self.entries[position].value);

        match (position, updater(current)) {
            (Some(position), Some(value)) => {
                Some(mem::replace(&mut self.entries[position].value, value))
            }
            (Some(position), None) => Some(self.swap_remove_at(position).1),
            (None, Some(value)) => {
                self.push(hash, key, value);
                None
            }
            (None, None) => None,
        }
    }

    /// Copies every entry of `other` into this map; `other` wins on conflicts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionaries::dictionary::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("a", 1), ("b", 2)]);
    /// let other = OrderedMap::from([("b", 20), ("c", 3)]);
    ///
    /// map.merge(&other);
    ///
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(map.get("b"), Some(&20));
    /// assert_eq!(map.get("c"), Some(&3));
    /// ```
    pub fn merge<S2>(&mut self, other: &OrderedMap<K, V, S2>)
    where
        K: Clone,
        V: Clone,
    {
        self.reserve(other.len());
        for (key, value) in other {
            self.set(key.clone(), value.clone());
        }
    }

    /// Reserves room for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
        self.index.reserve(additional);
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, S: Default> Default for OrderedMap<K, V, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

/// Duplicate keys: the last value wins and the key keeps its first position.
impl<K, V, S> FromIterator<(K, V)> for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity_and_hasher(iter.size_hint().0, S::default());
        map.extend(iter);
        map
    }
}

/// Duplicate keys: the last value wins and the key keeps its first position.
impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V, S> Extend<(K, V)> for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V, S> IntoIterator for OrderedMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.entries)
    }
}

impl<'a, K, V, S> IntoIterator for &'a OrderedMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut OrderedMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// # Panics
///
/// Panics if `key` is not present. Use [`OrderedMap::get`] to handle absence.
impl<K, Q, V, S> Index<&Q> for OrderedMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not present in OrderedMap")
    }
}

/// Two maps are equal when they hold the same pairs, in any order.
impl<K, V, S> PartialEq for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, S> Eq for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for OrderedMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for OrderedMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, S> serde::Serialize for OrderedMap<K, V, S>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedMapVisitor<K, V, S> {
    marker: std::marker::PhantomData<fn() -> OrderedMap<K, V, S>>,
}

#[cfg(feature = "serde")]
impl<K, V, S> OrderedMapVisitor<K, V, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::de::Visitor<'de> for OrderedMapVisitor<K, V, S>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = OrderedMap<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        // Repeated keys follow the lenient initializer: last value wins.
        let mut map =
            OrderedMap::with_capacity_and_hasher(access.size_hint().unwrap_or(0), S::default());
        while let Some((key, value)) = access.next_entry()? {
            map.set(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::Deserialize<'de> for OrderedMap<K, V, S>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
