//! Iterators over an [`OrderedMap`](super::OrderedMap).
//!
//! Every iterator yields entries in insertion order, knows its exact
//! length, and can be walked from either end.

use std::iter::FusedIterator;
use std::{slice, vec};

use super::ordered_map::Bucket;

// =============================================================================
// Iter
// =============================================================================

/// An iterator over `(&K, &V)` pairs of an [`OrderedMap`](super::OrderedMap).
///
/// Created by [`OrderedMap::iter`](super::OrderedMap::iter).
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, Bucket<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(entries: &'a [Bucket<K, V>]) -> Self {
        Self {
            inner: entries.iter(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Bucket::pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Bucket::pair)
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

// =============================================================================
// IterMut
// =============================================================================

/// An iterator over `(&K, &mut V)` pairs.
///
/// Created by [`OrderedMap::iter_mut`](super::OrderedMap::iter_mut).
pub struct IterMut<'a, K, V> {
    inner: slice::IterMut<'a, Bucket<K, V>>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(super) fn new(entries: &'a mut [Bucket<K, V>]) -> Self {
        Self {
            inner: entries.iter_mut(),
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Bucket::pair_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Bucket::pair_mut)
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

// =============================================================================
// Keys / Values / ValuesMut
// =============================================================================

/// An iterator over the keys of an [`OrderedMap`](super::OrderedMap).
///
/// Yields keys in the same order [`Values`] yields their values.
pub struct Keys<'a, K, V> {
    inner: slice::Iter<'a, Bucket<K, V>>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(super) fn new(entries: &'a [Bucket<K, V>]) -> Self {
        Self {
            inner: entries.iter(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|bucket| &bucket.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|bucket| &bucket.key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// An iterator over the values of an [`OrderedMap`](super::OrderedMap).
pub struct Values<'a, K, V> {
    inner: slice::Iter<'a, Bucket<K, V>>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(super) fn new(entries: &'a [Bucket<K, V>]) -> Self {
        Self {
            inner: entries.iter(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|bucket| &bucket.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|bucket| &bucket.value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// A mutable iterator over the values of an [`OrderedMap`](super::OrderedMap).
pub struct ValuesMut<'a, K, V> {
    inner: slice::IterMut<'a, Bucket<K, V>>,
}

impl<'a, K, V> ValuesMut<'a, K, V> {
    pub(super) fn new(entries: &'a mut [Bucket<K, V>]) -> Self {
        Self {
            inner: entries.iter_mut(),
        }
    }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|bucket| &mut bucket.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|bucket| &mut bucket.value)
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

// =============================================================================
// IntoIter
// =============================================================================

/// An owning iterator over the `(K, V)` pairs of an
/// [`OrderedMap`](super::OrderedMap).
pub struct IntoIter<K, V> {
    inner: vec::IntoIter<Bucket<K, V>>,
}

impl<K, V> IntoIter<K, V> {
    pub(super) fn new(entries: Vec<Bucket<K, V>>) -> Self {
        Self {
            inner: entries.into_iter(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Bucket::into_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Bucket::into_pair)
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::super::OrderedMap;
    use rstest::rstest;

    fn airports() -> OrderedMap<&'static str, &'static str> {
        OrderedMap::from([("TYO", "Tokyo"), ("DUB", "Dublin"), ("LHR", "London")])
    }

    #[rstest]
    fn test_iter_is_exact_size() {
        let map = airports();
        let mut iter = map.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }

    #[rstest]
    fn test_iter_from_both_ends() {
        let map = airports();
        let mut iter = map.iter();
        assert_eq!(iter.next(), Some((&"TYO", &"Tokyo")));
        assert_eq!(iter.next_back(), Some((&"LHR", &"London")));
        assert_eq!(iter.next(), Some((&"DUB", &"Dublin")));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[rstest]
    fn test_keys_and_values_share_order() {
        let map = airports();
        let pairs: Vec<_> = map.keys().zip(map.values()).collect();
        let expected: Vec<_> = map.iter().collect();
        assert_eq!(pairs, expected);
    }

    #[rstest]
    fn test_keys_reversed() {
        let map = airports();
        let keys: Vec<_> = map.keys().rev().copied().collect();
        assert_eq!(keys, vec!["LHR", "DUB", "TYO"]);
    }

    #[rstest]
    fn test_cloned_iterator_is_independent() {
        let map = airports();
        let mut values = map.values();
        values.next();
        let rest: Vec<_> = values.clone().copied().collect();
        assert_eq!(rest, vec!["Dublin", "London"]);
        assert_eq!(values.len(), 2);
    }

    #[rstest]
    fn test_values_mut_modifies_in_place() {
        let mut map: OrderedMap<&str, i32> = OrderedMap::from([("a", 1), ("b", 2)]);
        for value in map.values_mut() {
            *value *= 10;
        }
        assert_eq!(map.get("a"), Some(&10));
        assert_eq!(map.get("b"), Some(&20));
    }

    #[rstest]
    fn test_iter_mut_yields_keys_with_mutable_values() {
        let mut map: OrderedMap<&str, String> =
            OrderedMap::from([("a", String::from("x")), ("b", String::from("y"))]);
        for (key, value) in map.iter_mut() {
            value.push_str(key);
        }
        assert_eq!(map.get("a").map(String::as_str), Some("xa"));
        assert_eq!(map.get("b").map(String::as_str), Some("yb"));
    }

    #[rstest]
    fn test_into_iter_yields_owned_pairs_in_order() {
        let map = airports();
        let mut into_iter = map.into_iter();
        assert_eq!(into_iter.len(), 3);
        assert_eq!(into_iter.next_back(), Some(("LHR", "London")));
        let rest: Vec<_> = into_iter.collect();
        assert_eq!(rest, vec![("TYO", "Tokyo"), ("DUB", "Dublin")]);
    }

    #[rstest]
    fn test_exhausted_iterator_stays_exhausted() {
        let map: OrderedMap<&str, i32> = OrderedMap::from([("only", 1)]);
        let mut keys = map.keys();
        assert_eq!(keys.next(), Some(&"only"));
        assert_eq!(keys.next(), None);
        assert_eq!(keys.next(), None);
    }
}
