//! Hash-to-position table backing [`OrderedMap`](super::OrderedMap).
//!
//! Entries live in a `Vec` in insertion order. This table maps the full
//! 64-bit hash of each key to the positions of the entries carrying that
//! hash. Keys whose hashes collide share a slot list, and the caller
//! compares keys to pick the right position.

use std::collections::HashMap;
use std::hash::{BuildHasherDefault, Hasher};

use smallvec::SmallVec;

// =============================================================================
// Prehashed Hasher
// =============================================================================

/// Passes an already computed `u64` hash through unchanged.
#[derive(Clone, Copy, Default)]
pub(super) struct PrehashedHasher(u64);

impl Hasher for PrehashedHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        // Only u64 keys reach this hasher; fold anything else.
        for &byte in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(byte);
        }
    }

    #[inline]
    fn write_u64(&mut self, value: u64) {
        self.0 = value;
    }
}

// =============================================================================
// PositionIndex
// =============================================================================

/// Positions sharing one hash. Almost always a single element.
type Slots = SmallVec<[usize; 1]>;

#[derive(Clone, Default)]
pub(super) struct PositionIndex {
    slots: HashMap<u64, Slots, BuildHasherDefault<PrehashedHasher>>,
}

impl PositionIndex {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity_and_hasher(capacity, BuildHasherDefault::default()),
        }
    }

    /// Candidate positions for `hash`, in no particular order.
    pub(super) fn positions(&self, hash: u64) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .get(&hash)
            .into_iter()
            .flat_map(|slots| slots.iter().copied())
    }

    pub(super) fn insert(&mut self, hash: u64, position: usize) {
        self.slots.entry(hash).or_default().push(position);
    }

    pub(super) fn remove(&mut self, hash: u64, position: usize) {
        if let Some(slots) = self.slots.get_mut(&hash) {
            slots.retain(|slot| *slot != position);
            if slots.is_empty() {
                self.slots.remove(&hash);
            }
        }
    }

    /// Rewrites the slot pointing at `from` so it points at `to`.
    pub(super) fn relocate(&mut self, hash: u64, from: usize, to: usize) {
        if let Some(slot) = self
            .slots
            .get_mut(&hash)
            .and_then(|slots| slots.iter_mut().find(|slot| **slot == from))
        {
            *slot = to;
        }
    }

    pub(super) fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
    }

    pub(super) fn clear(&mut self) {
        self.slots.clear();
    }
}

// =============================================================================
// Tests
// =============================================================================
