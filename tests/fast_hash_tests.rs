//! Tests for hash builder selection.
//!
//! The same behaviour must hold whichever hasher the `fxhash` / `ahash`
//! feature flags select, and for hashers supplied by the caller.

use dictionaries::dictionary::{DefaultHashBuilder, OrderedMap};
use rstest::rstest;
use std::hash::{BuildHasherDefault, DefaultHasher, RandomState};

// =============================================================================
// Default Hasher
// =============================================================================

#[rstest]
fn test_default_hasher_retrieves_every_key() {
    let map: OrderedMap<String, usize, DefaultHashBuilder> = (0..10_000)
        .map(|number| (format!("key{number}"), number))
        .collect();

    assert_eq!(map.len(), 10_000);
    for number in 0..10_000 {
        assert_eq!(map.get(format!("key{number}").as_str()), Some(&number));
    }
    assert_eq!(map.get("key10000"), None);
}

#[rstest]
fn test_maps_with_same_entries_are_equal() {
    let entries = vec![
        ("alpha".to_string(), 1),
        ("beta".to_string(), 2),
        ("gamma".to_string(), 3),
    ];

    let map1: OrderedMap<String, i32> = entries.iter().cloned().collect();
    let map2: OrderedMap<String, i32> = entries.iter().rev().cloned().collect();

    assert_eq!(map1, map2);
}

// =============================================================================
// Caller-Supplied Hashers
// =============================================================================

#[rstest]
fn test_random_state_hasher() {
    let mut map = OrderedMap::with_hasher(RandomState::new());
    map.set("TYO", "Tokyo");
    map.set("DUB", "Dublin");

    assert_eq!(map.get("TYO"), Some(&"Tokyo"));
    assert_eq!(map.remove("DUB"), Some("Dublin"));
}

#[rstest]
fn test_deterministic_hasher() {
    type Deterministic = BuildHasherDefault<DefaultHasher>;

    let mut map: OrderedMap<i32, i32, Deterministic> = OrderedMap::default();
    for number in 0..1_000 {
        map.set(number, -number);
    }
    for number in (0..1_000).step_by(3) {
        map.shift_remove(&number);
    }

    assert_eq!(map.len(), 666);
    assert_eq!(map.get(&1), Some(&-1));
    assert_eq!(map.get(&3), None);
}

#[rstest]
fn test_strict_initializer_with_hasher() {
    let result =
        OrderedMap::try_from_pairs_with_hasher([(1, "one"), (1, "uno")], RandomState::new());
    assert_eq!(result.unwrap_err().position(), 1);
}
