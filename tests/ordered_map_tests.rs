//! Integration tests for `OrderedMap`.
//!
//! Walks through the airport dictionary used in the documentation and
//! checks each operation's effect on length and lookups.

use dictionaries::dictionary::{DuplicateKeyError, OrderedMap};
use rstest::{fixture, rstest};

// =============================================================================
// Fixtures
// =============================================================================

#[fixture]
fn airports() -> OrderedMap<String, String> {
    OrderedMap::from([
        ("TYO".to_string(), "Tokyo".to_string()),
        ("DUB".to_string(), "Dublin".to_string()),
    ])
}

// =============================================================================
// Airport Scenario
// =============================================================================

#[rstest]
fn test_airport_scenario(mut airports: OrderedMap<String, String>) {
    assert_eq!(airports.len(), 2);

    airports.set("LHR".to_string(), "London".to_string());
    assert_eq!(airports.len(), 3);

    airports.set("LHR".to_string(), "London Heathrow".to_string());
    assert_eq!(airports.len(), 3);
    assert_eq!(
        airports.get("LHR").map(String::as_str),
        Some("London Heathrow")
    );

    let previous = airports.update_value("TYO".to_string(), "Tokyo International".to_string());
    assert_eq!(previous.as_deref(), Some("Tokyo"));

    airports.set_or_remove("DUB".to_string(), None);
    assert_eq!(airports.len(), 2);
    assert_eq!(airports.get("DUB"), None);

    let pairs: Vec<(&str, &str)> = airports
        .iter()
        .map(|(code, name)| (code.as_str(), name.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("TYO", "Tokyo International"), ("LHR", "London Heathrow")]
    );
}

// =============================================================================
// Lookup
// =============================================================================

#[rstest]
#[case("TYO", Some("Tokyo"))]
#[case("DUB", Some("Dublin"))]
#[case("LHR", None)]
#[case("", None)]
fn test_get(
    airports: OrderedMap<String, String>,
    #[case] code: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(airports.get(code).map(String::as_str), expected);
    assert_eq!(airports.contains_key(code), expected.is_some());
}

#[rstest]
fn test_get_never_mutates(airports: OrderedMap<String, String>) {
    let before = airports.clone();
    let _ = airports.get("TYO");
    let _ = airports.get("XXX");
    assert_eq!(airports, before);
}

#[rstest]
fn test_falsy_values_are_present() {
    let mut flags: OrderedMap<&str, bool> = OrderedMap::new();
    flags.set("enabled", false);

    let mut labels: OrderedMap<&str, String> = OrderedMap::new();
    labels.set("blank", String::new());

    assert_eq!(flags.get("enabled"), Some(&false));
    assert_eq!(labels.get("blank").map(String::as_str), Some(""));
    assert_eq!(flags.get("disabled"), None);
}

// =============================================================================
// Mutation
// =============================================================================

#[rstest]
fn test_update_value_matches_set(airports: OrderedMap<String, String>) {
    let mut via_set = airports.clone();
    let mut via_update = airports;

    via_set.set("TYO".to_string(), "Haneda".to_string());
    let previous = via_update.update_value("TYO".to_string(), "Haneda".to_string());

    assert_eq!(previous.as_deref(), Some("Tokyo"));
    assert_eq!(via_set, via_update);
}

#[rstest]
fn test_set_or_remove_absent_matches_remove(airports: OrderedMap<String, String>) {
    let mut via_remove = airports.clone();
    let mut via_assignment = airports;

    let removed = via_remove.remove("DUB");
    via_assignment.set_or_remove("DUB".to_string(), None);

    assert_eq!(removed.as_deref(), Some("Dublin"));
    assert_eq!(via_remove, via_assignment);
}

#[rstest]
fn test_remove_is_idempotent(mut airports: OrderedMap<String, String>) {
    assert_eq!(airports.remove("TYO").as_deref(), Some("Tokyo"));
    let length = airports.len();

    assert_eq!(airports.remove("TYO"), None);
    assert_eq!(airports.len(), length);
}

#[rstest]
fn test_remove_until_empty(mut airports: OrderedMap<String, String>) {
    airports.remove("TYO");
    airports.remove("DUB");
    assert!(airports.is_empty());
    assert_eq!(airports.iter().count(), 0);
}

#[rstest]
fn test_many_insertions_and_removals() {
    let mut map: OrderedMap<u32, u32> = OrderedMap::new();
    for number in 0..1_000 {
        map.set(number, number * 2);
    }
    for number in (0..1_000).filter(|number| number % 2 == 1) {
        assert_eq!(map.remove(&number), Some(number * 2));
    }

    assert_eq!(map.len(), 500);
    for number in 0..1_000 {
        let expected = (number % 2 == 0).then_some(number * 2);
        assert_eq!(map.get(&number).copied(), expected);
    }
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn test_iteration_matches_lookups(airports: OrderedMap<String, String>) {
    let mut seen = Vec::new();
    for (code, name) in &airports {
        assert_eq!(airports.get(code), Some(name));
        assert!(!seen.contains(code));
        seen.push(code.clone());
    }
    assert_eq!(seen.len(), airports.len());
}

#[rstest]
fn test_keys_and_values_are_parallel(airports: OrderedMap<String, String>) {
    let keys: Vec<&String> = airports.keys().collect();
    let values: Vec<&String> = airports.values().collect();

    assert_eq!(keys.len(), values.len());
    for (key, value) in keys.iter().zip(values) {
        assert_eq!(airports.get(key.as_str()), Some(value));
    }
}

#[rstest]
fn test_mutable_iteration(mut airports: OrderedMap<String, String>) {
    for (_, name) in &mut airports {
        name.make_ascii_uppercase();
    }
    assert_eq!(airports.get("TYO").map(String::as_str), Some("TOKYO"));
}

#[rstest]
fn test_owned_iteration(airports: OrderedMap<String, String>) {
    let codes: Vec<String> = airports.into_iter().map(|(code, _)| code).collect();
    assert_eq!(codes, vec!["TYO".to_string(), "DUB".to_string()]);
}

// =============================================================================
// Initializers
// =============================================================================

#[rstest]
fn test_lenient_initializer_keeps_last_value() {
    let map = OrderedMap::from([("TYO", "Tokyo"), ("DUB", "Dublin"), ("TYO", "Haneda")]);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("TYO"), Some(&"Haneda"));
    assert_eq!(map.get_index_of("TYO"), Some(0));
}

#[rstest]
fn test_strict_initializer_reports_duplicate() {
    let result = OrderedMap::try_from_pairs([("TYO", "Tokyo"), ("DUB", "Dublin"), ("TYO", "Haneda")]);
    let error = result.unwrap_err();

    assert_eq!(error, DuplicateKeyError::new("TYO", 2));
    assert_eq!(error.to_string(), "duplicate key \"TYO\" at position 2");
}

#[rstest]
fn test_extend_overwrites(mut airports: OrderedMap<String, String>) {
    airports.extend([
        ("DUB".to_string(), "Dublin Airport".to_string()),
        ("SFO".to_string(), "San Francisco".to_string()),
    ]);
    assert_eq!(airports.len(), 3);
    assert_eq!(airports["DUB"], "Dublin Airport");
}

// =============================================================================
// Display
// =============================================================================

#[rstest]
fn test_display(airports: OrderedMap<String, String>) {
    assert_eq!(format!("{airports}"), "{TYO: Tokyo, DUB: Dublin}");
}
