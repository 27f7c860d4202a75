use ini_reader::{IniError, IniStore};

#[test]
fn fresh_store_is_invalid_and_answers_benignly() {
    let store = IniStore::new();

    assert!(!store.is_valid());
    assert!(store.is_empty());
    assert_eq!(store.size(), 0);
    assert_eq!(store.group_size("anything"), 0);
    assert!(!store.contains_group("anything"));
    assert!(!store.contains_key("anything", "at-all"));
    assert_eq!(store.get("anything", "at-all"), None);

    let err = store.get_key_as::<i32>("anything", "at-all").unwrap_err();
    assert!(matches!(err, IniError::GroupNotFound { .. }));
}

#[test]
fn first_write_instantiates_the_store() {
    let mut store = IniStore::new();
    store.add_group("Settings");

    assert!(store.is_valid());
    assert_eq!(store.size(), 1);
    assert_eq!(store.group_size("Settings"), 0);
}

#[test]
fn add_group_is_idempotent() {
    let mut store = IniStore::new();
    assert!(store.add_key_pair("Settings", "kept", 1));
    store.add_group("Settings");

    assert_eq!(store.size(), 1);
    assert_eq!(store.group_size("Settings"), 1);
    assert_eq!(store.get("Settings", "kept"), Some("1"));
}

#[test]
fn add_key_pair_creates_the_group_and_reports_presence() {
    let mut store = IniStore::new();

    assert!(store.add_key_pair("Net", "port", 8080u16));
    assert!(store.contains_group("Net"));
    assert!(store.contains_key("Net", "port"));
}

#[test]
fn typed_values_round_trip() {
    let mut store = IniStore::new();
    store.add_key_pair("T", "port", 8080u16);
    store.add_key_pair("T", "offset", -17i64);
    store.add_key_pair("T", "ratio", 2.5f64);
    store.add_key_pair("T", "verbose", true);
    store.add_key_pair("T", "name", "backend");

    assert_eq!(store.get_key_as::<u16>("T", "port").unwrap(), 8080);
    assert_eq!(store.get_key_as::<i64>("T", "offset").unwrap(), -17);
    assert_eq!(store.get_key_as::<f64>("T", "ratio").unwrap(), 2.5);
    assert!(store.get_key_as::<bool>("T", "verbose").unwrap());
    assert_eq!(store.get_key_as::<String>("T", "name").unwrap(), "backend");
}

#[test]
fn re_adding_a_key_overwrites_without_growing_the_group() {
    let mut store = IniStore::new();
    store.add_key_pair("G", "mode", "slow");
    store.add_key_pair("G", "mode", "fast");

    assert_eq!(store.group_size("G"), 1);
    assert_eq!(store.get("G", "mode"), Some("fast"));
}

#[test]
fn conversion_rejects_trailing_garbage() {
    let mut store = IniStore::new();
    store.add_key_pair("G", "n", "123abc");
    store.add_key_pair("G", "m", "12 3");

    let err = store.get_key_as::<i32>("G", "n").unwrap_err();
    assert!(matches!(
        err,
        IniError::Conversion { ref value, .. } if value == "123abc"
    ));
    assert!(store.get_key_as::<i32>("G", "m").is_err());
}

#[test]
fn conversion_tolerates_surrounding_whitespace() {
    let mut store = IniStore::new();
    store.add_key_pair("G", "n", "123 ");
    store.add_key_pair("G", "m", " 42");

    assert_eq!(store.get_key_as::<i32>("G", "n").unwrap(), 123);
    assert_eq!(store.get_key_as::<i32>("G", "m").unwrap(), 42);
}

#[test]
fn missing_group_and_missing_key_are_distinct_errors() {
    let mut store = IniStore::new();
    store.add_key_pair("Present", "here", 1);

    let err = store.get_key_as::<i32>("Absent", "here").unwrap_err();
    assert!(matches!(err, IniError::GroupNotFound { ref group } if group == "Absent"));

    let err = store.get_key_as::<i32>("Present", "gone").unwrap_err();
    assert!(matches!(
        err,
        IniError::KeyNotFound { ref group, ref key } if group == "Present" && key == "gone"
    ));
}

#[test]
fn clear_returns_to_the_fresh_state_and_the_store_stays_usable() {
    let mut store = IniStore::new();
    store.add_key_pair("G", "k", 1);
    store.clear();

    assert!(!store.is_valid());
    assert_eq!(store.size(), 0);
    assert_eq!(store.get("G", "k"), None);

    assert!(store.add_key_pair("G2", "k2", 2));
    assert!(store.is_valid());
    assert_eq!(store.size(), 1);
}

#[test]
fn groups_and_entries_iterate_in_order() {
    let mut store = IniStore::new();
    store.add_key_pair("Zeta", "z", 1);
    store.add_key_pair("Alpha", "b", 2);
    store.add_key_pair("Alpha", "a", 3);

    let groups: Vec<&str> = store.groups().collect();
    assert_eq!(groups, vec!["Alpha", "Zeta"]);

    let entries: Vec<(&str, &str)> = store.entries("Alpha").collect();
    assert_eq!(entries, vec![("a", "3"), ("b", "2")]);

    assert_eq!(store.entries("Missing").count(), 0);
}
