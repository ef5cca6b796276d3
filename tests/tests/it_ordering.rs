//! Integration tests for key ordering and collator injection.
//!
//! These tests verify that:
//! - iteration follows case-insensitive collation order, not code point order
//! - accent differences keep keys distinct
//! - a collator picked at run time from `CollationOptions` orders the map the same way

use cimap::{
    Backend, CaseInsensitiveMap, CaseMode, CollationOptions, FoldingCollator, IcuCollator,
    SharedCollator, TextCollator,
};
use testlib::{DICTIONARY, assert_strictly_ascending, dictionary_in};

const FRUITS: [(&str, u32); 5] = [
    ("Zebra", 0),
    ("apple", 1),
    ("Mango", 2),
    ("banana", 3),
    ("Cherry", 4),
];

#[test]
fn iterate_with_icu_collator_yields_alphabetical_order() {
    //* Given
    let map = CaseInsensitiveMap::from_pairs_in(
        IcuCollator::invariant().expect("root collation should load"),
        FRUITS,
    );

    //* When
    let keys = map.keys().collect::<Vec<_>>();

    //* Then
    assert_eq!(
        keys,
        ["apple", "banana", "Cherry", "Mango", "Zebra"],
        "capitals should not sort before lower-case words"
    );
    assert_strictly_ascending(&map);
}

#[test]
fn iterate_with_folding_collator_yields_alphabetical_order() {
    //* Given
    let map = CaseInsensitiveMap::from_pairs_in(FoldingCollator::new(), FRUITS);

    //* When
    let keys = map.keys().collect::<Vec<_>>();

    //* Then
    assert_eq!(
        keys,
        ["apple", "banana", "Cherry", "Mango", "Zebra"],
        "folded keys of ASCII words should sort alphabetically"
    );
    assert_strictly_ascending(&map);
}

#[test]
fn iterate_in_reverse_yields_descending_order() {
    //* Given
    let map = CaseInsensitiveMap::from_pairs_in(FoldingCollator::new(), FRUITS);

    //* When
    let values = map.values().rev().copied().collect::<Vec<_>>();

    //* Then
    assert_eq!(values, [0, 2, 4, 3, 1], "reverse iteration should start at 'Zebra'");
    assert_eq!(map.iter().len(), FRUITS.len(), "iterator should know its length");
}

#[test]
fn iterate_twice_yields_same_sequence() {
    //* Given
    let map = dictionary_in(FoldingCollator::new());

    //* When
    let first = map.iter().collect::<Vec<_>>();
    let second = (&map).into_iter().collect::<Vec<_>>();

    //* Then
    assert_eq!(first, second, "iteration should be restartable");
    assert_eq!(first.len(), DICTIONARY.len());
}

#[test]
fn insert_with_accent_variant_creates_distinct_entry() {
    //* Given
    let mut map: CaseInsensitiveMap<&str> = CaseInsensitiveMap::new();

    //* When
    let plain = map.insert("resume", "continue");
    let accented = map.insert("R\u{c9}SUM\u{c9}", "cv");

    //* Then
    assert!(plain && accented, "accent differences should not merge keys");
    assert_eq!(map.find("r\u{e9}sum\u{e9}"), Some(&"cv"));
    assert_eq!(map.find("RESUME"), Some(&"continue"));
    assert_eq!(
        map.keys().collect::<Vec<_>>(),
        ["resume", "R\u{c9}SUM\u{c9}"],
        "unaccented form should sort first"
    );
}

#[test]
fn with_collator_from_options_orders_like_concrete_collator() {
    //* Given
    let options = CollationOptions::builder().backend(Backend::Icu).build();
    let collator: SharedCollator = options
        .build_collator()
        .expect("icu backend should build from options");

    //* When
    let map = CaseInsensitiveMap::from_pairs_in(collator, FRUITS);

    //* Then
    assert_eq!(map.first_key_value(), Some(("apple", &1)));
    assert_eq!(map.last_key_value(), Some(("Zebra", &0)));
    assert_eq!(map.find("CHERRY"), Some(&4), "runtime collator should ignore case");
}

#[test]
fn with_collator_for_locale_keeps_sample_lookups_working() {
    //* Given
    let options = CollationOptions::builder()
        .backend(Backend::Icu)
        .locale("it")
        .build();
    let collator = options
        .build_collator()
        .expect("italian collation should build");

    //* When
    let dictionary = dictionary_in(collator);

    //* Then
    assert_eq!(dictionary.find("PeRCh\u{c9}").map(String::as_str), Some("because"));
    assert_eq!(dictionary.find("gAtTo").map(String::as_str), Some("cat"));
}

#[test]
fn comparator_exposes_collator_used_by_map() {
    //* Given
    let map = dictionary_in(FoldingCollator::new());

    //* When
    let order = map.comparator();

    //* Then
    assert!(order.equivalent("CIAO", "ciao"), "comparator should ignore case");
    assert!(order.less("ciao", "GATTO"), "comparator should order alphabetically");
    assert_eq!(
        order.collator().compare("CIAO", "ciao", CaseMode::Sensitive),
        std::cmp::Ordering::Less,
        "the underlying collator can still compare case-sensitively"
    );
}
