//! Integration tests for building maps from collections of pairs.
//!
//! Case variants supplied together (e.g. an initializer list) must merge into a single
//! entry: the first spelling and value win, the later pair is rejected.

use cimap::{CaseInsensitiveMap, FoldingCollator};
use testlib::assert_strictly_ascending;

#[test]
fn collect_with_case_variant_keys_creates_one_entry() {
    //* Given
    let pairs = [("ciao", "hi"), ("Ciao", "hello")];

    //* When
    let map: CaseInsensitiveMap<&str> = pairs.into_iter().collect();

    //* Then
    assert_eq!(map.len(), 1, "case variants should not create two entries");
    assert_eq!(
        map.find_key_value("CIAO"),
        Some(("ciao", &"hi")),
        "first pair should win"
    );
}

#[test]
fn from_pairs_in_with_accented_case_variants_creates_one_entry() {
    //* Given
    let pairs = [
        ("perch\u{e9}", "because"),
        ("gatto", "cat"),
        ("PERCH\u{c9}", "why"),
        ("GATTO", "tomcat"),
    ];

    //* When
    let map = CaseInsensitiveMap::from_pairs_in(FoldingCollator::new(), pairs);

    //* Then
    assert_eq!(map.len(), 2, "each word should be stored once");
    assert_eq!(map.find("Perch\u{e9}"), Some(&"because"));
    assert_eq!(map.find("gatto"), Some(&"cat"));
    assert_strictly_ascending(&map);
}

#[test]
fn extend_with_existing_case_variant_keeps_original_entry() {
    //* Given
    let mut map: CaseInsensitiveMap<u32> = [("Uno", 1), ("due", 2)].into_iter().collect();

    //* When
    map.extend([("UNO", 10), ("tre", 3)]);

    //* Then
    assert_eq!(
        map.iter().collect::<Vec<_>>(),
        [("due", &2), ("tre", &3), ("Uno", &1)],
        "new keys should be added, case variants rejected"
    );
}

#[test]
fn collect_with_owned_string_keys_succeeds() {
    //* Given
    let pairs = vec![("Gatto".to_string(), 1), ("cane".to_string(), 2)];

    //* When
    let map: CaseInsensitiveMap<i32> = pairs.into_iter().collect();

    //* Then
    assert_eq!(map.keys().collect::<Vec<_>>(), ["cane", "Gatto"]);
}
