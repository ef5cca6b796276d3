//! Shared fixtures and assertions for the cimap test suites.

use std::cmp::Ordering;

use cimap::{CaseInsensitiveMap, TextCollator};

/// The sample dictionary: Italian words and their English translations.
pub const DICTIONARY: [(&str, &str); 3] = [
    ("ciao", "hi"),
    ("gatto", "cat"),
    ("perch\u{e9}", "because"),
];

/// Case variants of each dictionary key, paired with the translation they must resolve to.
pub const CASE_VARIANTS: [(&str, &str); 13] = [
    ("ciao", "hi"),
    ("Ciao", "hi"),
    ("CIAO", "hi"),
    ("CIaO", "hi"),
    ("gatto", "cat"),
    ("GATTO", "cat"),
    ("Gatto", "cat"),
    ("gAtTo", "cat"),
    ("gatTO", "cat"),
    ("perch\u{e9}", "because"),
    ("PERch\u{e9}", "because"),
    ("PERCH\u{c9}", "because"),
    ("PeRCh\u{c9}", "because"),
];

/// Builds the sample dictionary ordered by `collator`.
pub fn dictionary_in<C: TextCollator>(collator: C) -> CaseInsensitiveMap<String, C> {
    CaseInsensitiveMap::from_pairs_in(
        collator,
        DICTIONARY.map(|(key, value)| (key, value.to_string())),
    )
}

/// Asserts that consecutive keys are strictly increasing under the map's ordering.
///
/// Strictly increasing implies both the ordering and the uniqueness invariants.
#[track_caller]
pub fn assert_strictly_ascending<V, C: TextCollator>(map: &CaseInsensitiveMap<V, C>) {
    let order = map.comparator();
    let keys = map.keys().collect::<Vec<_>>();
    for pair in keys.windows(2) {
        assert_eq!(
            order.compare(pair[0], pair[1]),
            Ordering::Less,
            "keys {:?} and {:?} should be strictly ascending",
            pair[0],
            pair[1]
        );
    }
}
