//! The sample dictionary and the lookups replayed against it.

use cimap::{CaseInsensitiveMap, TextCollator};

// The binary ships its own copy: `testlib` is unpublished test support. The two tables are
// kept identical by `sample_data_matches_shared_fixtures`.
const DICTIONARY: [(&str, &str); 3] = [
    ("ciao", "hi"),
    ("gatto", "cat"),
    ("perch\u{e9}", "because"),
];

const LOOKUPS: [(&str, &str); 13] = [
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

/// A lookup that did not resolve to the expected translation.
#[derive(Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub key: &'static str,
    pub expected: &'static str,
    pub found: String,
}

/// Builds the sample dictionary ordered by `collator`.
pub fn dictionary<C: TextCollator>(collator: C) -> CaseInsensitiveMap<String, C> {
    CaseInsensitiveMap::from_pairs_in(
        collator,
        DICTIONARY.map(|(key, value)| (key, value.to_string())),
    )
}

/// Looks up every case variant with subscript semantics and collects the failures.
pub fn check<C: TextCollator>(dictionary: &mut CaseInsensitiveMap<String, C>) -> Vec<Mismatch> {
    LOOKUPS
        .iter()
        .filter_map(|&(key, expected)| {
            let found = dictionary.get_or_create(key);
            tracing::debug!(key, found = %found, "lookup");
            (found.as_str() != expected).then(|| Mismatch {
                key,
                expected,
                found: found.clone(),
            })
        })
        .collect()
}
