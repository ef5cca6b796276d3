//! Integration tests for serializing and deserializing maps.

use cimap::{CaseInsensitiveMap, DefaultCollator};
use testlib::dictionary_in;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct Glossary {
    language: String,
    words: CaseInsensitiveMap<String>,
}

#[test]
fn serialize_dictionary_to_json_writes_collation_order() {
    //* Given
    let mut dictionary =
        dictionary_in(DefaultCollator::invariant().expect("invariant collator should load"));
    dictionary.insert("Albero", "tree".to_string());
    dictionary.insert("ZUCCA", "pumpkin".to_string());

    //* When
    let json = serde_json::to_string_pretty(&dictionary).expect("should serialize dictionary");

    //* Then
    insta::assert_snapshot!(json, @r#"
    {
      "Albero": "tree",
      "ciao": "hi",
      "gatto": "cat",
      "perché": "because",
      "ZUCCA": "pumpkin"
    }
    "#);
}

#[test]
fn deserialize_json_with_case_variant_keys_merges_entries() {
    //* Given
    let json = r#"{
        "language": "it",
        "words": { "ciao": "hi", "CIAO": "hello", "Gatto": "cat", "gatto": "kitten" }
    }"#;

    //* When
    let glossary: Glossary = serde_json::from_str(json).expect("should deserialize glossary");

    //* Then
    assert_eq!(glossary.language, "it");
    assert_eq!(glossary.words.len(), 2, "case variants should merge");
    assert_eq!(
        glossary.words.iter().collect::<Vec<_>>(),
        [("ciao", &"hi".to_string()), ("Gatto", &"cat".to_string())],
        "first spelling and value should win"
    );
}

#[test]
fn serialize_glossary_round_trips_lookups() {
    //* Given
    let glossary = Glossary {
        language: "it".to_string(),
        words: dictionary_in(DefaultCollator::invariant().expect("invariant collator should load")),
    };

    //* When
    let value = serde_json::to_value(&glossary).expect("should serialize glossary");
    let restored: Glossary = serde_json::from_value(value).expect("should deserialize glossary");

    //* Then
    assert_eq!(
        restored.words.find("PERCH\u{c9}").map(String::as_str),
        Some("because"),
        "restored map should still ignore case"
    );
}

#[test]
fn deserialize_json_with_non_map_fails() {
    //* When
    let result = serde_json::from_str::<CaseInsensitiveMap<String>>(r#"["ciao", "hi"]"#);

    //* Then
    let err = result.expect_err("a JSON array is not a map");
    assert!(
        err.to_string().contains("a map with string keys"),
        "error should describe the expected input, got: {err}"
    );
}
