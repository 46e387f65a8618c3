//! Minimum query length gate.

use crate::common::{docs_index, sample_index};
use docsift::{passes_length_gate, query, DEFAULT_LIMIT};

#[test]
fn test_short_queries_return_nothing() {
    let index = docs_index();
    for text in ["", "m", "me", "  me  ", "\tli\n"] {
        assert!(
            query(&index, text, DEFAULT_LIMIT).is_empty(),
            "query {:?} should be gated",
            text
        );
    }
}

#[test]
fn test_gate_counts_characters_not_bytes() {
    // Two characters, four bytes.
    assert!(!passes_length_gate("éé"));
    assert!(passes_length_gate("ééé"));
}

#[test]
fn test_gate_ignores_surrounding_whitespace() {
    let index = sample_index();
    assert!(query(&index, "   wi   ", DEFAULT_LIMIT).is_empty());
    assert_eq!(query(&index, "   wid   ", DEFAULT_LIMIT)[0].link, "/b");
}

#[test]
fn test_three_characters_are_enough() {
    let index = sample_index();
    assert!(query(&index, "wi", DEFAULT_LIMIT).is_empty());
    assert_eq!(query(&index, "wid", DEFAULT_LIMIT).len(), 1);
}

#[test]
fn test_interior_spaces_count_toward_length() {
    // "a b" is three characters after trimming, so it is searched.
    let index = sample_index();
    let results = query(&index, "a b", DEFAULT_LIMIT);
    assert_eq!(results.len(), 1);
    assert!(results[0].is_sentinel());
}
