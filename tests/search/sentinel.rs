//! The "No results..." entry.

use crate::common::{docs_index, links, sample_index};
use docsift::{build_index, query, Suggestion, DEFAULT_LIMIT, NO_RESULTS_LINK, NO_RESULTS_TITLE};

#[test]
fn test_no_match_yields_single_sentinel() {
    let results = query(&sample_index(), "zzz", DEFAULT_LIMIT);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].link, NO_RESULTS_LINK);
    assert_eq!(results[0].value, Suggestion::NoResults);
    assert_eq!(results[0].title(), NO_RESULTS_TITLE);
    assert_eq!(results[0].title(), "No results...");
}

#[test]
fn test_sentinel_never_mixed_with_results() {
    let index = docs_index();
    for text in ["menu", "model", "pref", "toggle"] {
        let results = query(&index, text, DEFAULT_LIMIT);
        assert!(!results.is_empty());
        assert!(
            results.iter().all(|entry| !entry.is_sentinel()),
            "query {:?} mixed sentinel into {:?}",
            text,
            links(&results)
        );
    }
}

#[test]
fn test_empty_index_has_no_sentinel() {
    let index = build_index(Vec::new());
    assert!(query(&index, "widget", DEFAULT_LIMIT).is_empty());
}

#[test]
fn test_partial_and_match_is_no_match() {
    // "install" matches, "widgets" matches another page, but no page has both.
    let results = query(&sample_index(), "install widgets", DEFAULT_LIMIT);
    assert_eq!(links(&results), vec!["#"]);
}

#[test]
fn test_sentinel_serializes_title_and_path() {
    let results = query(&sample_index(), "zzz", DEFAULT_LIMIT);
    let json = serde_json::to_value(&results[0]).unwrap();
    assert_eq!(json["link"], "#");
    assert_eq!(json["value"]["title"], "No results...");
}
