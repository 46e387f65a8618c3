//! Same index, same query, same answer.

use crate::common::links;
use docsift::testing::docs_corpus;
use docsift::{build_index, query, DEFAULT_LIMIT};

#[test]
fn test_repeated_queries_are_identical() {
    let index = build_index(docs_corpus());
    for text in ["menu", "mod", "popup", "zzz", "list models"] {
        let first = query(&index, text, DEFAULT_LIMIT);
        let second = query(&index, text, DEFAULT_LIMIT);
        assert_eq!(first, second, "query {:?} differs between runs", text);
    }
}

#[test]
fn test_rebuilt_index_gives_same_results() {
    let a = build_index(docs_corpus());
    let b = build_index(docs_corpus());
    assert_eq!(a, b);
    for text in ["menu", "gaction", "quick"] {
        assert_eq!(
            links(&query(&a, text, DEFAULT_LIMIT)),
            links(&query(&b, text, DEFAULT_LIMIT))
        );
    }
}
