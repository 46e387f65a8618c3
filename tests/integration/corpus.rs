//! Loading page data through `CorpusProvider`.

use crate::common::{links, make_page, write_file};
use docsift::{
    load_corpus, load_index, query, CorpusError, CorpusProvider, JsonCorpus, PageFuture,
    PageRecord, DEFAULT_LIMIT,
};
use futures::executor::block_on;
use futures::future::FutureExt;
use std::cell::Cell;
use tempfile::TempDir;

const PAGES: &str = r#"[
    {
        "key": "v-1",
        "path": "/guides/gio/list-models.html",
        "title": "List Models",
        "frontmatter": { "tags": ["gio", "lists"] },
        "headers": [
            { "level": 2, "title": "GListModel", "slug": "glistmodel" },
            { "level": 2, "title": "GListStore", "slug": "gliststore" }
        ]
    },
    { "key": "v-2", "path": "", "title": "Broken" },
    { "key": "v-3", "path": "/extensions/topics/popup-menu.html", "title": "Popup Menu" }
]"#;

#[test]
fn test_json_corpus_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "pages.json", PAGES);
    let corpus = JsonCorpus::from_path(&path).unwrap();
    assert_eq!(corpus.len(), 3);

    let index = block_on(load_index(&corpus));
    // The page without a path is skipped.
    assert_eq!(index.len(), 2);
    assert_eq!(
        links(&query(&index, "gliststore", DEFAULT_LIMIT)),
        vec!["/guides/gio/list-models.html"]
    );
    assert_eq!(
        links(&query(&index, "lists", DEFAULT_LIMIT)),
        vec!["/guides/gio/list-models.html"]
    );
}

#[test]
fn test_missing_corpus_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = JsonCorpus::from_path(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CorpusError::Io { .. }));
}

#[test]
fn test_malformed_corpus_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "pages.json", "{ not json");
    let err = JsonCorpus::from_path(&path).unwrap_err();
    assert!(matches!(err, CorpusError::Json(_)));
}

/// Resolves every other page with an error and counts resolutions.
struct FlakyProvider {
    pages: Vec<PageRecord>,
    resolved: Cell<usize>,
}

impl CorpusProvider for FlakyProvider {
    fn keys(&self) -> Vec<String> {
        self.pages.iter().map(|page| page.id.clone()).collect()
    }

    fn resolve(&self, key: &str) -> PageFuture<'_> {
        let n = self.resolved.get();
        self.resolved.set(n + 1);
        let result = if n % 2 == 1 {
            Err(CorpusError::UnknownKey(key.to_string()))
        } else {
            self.pages
                .iter()
                .find(|page| page.id == key)
                .cloned()
                .ok_or_else(|| CorpusError::UnknownKey(key.to_string()))
        };
        async move { result }.boxed_local()
    }
}

#[test]
fn test_failed_pages_are_skipped_in_key_order() {
    let provider = FlakyProvider {
        pages: vec![
            make_page("a", "/a", "Alpha"),
            make_page("b", "/b", "Bravo"),
            make_page("c", "/c", "Charlie"),
        ],
        resolved: Cell::new(0),
    };
    let pages = block_on(load_corpus(&provider));
    assert_eq!(provider.resolved.get(), 3);
    let ids: Vec<_> = pages.iter().map(|page| page.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn test_provider_is_object_safe() {
    let records = vec![make_page("a", "/a", "Alpha")];
    let provider: &dyn CorpusProvider = &records;
    let index = block_on(load_index(provider));
    assert_eq!(index.len(), 1);

    let missing = block_on(provider.resolve("zzz"));
    assert!(matches!(missing, Err(CorpusError::UnknownKey(_))));
}
