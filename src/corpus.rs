// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus provider interface and the JSON page-data adapter.
//!
//! The site generator exposes its pages as a keyed collection of lazily
//! resolved producers. `load_corpus` walks the keys once, awaits each producer
//! and collects the records; the index is built from the result. There is no
//! update channel: a corpus is loaded once per session.
//!
//! Futures here are `LocalBoxFuture`, not `Send`: everything runs on the one UI
//! thread.

use crate::error::CorpusError;
use crate::index::{build_index, SearchIndex};
use crate::types::PageRecord;
use futures::future::{self, FutureExt, LocalBoxFuture};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// A pending page record.
pub type PageFuture<'a> = LocalBoxFuture<'a, Result<PageRecord, CorpusError>>;

/// Supplies page records, each resolved on demand.
pub trait CorpusProvider {
    /// Keys of every page, in enumeration order.
    fn keys(&self) -> Vec<String>;

    /// Start resolving the page stored under `key`.
    fn resolve(&self, key: &str) -> PageFuture<'_>;
}

/// Await every page the provider knows about.
///
/// A page whose producer fails is skipped and logged; loading as a whole
/// cannot fail.
pub async fn load_corpus<P>(provider: &P) -> Vec<PageRecord>
where
    P: CorpusProvider + ?Sized,
{
    let keys = provider.keys();
    let mut pages = Vec::with_capacity(keys.len());

    for key in keys {
        match provider.resolve(&key).await {
            Ok(page) => pages.push(page),
            Err(err) => tracing::warn!(%key, error = %err, "skipping page"),
        }
    }

    tracing::debug!(pages = pages.len(), "corpus loaded");
    pages
}

/// Load the whole corpus, then build the index from it.
pub async fn load_index<P>(provider: &P) -> SearchIndex
where
    P: CorpusProvider + ?Sized,
{
    build_index(load_corpus(provider).await)
}

/// In-memory records are their own provider, keyed by page id.
impl CorpusProvider for [PageRecord] {
    fn keys(&self) -> Vec<String> {
        self.iter().map(|page| page.id.clone()).collect()
    }

    fn resolve(&self, key: &str) -> PageFuture<'_> {
        let page = self
            .iter()
            .find(|page| page.id == key)
            .cloned()
            .ok_or_else(|| CorpusError::UnknownKey(key.to_string()));
        future::ready(page).boxed_local()
    }
}

impl CorpusProvider for Vec<PageRecord> {
    fn keys(&self) -> Vec<String> {
        self.as_slice().keys()
    }

    fn resolve(&self, key: &str) -> PageFuture<'_> {
        self.as_slice().resolve(key)
    }
}

// =============================================================================
// JSON PAGE DATA
// =============================================================================

/// One heading as the site generator dumps it. Nested children are ignored.
#[derive(Deserialize, Clone, Debug)]
pub struct RawHeader {
    #[serde(default)]
    pub title: String,
}

/// Page data as dumped by the site generator.
#[derive(Deserialize, Clone, Debug)]
pub struct RawPage {
    pub key: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub title: String,
    /// Arbitrary frontmatter object; flattened to text for indexing.
    #[serde(default)]
    pub frontmatter: Value,
    #[serde(default)]
    pub headers: Vec<RawHeader>,
}

impl RawPage {
    /// Convert into a `PageRecord`. `header1..3` come from the first three headers.
    pub fn into_record(self) -> Result<PageRecord, CorpusError> {
        if self.path.trim().is_empty() {
            return Err(CorpusError::MissingPath(self.key));
        }

        let mut headers = self
            .headers
            .into_iter()
            .map(|header| Some(header.title).filter(|title| !title.trim().is_empty()));

        Ok(PageRecord {
            id: self.key,
            path: self.path,
            title: self.title,
            frontmatter: flatten_frontmatter(&self.frontmatter),
            header1: headers.next().flatten(),
            header2: headers.next().flatten(),
            header3: headers.next().flatten(),
        })
    }
}

/// Convert already-parsed pages, skipping (and logging) any that fail.
pub fn records_from_pages(pages: Vec<RawPage>) -> Vec<PageRecord> {
    pages
        .into_iter()
        .filter_map(|page| {
            let key = page.key.clone();
            match page.into_record() {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(%key, error = %err, "skipping page");
                    None
                }
            }
        })
        .collect()
}

/// Join the scalar leaves of a frontmatter value with spaces.
///
/// Object members are visited in key order, so the result is stable.
pub fn flatten_frontmatter(value: &Value) -> Option<String> {
    fn collect(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::Null => {}
            Value::Bool(b) => out.push(b.to_string()),
            Value::Number(n) => out.push(n.to_string()),
            Value::String(s) => {
                if !s.trim().is_empty() {
                    out.push(s.clone());
                }
            }
            Value::Array(items) => items.iter().for_each(|item| collect(item, out)),
            Value::Object(map) => map.values().for_each(|item| collect(item, out)),
        }
    }

    let mut parts = Vec::new();
    collect(value, &mut parts);
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Page data loaded from a JSON array dump.
#[derive(Debug, Clone, Default)]
pub struct JsonCorpus {
    pages: Vec<RawPage>,
}

impl JsonCorpus {
    pub fn from_json_str(json: &str) -> Result<Self, CorpusError> {
        let pages: Vec<RawPage> = serde_json::from_str(json)?;
        Ok(Self { pages })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl CorpusProvider for JsonCorpus {
    fn keys(&self) -> Vec<String> {
        self.pages.iter().map(|page| page.key.clone()).collect()
    }

    fn resolve(&self, key: &str) -> PageFuture<'_> {
        let result = self
            .pages
            .iter()
            .find(|page| page.key == key)
            .cloned()
            .ok_or_else(|| CorpusError::UnknownKey(key.to_string()))
            .and_then(RawPage::into_record);
        future::ready(result).boxed_local()
    }
}
