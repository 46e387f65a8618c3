// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records the search feature moves around.
//!
//! A `PageRecord` comes from the corpus and is never mutated afterwards. The
//! index wraps each one in an `IndexedDocument` that remembers which fields
//! produced which tokens. Queries hand back `SuggestionEntry` values, which
//! either point at a page or are the "No results..." sentinel.
//!
//! # Invariants
//!
//! - **DocId**: `doc_id < index.len()`. Ids are dense and follow corpus order,
//!   which is what makes ranking ties deterministic.
//! - **SuggestionEntry**: `link == value.path()`. For the sentinel both are `"#"`.

use serde::{Deserialize, Serialize, Serializer};

/// Visible title of the sentinel entry.
pub const NO_RESULTS_TITLE: &str = "No results...";

/// Reserved no-op navigation path carried by the sentinel entry.
pub const NO_RESULTS_LINK: &str = "#";

// =============================================================================
// NEWTYPES
// =============================================================================

/// Dense document ordinal assigned at build time.
///
/// Corpus order is preserved, so `DocId(0)` is the first distinct page id the
/// corpus produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Create a new DocId, validating it's within bounds.
    #[inline]
    pub fn new(id: u32, num_docs: usize) -> Option<Self> {
        if (id as usize) < num_docs {
            Some(DocId(id))
        } else {
            None
        }
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// One of the text fields the index tokenizes.
///
/// The declaration order is the matching priority order. It is not a ranking
/// weight: a title hit and a header hit rank the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Title,
    Frontmatter,
    Header1,
    Header2,
    Header3,
}

/// Every indexed field, in priority order.
pub const INDEXED_FIELDS: [FieldKind; 5] = [
    FieldKind::Title,
    FieldKind::Frontmatter,
    FieldKind::Header1,
    FieldKind::Header2,
    FieldKind::Header3,
];

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Title => "title",
            FieldKind::Frontmatter => "frontmatter",
            FieldKind::Header1 => "header1",
            FieldKind::Header2 => "header2",
            FieldKind::Header3 => "header3",
        }
    }
}

// =============================================================================
// PAGE RECORDS
// =============================================================================

/// One page of the site, as supplied by the corpus provider.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    /// Unique, stable identity.
    pub id: String,
    /// Navigation target handed to the router on selection.
    pub path: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontmatter: Option<String>,
    /// First rendered sub-heading of the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header3: Option<String>,
}

impl PageRecord {
    /// Text of an indexed field, or `None` when the page doesn't carry it.
    ///
    /// An empty title counts as absent so it never produces tokens.
    pub fn field(&self, kind: FieldKind) -> Option<&str> {
        let value = match kind {
            FieldKind::Title => Some(self.title.as_str()),
            FieldKind::Frontmatter => self.frontmatter.as_deref(),
            FieldKind::Header1 => self.header1.as_deref(),
            FieldKind::Header2 => self.header2.as_deref(),
            FieldKind::Header3 => self.header3.as_deref(),
        };
        value.filter(|text| !text.trim().is_empty())
    }

    /// Label shown for this page in the suggestion list.
    ///
    /// Pages without a title fall back to their path.
    pub fn display_label(&self) -> &str {
        self.field(FieldKind::Title).unwrap_or(&self.path)
    }

    /// Headers whose text contains `query`, case-insensitively, in header order.
    ///
    /// Used to render the `> header` crumbs next to a suggestion.
    pub fn matching_headers(&self, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        [FieldKind::Header1, FieldKind::Header2, FieldKind::Header3]
            .into_iter()
            .filter_map(|kind| self.field(kind))
            .filter(|header| header.to_lowercase().contains(&needle))
            .collect()
    }
}

/// A page as stored in the index: the record plus the tokens each field produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedDocument {
    pub doc_id: DocId,
    pub record: PageRecord,
    /// `(field, tokens)` for every field present on the record, in priority order.
    pub fields: Vec<(FieldKind, Vec<String>)>,
}

impl IndexedDocument {
    pub fn tokens(&self, kind: FieldKind) -> &[String] {
        self.fields
            .iter()
            .find(|(field, _)| *field == kind)
            .map(|(_, tokens)| tokens.as_slice())
            .unwrap_or(&[])
    }

    pub fn token_count(&self) -> usize {
        self.fields.iter().map(|(_, tokens)| tokens.len()).sum()
    }
}

// =============================================================================
// SUGGESTIONS
// =============================================================================

/// What a suggestion points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    Page(PageRecord),
    /// "Search ran, nothing matched." Never produced before a search has run.
    NoResults,
}

impl Suggestion {
    pub fn title(&self) -> &str {
        match self {
            Suggestion::Page(page) => &page.title,
            Suggestion::NoResults => NO_RESULTS_TITLE,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Suggestion::Page(page) => &page.path,
            Suggestion::NoResults => NO_RESULTS_LINK,
        }
    }

    pub fn page(&self) -> Option<&PageRecord> {
        match self {
            Suggestion::Page(page) => Some(page),
            Suggestion::NoResults => None,
        }
    }
}

impl Serialize for Suggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Suggestion::Page(page) => page.serialize(serializer),
            Suggestion::NoResults => {
                use serde::ser::SerializeStruct;
                let mut state = serializer.serialize_struct("PageRecord", 2)?;
                state.serialize_field("title", NO_RESULTS_TITLE)?;
                state.serialize_field("path", NO_RESULTS_LINK)?;
                state.end()
            }
        }
    }
}

/// One row of the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionEntry {
    pub link: String,
    pub value: Suggestion,
}

impl SuggestionEntry {
    pub fn page(record: PageRecord) -> Self {
        Self {
            link: record.path.clone(),
            value: Suggestion::Page(record),
        }
    }

    pub fn no_results() -> Self {
        Self {
            link: NO_RESULTS_LINK.to_string(),
            value: Suggestion::NoResults,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self.value, Suggestion::NoResults)
    }

    pub fn title(&self) -> &str {
        self.value.title()
    }

    pub fn path(&self) -> &str {
        self.value.path()
    }

    /// Label for rendering; falls back to the path for untitled pages.
    pub fn label(&self) -> &str {
        match &self.value {
            Suggestion::Page(page) => page.display_label(),
            Suggestion::NoResults => NO_RESULTS_TITLE,
        }
    }
}
