// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Forward (prefix) index construction.
//!
//! The index is a sorted vocabulary of tokens with a posting list per token.
//! A query term matches every token it is a prefix of, and all of those sit in
//! one contiguous run of the sorted vocabulary, so prefix lookup is two binary
//! searches instead of materializing every prefix of every token.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **VOCABULARY_SORTED**: `vocabulary` is strictly increasing (sorted, no duplicates)
//! 2. **POSTINGS_ALIGNED**: `postings.len() == vocabulary.len()`, each list non-empty
//! 3. **POSTINGS_SORTED**: each posting list is sorted by `(doc_id, field)`
//! 4. **DOC_IDS_DENSE**: `docs[i].doc_id == DocId(i)`
//!
//! The index is never mutated after `build_index` returns. Rebuilding from the
//! same records produces an identical index.

use crate::types::{DocId, FieldKind, IndexedDocument, PageRecord, INDEXED_FIELDS};
use crate::utils::tokenize;
use std::collections::{BTreeMap, HashMap};
use std::ops::Range;

/// One occurrence of a token: which document, which field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Posting {
    pub doc_id: DocId,
    pub field: FieldKind,
}

/// Read-only searchable structure built once from the corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    docs: Vec<IndexedDocument>,
    vocabulary: Vec<String>,
    postings: Vec<Vec<Posting>>,
    by_id: HashMap<String, DocId>,
}

/// Build the index from page records.
///
/// Records are taken in corpus order, which fixes `DocId` assignment. A record
/// whose `id` was already seen replaces the earlier record in its slot.
pub fn build_index<I>(records: I) -> SearchIndex
where
    I: IntoIterator<Item = PageRecord>,
{
    let mut pages: Vec<PageRecord> = Vec::new();
    let mut by_id: HashMap<String, DocId> = HashMap::new();

    for record in records {
        match by_id.get(&record.id).copied() {
            Some(existing) => {
                tracing::warn!(id = %record.id, "duplicate page id; later record replaces earlier");
                pages[existing.as_usize()] = record;
            }
            None => {
                by_id.insert(record.id.clone(), DocId(pages.len() as u32));
                pages.push(record);
            }
        }
    }

    let mut terms: BTreeMap<String, Vec<Posting>> = BTreeMap::new();
    let docs: Vec<IndexedDocument> = pages
        .into_iter()
        .enumerate()
        .map(|(ordinal, record)| {
            let doc_id = DocId(ordinal as u32);
            let fields: Vec<(FieldKind, Vec<String>)> = INDEXED_FIELDS
                .iter()
                .filter_map(|&kind| record.field(kind).map(|text| (kind, tokenize(text))))
                .collect();

            for (field, tokens) in &fields {
                for token in tokens {
                    terms
                        .entry(token.clone())
                        .or_default()
                        .push(Posting { doc_id, field: *field });
                }
            }

            IndexedDocument {
                doc_id,
                record,
                fields,
            }
        })
        .collect();

    // Documents and fields are visited in order, so each posting list is
    // already sorted by (doc_id, field).
    let (vocabulary, postings): (Vec<String>, Vec<Vec<Posting>>) = terms.into_iter().unzip();

    tracing::debug!(
        documents = docs.len(),
        vocabulary = vocabulary.len(),
        "built search index"
    );

    SearchIndex {
        docs,
        vocabulary,
        postings,
        by_id,
    }
}

impl SearchIndex {
    /// Number of documents.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn document(&self, doc_id: DocId) -> Option<&IndexedDocument> {
        self.docs.get(doc_id.as_usize())
    }

    pub fn documents(&self) -> &[IndexedDocument] {
        &self.docs
    }

    /// Look up a document by its page id.
    pub fn get(&self, page_id: &str) -> Option<&IndexedDocument> {
        self.by_id.get(page_id).and_then(|&doc_id| self.document(doc_id))
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Range of vocabulary entries that start with `prefix`.
    pub fn prefix_range(&self, prefix: &str) -> Range<usize> {
        let start = self
            .vocabulary
            .partition_point(|token| token.as_str() < prefix);
        let len = self.vocabulary[start..].partition_point(|token| token.starts_with(prefix));
        start..start + len
    }

    /// Every `(token, postings)` pair whose token starts with `prefix`.
    pub fn prefix_matches<'a>(
        &'a self,
        prefix: &str,
    ) -> impl Iterator<Item = (&'a str, &'a [Posting])> + 'a {
        let range = self.prefix_range(prefix);
        self.vocabulary[range.clone()]
            .iter()
            .map(String::as_str)
            .zip(self.postings[range].iter().map(Vec::as_slice))
    }

    /// Total tokens per field across all documents, in priority order.
    pub fn field_token_counts(&self) -> Vec<(FieldKind, usize)> {
        INDEXED_FIELDS
            .iter()
            .map(|&kind| {
                let count = self.docs.iter().map(|doc| doc.tokens(kind).len()).sum();
                (kind, count)
            })
            .collect()
    }

    /// Check the structural invariants listed in the module docs.
    pub fn is_well_formed(&self) -> bool {
        let sorted = self.vocabulary.windows(2).all(|pair| pair[0] < pair[1]);
        let aligned = self.postings.len() == self.vocabulary.len()
            && self.postings.iter().all(|list| !list.is_empty());
        let postings_sorted = self
            .postings
            .iter()
            .all(|list| list.windows(2).all(|pair| pair[0] < pair[1]));
        let dense = self
            .docs
            .iter()
            .enumerate()
            .all(|(i, doc)| doc.doc_id.as_usize() == i);
        sorted && aligned && postings_sorted && dense
    }
}
