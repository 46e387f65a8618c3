// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query execution: length gate, prefix matching, ranking, sentinel.
//!
//! Two tiers, borrowed from search-as-you-type UX: a document where a query
//! term equals a whole token (exact) beats one where the term only prefixes a
//! token. Within a tier, corpus order decides. No scores, no floats, so the
//! ranking is a total order and identical across runs and rebuilds.
//!
//! The empty/sentinel distinction matters to callers:
//!
//! | Result            | Meaning                                        |
//! |-------------------|------------------------------------------------|
//! | `[]`              | not searched: length gate, empty or unbuilt index |
//! | `[NoResults]`     | searched, nothing matched                      |
//! | `[Page, ...]`     | up to `cap` matches                            |

use crate::index::SearchIndex;
use crate::types::{DocId, FieldKind, SuggestionEntry};
use crate::utils::{normalize_query, query_terms};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Queries shorter than this (after trim + lowercase) never touch the index.
pub const MIN_QUERY_LEN: usize = 3;

/// Default result cap.
pub const DEFAULT_LIMIT: usize = 10;

/// How strongly a term hit a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// The term is a whole token.
    Exact,
    /// The term is a strict prefix of a token.
    Prefix,
}

/// A matched document before it is turned into a suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocMatch {
    pub doc_id: DocId,
    /// Number of query terms that hit a whole token.
    pub exact_terms: usize,
    /// Fields that produced a hit, in priority order.
    pub fields: Vec<FieldKind>,
}

impl DocMatch {
    pub fn tier(&self) -> MatchTier {
        if self.exact_terms > 0 {
            MatchTier::Exact
        } else {
            MatchTier::Prefix
        }
    }
}

/// True when `text` is long enough to be searched.
pub fn passes_length_gate(text: &str) -> bool {
    normalize_query(text).chars().count() >= MIN_QUERY_LEN
}

/// Per-document accumulator for one query.
#[derive(Default)]
struct Hit {
    terms_hit: usize,
    exact_terms: usize,
    fields: Vec<FieldKind>,
}

/// Find every document in which each query term prefixes some token.
///
/// Terms are ANDed; fields are ORed. The result is ranked: more exact terms
/// first, then ascending `DocId`.
pub fn search_documents(index: &SearchIndex, query: &str) -> Vec<DocMatch> {
    let terms = query_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut hits: BTreeMap<DocId, Hit> = BTreeMap::new();

    for (term_idx, term) in terms.iter().enumerate() {
        // Which docs this term hits, and whether exactly.
        let mut term_hits: BTreeMap<DocId, (bool, Vec<FieldKind>)> = BTreeMap::new();
        for (token, postings) in index.prefix_matches(term) {
            let exact = token == term;
            for posting in postings {
                let entry = term_hits.entry(posting.doc_id).or_default();
                entry.0 |= exact;
                if !entry.1.contains(&posting.field) {
                    entry.1.push(posting.field);
                }
            }
        }

        for (doc_id, (exact, fields)) in term_hits {
            // A doc missing an earlier term can never satisfy AND.
            if term_idx > 0 && !hits.contains_key(&doc_id) {
                continue;
            }
            let hit = hits.entry(doc_id).or_default();
            hit.terms_hit += 1;
            hit.exact_terms += usize::from(exact);
            for field in fields {
                if !hit.fields.contains(&field) {
                    hit.fields.push(field);
                }
            }
        }
    }

    let mut matches: Vec<DocMatch> = hits
        .into_iter()
        .filter(|(_, hit)| hit.terms_hit == terms.len())
        .map(|(doc_id, mut hit)| {
            hit.fields.sort();
            DocMatch {
                doc_id,
                exact_terms: hit.exact_terms,
                fields: hit.fields,
            }
        })
        .collect();

    matches.sort_by_key(|m| (Reverse(m.exact_terms), m.doc_id));
    matches
}

/// Run a query against the index and wrap the matches as suggestions.
///
/// Returns `[]` without touching the index when the query fails the length
/// gate, when the index has no documents, or when `cap` is zero. Returns the
/// single sentinel entry when the query was searched and nothing matched.
pub fn query(index: &SearchIndex, text: &str, cap: usize) -> Vec<SuggestionEntry> {
    if !passes_length_gate(text) || index.is_empty() || cap == 0 {
        return Vec::new();
    }

    let matches = search_documents(index, &normalize_query(text));
    if matches.is_empty() {
        return vec![SuggestionEntry::no_results()];
    }

    matches
        .iter()
        .filter_map(|m| index.document(m.doc_id))
        .take(cap)
        .map(|doc| SuggestionEntry::page(doc.record.clone()))
        .collect()
}
