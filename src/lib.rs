//! Incremental prefix search for a documentation site.
//!
//! The corpus is loaded once, indexed with forward (prefix) tokenization over
//! a page's title, frontmatter and first three headers, and then queried on
//! every keystroke. A session state machine owns the query text, suggestions
//! and focus, and discards results of superseded queries by generation number.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  corpus.rs  │────▶│  index.rs    │────▶│  search.rs  │────▶│  session.rs  │
//! │ (provider,  │     │ (build_index,│     │  (query,    │     │ (generation, │
//! │  JSON dump) │     │  prefix run) │     │  sentinel)  │     │  focus, nav) │
//! └─────────────┘     └──────────────┘     └─────────────┘     └──────────────┘
//!                                                                      │
//!                                                                      ▼
//!                                                              ┌──────────────┐
//!                                                              │ searchbox.rs │
//!                                                              │ (mount, tick)│
//!                                                              └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use docsift::{build_index, query, PageRecord, DEFAULT_LIMIT};
//!
//! let index = build_index(vec![
//!     PageRecord { id: "a".into(), path: "/a".into(), title: "Install Guide".into(), ..Default::default() },
//!     PageRecord { id: "b".into(), path: "/b".into(), title: "Widgets".into(), ..Default::default() },
//! ]);
//!
//! assert!(query(&index, "wi", DEFAULT_LIMIT).is_empty());
//! assert_eq!(query(&index, "wid", DEFAULT_LIMIT)[0].link, "/b");
//! assert_eq!(query(&index, "zzz", DEFAULT_LIMIT)[0].link, "#");
//! ```

pub mod config;
pub mod corpus;
pub mod error;
mod index;
mod search;
pub mod searchbox;
pub mod session;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{SearchConfig, SentinelSelection};
pub use corpus::{
    load_corpus, load_index, records_from_pages, CorpusProvider, JsonCorpus, PageFuture, RawPage,
};
pub use error::{ConfigError, CorpusError};
pub use index::{build_index, Posting, SearchIndex};
pub use search::{
    passes_length_gate, query, search_documents, DocMatch, MatchTier, DEFAULT_LIMIT, MIN_QUERY_LEN,
};
pub use searchbox::SearchBox;
pub use session::{
    HotkeyOutcome, KeyTarget, NavKey, Navigation, QueryReply, QueryTicket, SearchSession,
    SessionView,
};
pub use types::{
    DocId, FieldKind, IndexedDocument, PageRecord, Suggestion, SuggestionEntry, INDEXED_FIELDS,
    NO_RESULTS_LINK, NO_RESULTS_TITLE,
};
pub use utils::{normalize, normalize_query, query_terms, tokenize};
