//! Errors for the edges of the crate: reading corpus dumps and config files.
//!
//! Searching and session handling never fail; see `search` and `session`.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain page records from a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no page with key '{0}'")]
    UnknownKey(String),

    #[error("page '{0}' has no path")]
    MissingPath(String),
}

/// Failure to load or validate a `SearchConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("limit must be at least 1, got {0}")]
    InvalidLimit(usize),
}
