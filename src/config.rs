//! Search feature configuration.
//!
//! Everything here is fixed at startup and handed to `SearchBox::new`. The
//! parameters the search algorithm depends on (minimum query length, indexed
//! fields, prefix tokenization) are constants, not config.

use crate::error::ConfigError;
use crate::search::DEFAULT_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What selecting the "No results..." entry does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SentinelSelection {
    /// Navigate to `"#"` and reset the session, like any other entry.
    #[default]
    Navigate,
    /// Selecting the sentinel does nothing.
    Inert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Whether the search box is mounted at all. When false every event is ignored.
    pub enabled: bool,
    /// Placeholder text for the input.
    pub placeholder: String,
    /// Maximum number of suggestions.
    pub limit: usize,
    /// Keys that jump focus into the search input when pressed on the page body.
    pub hotkeys: Vec<String>,
    pub sentinel_selection: SentinelSelection,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            placeholder: String::new(),
            limit: DEFAULT_LIMIT,
            hotkeys: vec![".".to_string()],
            sentinel_selection: SentinelSelection::default(),
        }
    }
}

impl SearchConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == 0 {
            return Err(ConfigError::InvalidLimit(self.limit));
        }
        Ok(())
    }
}
