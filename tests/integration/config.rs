//! Mounting a search box from a config file.

use crate::common::{sample_index, write_file};
use docsift::{ConfigError, NavKey, SearchBox, SearchConfig, SentinelSelection};
use tempfile::TempDir;

#[test]
fn test_config_file_drives_search_box() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "search.json",
        r#"{ "placeholder": "Search docs", "limit": 1, "sentinelSelection": "inert" }"#,
    );
    let config = SearchConfig::from_path(&path).unwrap();
    assert_eq!(config.placeholder, "Search docs");
    assert_eq!(config.sentinel_selection, SentinelSelection::Inert);

    let mut search = SearchBox::new(config);
    search.install_index(sample_index());
    search.focus();

    search.set_query("zzz");
    search.tick();
    search.on_key(NavKey::Down);
    assert_eq!(search.on_key(NavKey::Enter), None);
    assert_eq!(search.view().query, "zzz");
}

#[test]
fn test_limit_from_config_caps_suggestions() {
    let config = SearchConfig::from_json_str(r#"{ "limit": 1 }"#).unwrap();
    let mut search = SearchBox::new(config);
    search.install_index(docsift::build_index(docsift::testing::docs_corpus()));
    search.focus();
    search.set_query("menu");
    search.tick();
    assert_eq!(search.view().suggestions.len(), 1);
}

#[test]
fn test_invalid_config_files() {
    let dir = TempDir::new().unwrap();
    let zero = write_file(dir.path(), "zero.json", r#"{ "limit": 0 }"#);
    assert!(matches!(
        SearchConfig::from_path(&zero),
        Err(ConfigError::InvalidLimit(0))
    ));
    assert!(matches!(
        SearchConfig::from_path(dir.path().join("missing.json")),
        Err(ConfigError::Io { .. })
    ));
}
