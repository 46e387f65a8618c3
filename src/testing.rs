//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::PageRecord;

/// Create a page with only the required fields.
pub fn make_page(id: &str, path: &str, title: &str) -> PageRecord {
    PageRecord {
        id: id.to_string(),
        path: path.to_string(),
        title: title.to_string(),
        ..PageRecord::default()
    }
}

/// Create a page whose first (up to three) headers fill `header1..3`.
pub fn make_page_with_headers(id: &str, path: &str, title: &str, headers: &[&str]) -> PageRecord {
    let mut headers = headers.iter().map(|h| Some(h.to_string()));
    PageRecord {
        header1: headers.next().flatten(),
        header2: headers.next().flatten(),
        header3: headers.next().flatten(),
        ..make_page(id, path, title)
    }
}

/// Create a page with frontmatter text.
pub fn make_page_with_frontmatter(id: &str, path: &str, title: &str, frontmatter: &str) -> PageRecord {
    PageRecord {
        frontmatter: Some(frontmatter.to_string()),
        ..make_page(id, path, title)
    }
}

/// The two-page corpus used in end-to-end scenarios.
pub fn sample_corpus() -> Vec<PageRecord> {
    vec![
        make_page("a", "/a", "Install Guide"),
        make_page("b", "/b", "Widgets"),
    ]
}

/// A small documentation-site corpus with every field kind represented.
pub fn docs_corpus() -> Vec<PageRecord> {
    vec![
        make_page_with_headers(
            "guides/gio/list-models",
            "/guides/gio/list-models.html",
            "List Models",
            &["GListModel", "GListStore", "Basic Usage"],
        ),
        make_page_with_headers(
            "guides/gio/actions-and-menus",
            "/guides/gio/actions-and-menus.html",
            "Actions and Menus",
            &["GAction", "GMenuModel", "Stateful Actions"],
        ),
        make_page_with_frontmatter(
            "extensions/topics/quick-settings",
            "/extensions/topics/quick-settings.html",
            "Quick Settings",
            "toggle slider indicator",
        ),
        make_page_with_headers(
            "extensions/topics/popup-menu",
            "/extensions/topics/popup-menu.html",
            "Popup Menu",
            &["PopupMenuItem", "PopupSwitchMenuItem", "PopupSubMenuMenuItem"],
        ),
        make_page("extensions/development/preferences", "/extensions/development/preferences.html", "Preferences"),
        make_page("guides/untitled", "/guides/untitled.html", ""),
    ]
}
