// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search box.
//!
//! The JS side owns the DOM: it forwards input, focus, key and pointer events
//! to `DocSearch`, renders `view()`, and pushes the returned path to its
//! router. Queries are executed in the same event turn (`setQuery` ticks), so
//! the view is up to date as soon as the call returns.

use crate::config::SearchConfig;
use crate::corpus::{records_from_pages, RawPage};
use crate::index::build_index;
use crate::searchbox::SearchBox;
use crate::session::KeyTarget;
use crate::types::SuggestionEntry;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// One suggestion row for rendering.
/// Matches the Suggestion interface in searchBox.ts
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionOutput<'a> {
    link: &'a str,
    label: &'a str,
    /// Headers containing the query, shown as `> header` crumbs
    headers: Vec<&'a str>,
    is_sentinel: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewOutput<'a> {
    query: &'a str,
    placeholder: &'a str,
    suggestions: Vec<SuggestionOutput<'a>>,
    /// -1 when nothing is focused
    focus_index: i64,
    is_focused: bool,
    show_suggestions: bool,
}

fn suggestion_output<'a>(entry: &'a SuggestionEntry, query: &str) -> SuggestionOutput<'a> {
    SuggestionOutput {
        link: &entry.link,
        label: entry.label(),
        headers: entry
            .value
            .page()
            .map(|page| page.matching_headers(query))
            .unwrap_or_default(),
        is_sentinel: entry.is_sentinel(),
    }
}

/// WASM-accessible search box.
#[wasm_bindgen]
pub struct DocSearch {
    inner: SearchBox,
}

#[wasm_bindgen]
impl DocSearch {
    /// Mount the search box. `config` may be `undefined` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<DocSearch, JsValue> {
        let config: SearchConfig = if config.is_undefined() || config.is_null() {
            SearchConfig::default()
        } else {
            from_value(config).map_err(|e| e.to_string())?
        };
        config.validate().map_err(|e| e.to_string())?;
        Ok(DocSearch {
            inner: SearchBox::new(config),
        })
    }

    /// Build the index from resolved page data and install it.
    ///
    /// Pages that fail to convert are skipped. Returns the number of indexed documents.
    #[wasm_bindgen(js_name = loadPages)]
    pub fn load_pages(&mut self, pages: JsValue) -> Result<usize, JsValue> {
        let pages: Vec<RawPage> = from_value(pages).map_err(|e| e.to_string())?;
        let index = build_index(records_from_pages(pages));
        let documents = index.len();
        self.inner.install_index(index);
        self.inner.tick();
        Ok(documents)
    }

    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }

    #[wasm_bindgen(js_name = isEnabled)]
    pub fn is_enabled(&self) -> bool {
        self.inner.is_enabled()
    }

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, text: &str) {
        self.inner.set_query(text);
        self.inner.tick();
    }

    pub fn focus(&mut self) {
        self.inner.focus();
    }

    pub fn blur(&mut self) {
        self.inner.blur();
    }

    #[wasm_bindgen(js_name = moveFocusUp)]
    pub fn move_focus_up(&mut self) {
        self.inner.move_focus_up();
    }

    #[wasm_bindgen(js_name = moveFocusDown)]
    pub fn move_focus_down(&mut self) {
        self.inner.move_focus_down();
    }

    #[wasm_bindgen(js_name = hoverFocus)]
    pub fn hover_focus(&mut self, i: usize) {
        self.inner.hover_focus(i);
    }

    #[wasm_bindgen(js_name = hoverClear)]
    pub fn hover_clear(&mut self) {
        self.inner.hover_clear();
    }

    /// Select entry `i`. Returns the path to navigate to, or `undefined`.
    pub fn select(&mut self, i: usize) -> Option<String> {
        self.inner.select(i).map(|navigation| navigation.path)
    }

    /// Enter key: select the focused entry.
    #[wasm_bindgen(js_name = selectFocused)]
    pub fn select_focused(&mut self) -> Option<String> {
        self.inner.select_focused().map(|navigation| navigation.path)
    }

    /// Returns true when the caller should focus the input and `preventDefault()`.
    #[wasm_bindgen(js_name = onHotkey)]
    pub fn on_hotkey(&mut self, key: &str, target_is_body: bool) -> bool {
        let target = if target_is_body {
            KeyTarget::Body
        } else {
            KeyTarget::Editable
        };
        self.inner.on_hotkey(key, target) == crate::session::HotkeyOutcome::FocusInput
    }

    /// Current state for rendering.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        let view = self.inner.view();
        let output = ViewOutput {
            query: view.query,
            placeholder: &self.inner.config().placeholder,
            suggestions: view
                .suggestions
                .iter()
                .map(|entry| suggestion_output(entry, view.query))
                .collect(),
            focus_index: view.focus_index.map_or(-1, |i| i as i64),
            is_focused: view.is_focused,
            show_suggestions: view.show_suggestions,
        };
        to_value(&output).map_err(|e| e.to_string().into())
    }
}
