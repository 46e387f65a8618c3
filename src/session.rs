// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search session state machine.
//!
//! A session owns the query text, the visible suggestions, the keyboard/pointer
//! focus and whether the input has focus. It never runs queries itself: every
//! query change hands out a `QueryTicket` tagged with the current generation,
//! the host runs it whenever it likes, and hands the `QueryReply` back to
//! `resolve`. Only a reply whose generation is still current is applied.
//!
//! ```text
//!   set_query("wid") ──▶ ticket g=1 ──┐
//!   set_query("widg") ─▶ ticket g=2 ──┼──▶ run (any order) ──▶ resolve
//!                                     │                         │
//!                                     └── g=1 reply: dropped ◀──┤
//!                                         g=2 reply: applied ◀──┘
//! ```
//!
//! # Invariants
//!
//! - `suggestions` is non-empty only if the trimmed, lowercased query has at
//!   least `MIN_QUERY_LEN` characters.
//! - `focus_index` is `None` or `< suggestions.len()`.
//! - `generation` only ever increases. Every change of query text (including
//!   clearing it and the reset after a selection) advances it, so no reply
//!   issued before the change can be applied after it.
//!
//! Handlers are plain `&mut self` methods: the host event loop calls them one
//! at a time, so there is nothing to lock.

use crate::config::{SearchConfig, SentinelSelection};
use crate::index::SearchIndex;
use crate::search::{passes_length_gate, query};
use crate::types::SuggestionEntry;

/// A query the host should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub generation: u64,
    pub text: String,
    pub limit: usize,
}

impl QueryTicket {
    /// Run the query. An index that isn't ready yet matches nothing.
    pub fn run(&self, index: Option<&SearchIndex>) -> QueryReply {
        let suggestions = index
            .map(|index| query(index, &self.text, self.limit))
            .unwrap_or_default();
        QueryReply {
            generation: self.generation,
            suggestions,
        }
    }

    /// Run the query as a future, for hosts that schedule work on an executor.
    pub async fn run_async(self, index: Option<&SearchIndex>) -> QueryReply {
        self.run(index)
    }
}

/// The result of running a `QueryTicket`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryReply {
    pub generation: u64,
    pub suggestions: Vec<SuggestionEntry>,
}

/// Request for the router to navigate. Fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
}

/// Keys the input handles while suggestions are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
}

/// Where a key press originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTarget {
    /// The document body, i.e. nothing editable has focus.
    Body,
    /// An input, textarea or other editable element.
    Editable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyOutcome {
    /// Focus moved into the search input; the host should suppress the key's default action.
    FocusInput,
    Ignored,
}

/// Read-only state for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView<'a> {
    pub query: &'a str,
    pub suggestions: &'a [SuggestionEntry],
    pub focus_index: Option<usize>,
    pub is_focused: bool,
    /// `is_focused && !suggestions.is_empty()`
    pub show_suggestions: bool,
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    query_text: String,
    generation: u64,
    last_observed_query: String,
    suggestions: Vec<SuggestionEntry>,
    focus_index: Option<usize>,
    is_focused: bool,
    limit: usize,
    sentinel_selection: SentinelSelection,
    hotkeys: Vec<String>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(crate::search::DEFAULT_LIMIT, SentinelSelection::default())
    }
}

/// Construction and accessors.
impl SearchSession {
    pub fn new(limit: usize, sentinel_selection: SentinelSelection) -> Self {
        Self {
            query_text: String::new(),
            generation: 0,
            last_observed_query: String::new(),
            suggestions: Vec::new(),
            focus_index: None,
            is_focused: false,
            limit,
            sentinel_selection,
            hotkeys: vec![".".to_string()],
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            hotkeys: config.hotkeys.clone(),
            ..Self::new(config.limit, config.sentinel_selection)
        }
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn suggestions(&self) -> &[SuggestionEntry] {
        &self.suggestions
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.focus_index
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Suggestions are visible: the input has focus and there is something to show.
    pub fn is_showing(&self) -> bool {
        self.is_focused && !self.suggestions.is_empty()
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            query: &self.query_text,
            suggestions: &self.suggestions,
            focus_index: self.focus_index,
            is_focused: self.is_focused,
            show_suggestions: self.is_showing(),
        }
    }
}

/// Query dispatch.
impl SearchSession {
    /// Record new query text and, if it passes the length gate, issue a ticket for it.
    ///
    /// Text too short to search (including empty text) clears the suggestions
    /// right away; no query runs.
    pub fn set_query(&mut self, text: impl Into<String>) -> Option<QueryTicket> {
        let text = text.into();
        if text != self.last_observed_query {
            self.generation += 1;
            self.last_observed_query.clone_from(&text);
        }
        self.query_text = text;

        if !passes_length_gate(&self.query_text) {
            self.suggestions.clear();
            self.focus_index = None;
            return None;
        }

        Some(self.ticket())
    }

    /// Re-issue the current query under a fresh generation.
    ///
    /// Used when the index becomes ready after the user already typed.
    pub fn refresh(&mut self) -> Option<QueryTicket> {
        if !passes_length_gate(&self.query_text) {
            return None;
        }
        self.generation += 1;
        Some(self.ticket())
    }

    fn ticket(&self) -> QueryTicket {
        tracing::trace!(generation = self.generation, query = %self.query_text, "dispatching query");
        QueryTicket {
            generation: self.generation,
            text: self.query_text.clone(),
            limit: self.limit,
        }
    }

    /// Apply a reply if it belongs to the current generation.
    ///
    /// Returns whether the reply was applied. Stale replies are dropped no
    /// matter when they arrive.
    pub fn resolve(&mut self, reply: QueryReply) -> bool {
        if reply.generation != self.generation {
            tracing::trace!(
                stale = reply.generation,
                current = self.generation,
                "dropping stale query reply"
            );
            return false;
        }

        let mut suggestions = reply.suggestions;
        suggestions.truncate(self.limit);
        self.suggestions = suggestions;
        if self.focus_index.is_some_and(|i| i >= self.suggestions.len()) {
            self.focus_index = None;
        }
        true
    }
}

/// Focus and navigation.
impl SearchSession {
    pub fn focus(&mut self) {
        self.is_focused = true;
    }

    /// Hides the suggestions without clearing them.
    pub fn blur(&mut self) {
        self.is_focused = false;
    }

    /// Move focus down one entry, wrapping to the top.
    pub fn move_down(&mut self) {
        if !self.is_showing() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.focus_index = match self.focus_index {
            Some(i) if i < last => Some(i + 1),
            _ => Some(0),
        };
    }

    /// Move focus up one entry, wrapping to the bottom.
    pub fn move_up(&mut self) {
        if !self.is_showing() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.focus_index = match self.focus_index {
            Some(i) if i > 0 => Some(i - 1),
            _ => Some(last),
        };
    }

    /// Pointer entered entry `i`. Pointer and keyboard share one focus index.
    pub fn hover_focus(&mut self, i: usize) {
        if i < self.suggestions.len() {
            self.focus_index = Some(i);
        }
    }

    /// Pointer left the suggestion list.
    pub fn hover_clear(&mut self) {
        self.focus_index = None;
    }
}

/// Selection.
impl SearchSession {
    /// Select entry `i` (Enter on it, or a pointer press).
    ///
    /// Returns the navigation to perform and resets the session, or `None`
    /// when nothing is shown, `i` is out of range, or `i` is the sentinel and
    /// sentinel selection is inert.
    pub fn select(&mut self, i: usize) -> Option<Navigation> {
        if !self.is_showing() {
            return None;
        }
        let entry = self.suggestions.get(i)?;
        if entry.is_sentinel() && self.sentinel_selection == SentinelSelection::Inert {
            return None;
        }

        let navigation = Navigation {
            path: entry.path().to_string(),
        };
        self.reset();
        Some(navigation)
    }

    /// Select the focused entry, if any.
    pub fn select_focused(&mut self) -> Option<Navigation> {
        self.focus_index.and_then(|i| self.select(i))
    }

    pub fn on_key(&mut self, key: NavKey) -> Option<Navigation> {
        match key {
            NavKey::Up => {
                self.move_up();
                None
            }
            NavKey::Down => {
                self.move_down();
                None
            }
            NavKey::Enter => self.select_focused(),
        }
    }

    /// Global accelerator: a hotkey pressed on the page body focuses the input.
    pub fn on_hotkey(&mut self, key: &str, target: KeyTarget) -> HotkeyOutcome {
        let is_hotkey = self.hotkeys.iter().any(|hotkey| hotkey == key);
        if is_hotkey && target == KeyTarget::Body {
            self.focus();
            HotkeyOutcome::FocusInput
        } else {
            HotkeyOutcome::Ignored
        }
    }

    /// Clear everything a selection consumes. The generation moves forward so
    /// replies still in flight are dropped.
    fn reset(&mut self) {
        self.query_text.clear();
        self.last_observed_query.clear();
        self.generation += 1;
        self.suggestions.clear();
        self.focus_index = None;
    }
}
