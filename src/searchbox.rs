// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The mounted search feature: config, session and index in one place.
//!
//! `SearchBox` is what a UI layer talks to. It forwards events to the
//! `SearchSession`, queues the query tickets the session hands out, and runs
//! them on `tick()` against whatever index is installed at that moment.
//!
//! # Non-blocking usage
//!
//! - `set_query()`: records the text and queues a query
//! - `tick()`: runs queued queries, applies the freshest reply, drops the rest
//! - `view()`: what to render
//!
//! The index is usually built off to the side while the user may already be
//! typing:
//!
//! ```ignore
//! let mut search = SearchBox::new(SearchConfig::default());
//! search.set_query("wid");          // index not ready: resolves to nothing
//! search.tick();
//! let index = load_index(&corpus).await;
//! search.install_index(index);      // re-dispatches "wid"
//! search.tick();                    // suggestions now populated
//! ```

use crate::config::SearchConfig;
use crate::corpus::{load_index, CorpusProvider};
use crate::index::SearchIndex;
use crate::session::{
    HotkeyOutcome, KeyTarget, NavKey, Navigation, QueryTicket, SearchSession, SessionView,
};
use std::mem;

pub struct SearchBox {
    config: SearchConfig,
    session: SearchSession,
    index: Option<SearchIndex>,
    pending: Vec<QueryTicket>,
}

/// Create operations.
impl SearchBox {
    /// Mount the feature. `config.enabled` is fixed for the box's lifetime.
    pub fn new(config: SearchConfig) -> Self {
        let session = SearchSession::from_config(&config);
        Self {
            config,
            session,
            index: None,
            pending: Vec::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// True once an index has been installed.
    pub fn is_ready(&self) -> bool {
        self.index.is_some()
    }

    pub fn index(&self) -> Option<&SearchIndex> {
        self.index.as_ref()
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }
}

/// Index lifecycle.
impl SearchBox {
    /// Make the index available. If the user already typed a query, it is
    /// dispatched again so it runs against the new index.
    pub fn install_index(&mut self, index: SearchIndex) {
        tracing::debug!(documents = index.len(), "search index installed");
        self.index = Some(index);
        if self.config.enabled {
            if let Some(ticket) = self.session.refresh() {
                self.pending.push(ticket);
            }
        }
    }

    /// Load the corpus, build the index and install it.
    ///
    /// Holds `&mut self` until loading finishes. Hosts that must keep handling
    /// input meanwhile should call `load_index` and `install_index` separately.
    pub async fn load<P>(&mut self, provider: &P)
    where
        P: CorpusProvider + ?Sized,
    {
        let index = load_index(provider).await;
        self.install_index(index);
    }
}

/// Query operations.
impl SearchBox {
    pub fn set_query(&mut self, text: impl Into<String>) {
        if !self.config.enabled {
            return;
        }
        if let Some(ticket) = self.session.set_query(text) {
            self.pending.push(ticket);
        }
    }

    /// Number of queued queries not yet run.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Run every queued query and hand the replies to the session in queue
    /// order. Returns how many replies were applied; stale ones still run
    /// but are discarded.
    pub fn tick(&mut self) -> usize {
        let tickets = mem::take(&mut self.pending);
        let index = self.index.as_ref();
        let mut applied = 0;
        for ticket in tickets {
            if self.session.resolve(ticket.run(index)) {
                applied += 1;
            }
        }
        applied
    }
}

/// Event forwarding.
impl SearchBox {
    pub fn focus(&mut self) {
        if self.config.enabled {
            self.session.focus();
        }
    }

    pub fn blur(&mut self) {
        if self.config.enabled {
            self.session.blur();
        }
    }

    pub fn move_focus_up(&mut self) {
        if self.config.enabled {
            self.session.move_up();
        }
    }

    pub fn move_focus_down(&mut self) {
        if self.config.enabled {
            self.session.move_down();
        }
    }

    pub fn hover_focus(&mut self, i: usize) {
        if self.config.enabled {
            self.session.hover_focus(i);
        }
    }

    pub fn hover_clear(&mut self) {
        if self.config.enabled {
            self.session.hover_clear();
        }
    }

    pub fn select(&mut self, i: usize) -> Option<Navigation> {
        if !self.config.enabled {
            return None;
        }
        self.session.select(i)
    }

    pub fn select_focused(&mut self) -> Option<Navigation> {
        if !self.config.enabled {
            return None;
        }
        self.session.select_focused()
    }

    pub fn on_key(&mut self, key: NavKey) -> Option<Navigation> {
        if !self.config.enabled {
            return None;
        }
        self.session.on_key(key)
    }

    pub fn on_hotkey(&mut self, key: &str, target: KeyTarget) -> HotkeyOutcome {
        if !self.config.enabled {
            return HotkeyOutcome::Ignored;
        }
        self.session.on_hotkey(key, target)
    }

    pub fn view(&self) -> SessionView<'_> {
        self.session.view()
    }
}
