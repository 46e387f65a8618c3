// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Line commands for `docsift session`.

use docsift::{KeyTarget, NavKey, Navigation, SearchBox};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Type(String),
    Nav(NavKey),
    Hover(usize),
    Leave,
    Select(usize),
    Focus,
    Blur,
    /// A key pressed on the page body.
    Key(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}: {line:?}")]
pub struct ParseError {
    pub line: String,
    pub reason: &'static str,
}

/// Parse one line. Blank lines and `#` comments yield `Ok(None)`.
///
/// `type` keeps everything after the first space verbatim, so `type` alone
/// clears the query and `type  wid` types `" wid"`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    if trimmed.trim().is_empty() || trimmed.trim_start().starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };
    let error = |reason| ParseError {
        line: trimmed.to_string(),
        reason,
    };
    let index = || rest.trim().parse::<usize>().map_err(|_| error("expected an index"));

    let command = match word {
        "type" => Command::Type(rest.to_string()),
        "down" => Command::Nav(NavKey::Down),
        "up" => Command::Nav(NavKey::Up),
        "enter" => Command::Nav(NavKey::Enter),
        "hover" => Command::Hover(index()?),
        "leave" => Command::Leave,
        "select" => Command::Select(index()?),
        "focus" => Command::Focus,
        "blur" => Command::Blur,
        "key" if !rest.is_empty() => Command::Key(rest.to_string()),
        "key" => return Err(error("expected a key")),
        _ => return Err(error("unknown command")),
    };
    Ok(Some(command))
}

/// Apply a command and run whatever query it queued.
pub fn apply(search: &mut SearchBox, command: Command) -> Option<Navigation> {
    let navigation = match command {
        Command::Type(text) => {
            search.set_query(text);
            None
        }
        Command::Nav(key) => search.on_key(key),
        Command::Hover(i) => {
            search.hover_focus(i);
            None
        }
        Command::Leave => {
            search.hover_clear();
            None
        }
        Command::Select(i) => search.select(i),
        Command::Focus => {
            search.focus();
            None
        }
        Command::Blur => {
            search.blur();
            None
        }
        Command::Key(key) => {
            search.on_hotkey(&key, KeyTarget::Body);
            None
        }
    };
    search.tick();
    navigation
}
