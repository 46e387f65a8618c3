//! Selecting a suggestion navigates and resets the session.

use crate::common::{docs_index, focused_session, resolve_late, sample_index, type_and_resolve};
use docsift::{NavKey, SearchSession, SentinelSelection, DEFAULT_LIMIT};

#[test]
fn test_enter_on_focused_entry_navigates() {
    let index = docs_index();
    let mut session = focused_session();
    type_and_resolve(&mut session, &index, "menu");
    session.on_key(NavKey::Down);
    session.on_key(NavKey::Down);

    let navigation = session.on_key(NavKey::Enter).unwrap();
    assert_eq!(navigation.path, "/extensions/topics/popup-menu.html");
}

#[test]
fn test_selection_resets_session() {
    let index = docs_index();
    let mut session = focused_session();
    type_and_resolve(&mut session, &index, "menu");
    let before = session.generation();

    session.select(0).unwrap();
    assert_eq!(session.query_text(), "");
    assert!(session.suggestions().is_empty());
    assert_eq!(session.focus_index(), None);
    assert!(session.generation() > before);
    // The input keeps focus.
    assert!(session.is_focused());
}

#[test]
fn test_reply_in_flight_at_selection_is_dropped() {
    let index = sample_index();
    let mut session = focused_session();
    type_and_resolve(&mut session, &index, "wid");
    let in_flight = session.set_query("widg").unwrap();
    type_and_resolve(&mut session, &index, "widge");

    session.select(0).unwrap();
    assert!(!resolve_late(&mut session, &index, in_flight));
    assert!(session.suggestions().is_empty());
}

#[test]
fn test_enter_without_focus_does_nothing() {
    let index = docs_index();
    let mut session = focused_session();
    type_and_resolve(&mut session, &index, "menu");
    assert_eq!(session.on_key(NavKey::Enter), None);
    assert_eq!(session.query_text(), "menu");
}

#[test]
fn test_select_while_hidden_does_nothing() {
    let index = docs_index();
    let mut session = focused_session();
    type_and_resolve(&mut session, &index, "menu");
    session.blur();
    assert_eq!(session.select(0), None);
    assert_eq!(session.select(5), None);
}

#[test]
fn test_sentinel_navigates_by_default() {
    let index = docs_index();
    let mut session = focused_session();
    type_and_resolve(&mut session, &index, "zzz");
    assert_eq!(session.select(0).unwrap().path, "#");
    assert_eq!(session.query_text(), "");
}

#[test]
fn test_inert_sentinel_keeps_state() {
    let index = docs_index();
    let mut session = SearchSession::new(DEFAULT_LIMIT, SentinelSelection::Inert);
    session.focus();
    type_and_resolve(&mut session, &index, "zzz");
    session.move_down();

    assert_eq!(session.on_key(NavKey::Enter), None);
    assert_eq!(session.query_text(), "zzz");
    assert_eq!(session.suggestions().len(), 1);
    assert_eq!(session.focus_index(), Some(0));
}
