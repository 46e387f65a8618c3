//! Keyboard and pointer focus over the suggestion list.

use crate::common::{docs_index, focused_session, type_and_resolve};
use docsift::NavKey;

#[test]
fn test_down_wraps_to_top() {
    let index = docs_index();
    let mut session = focused_session();
    type_and_resolve(&mut session, &index, "menu");
    assert_eq!(session.suggestions().len(), 2);

    session.on_key(NavKey::Down);
    assert_eq!(session.focus_index(), Some(0));
    session.on_key(NavKey::Down);
    assert_eq!(session.focus_index(), Some(1));
    session.on_key(NavKey::Down);
    assert_eq!(session.focus_index(), Some(0));
}

#[test]
fn test_up_from_nothing_goes_to_bottom() {
    let index = docs_index();
    let mut session = focused_session();
    type_and_resolve(&mut session, &index, "menu");

    session.on_key(NavKey::Up);
    assert_eq!(session.focus_index(), Some(1));
    session.on_key(NavKey::Up);
    assert_eq!(session.focus_index(), Some(0));
    session.on_key(NavKey::Up);
    assert_eq!(session.focus_index(), Some(1));
}

#[test]
fn test_single_entry_stays_focused() {
    let index = docs_index();
    let mut session = focused_session();
    type_and_resolve(&mut session, &index, "zzz");
    assert_eq!(session.suggestions().len(), 1);

    session.move_down();
    session.move_down();
    assert_eq!(session.focus_index(), Some(0));
    session.move_up();
    assert_eq!(session.focus_index(), Some(0));
}

#[test]
fn test_navigation_ignored_while_hidden() {
    let index = docs_index();
    let mut session = focused_session();
    type_and_resolve(&mut session, &index, "menu");
    session.blur();
    assert!(!session.view().show_suggestions);

    session.move_down();
    assert_eq!(session.focus_index(), None);
}

#[test]
fn test_blur_keeps_suggestions_for_refocus() {
    let index = docs_index();
    let mut session = focused_session();
    type_and_resolve(&mut session, &index, "menu");
    session.blur();
    assert_eq!(session.suggestions().len(), 2);
    session.focus();
    assert!(session.view().show_suggestions);
}

#[test]
fn test_hover_and_keyboard_share_focus() {
    let index = docs_index();
    let mut session = focused_session();
    type_and_resolve(&mut session, &index, "menu");

    session.hover_focus(1);
    assert_eq!(session.focus_index(), Some(1));
    // Keyboard continues from where the pointer left focus.
    session.move_down();
    assert_eq!(session.focus_index(), Some(0));

    session.hover_clear();
    assert_eq!(session.focus_index(), None);
}

#[test]
fn test_hover_out_of_range_is_ignored() {
    let index = docs_index();
    let mut session = focused_session();
    type_and_resolve(&mut session, &index, "menu");
    session.hover_focus(0);
    session.hover_focus(7);
    assert_eq!(session.focus_index(), Some(0));
}

#[test]
fn test_shrinking_results_drop_stale_focus() {
    let index = docs_index();
    let mut session = focused_session();
    type_and_resolve(&mut session, &index, "menu");
    session.hover_focus(1);

    type_and_resolve(&mut session, &index, "menus");
    assert_eq!(session.suggestions().len(), 1);
    assert_eq!(session.focus_index(), None);
}
