//! A full search-and-select cycle against a mounted search box.

use docsift::testing::sample_corpus;
use docsift::{HotkeyOutcome, KeyTarget, NavKey, SearchBox, SearchConfig};
use futures::executor::block_on;

#[test]
fn test_type_navigate_select() {
    let mut search = SearchBox::new(SearchConfig::default());
    block_on(search.load(&sample_corpus()));

    assert_eq!(
        search.on_hotkey(".", KeyTarget::Body),
        HotkeyOutcome::FocusInput
    );

    search.set_query("wi");
    search.tick();
    assert!(search.view().suggestions.is_empty());
    assert!(!search.view().show_suggestions);

    search.set_query("wid");
    search.tick();
    let view = search.view();
    assert_eq!(view.suggestions.len(), 1);
    assert_eq!(view.suggestions[0].link, "/b");
    assert_eq!(view.suggestions[0].label(), "Widgets");
    assert!(view.show_suggestions);

    search.on_key(NavKey::Down);
    assert_eq!(search.view().focus_index, Some(0));

    let navigation = search.on_key(NavKey::Enter).unwrap();
    assert_eq!(navigation.path, "/b");

    let view = search.view();
    assert_eq!(view.query, "");
    assert!(view.suggestions.is_empty());
    assert_eq!(view.focus_index, None);
}

#[test]
fn test_no_results_then_refine() {
    let mut search = SearchBox::new(SearchConfig::default());
    block_on(search.load(&sample_corpus()));
    search.focus();

    search.set_query("zzz");
    search.tick();
    assert_eq!(search.view().suggestions.len(), 1);
    assert!(search.view().suggestions[0].is_sentinel());

    search.set_query("inst");
    search.tick();
    assert_eq!(search.view().suggestions[0].link, "/a");
    assert_eq!(search.view().suggestions[0].label(), "Install Guide");
}

#[test]
fn test_typing_before_corpus_loads() {
    let mut search = SearchBox::new(SearchConfig::default());
    search.focus();
    search.set_query("ins");
    search.tick();
    assert!(!search.is_ready());
    assert!(search.view().suggestions.is_empty());

    block_on(search.load(&sample_corpus()));
    search.tick();
    assert_eq!(search.view().suggestions[0].link, "/a");
}

#[test]
fn test_disabled_feature_is_inert() {
    let config = SearchConfig {
        enabled: false,
        ..SearchConfig::default()
    };
    let mut search = SearchBox::new(config);
    block_on(search.load(&sample_corpus()));
    assert_eq!(search.on_hotkey(".", KeyTarget::Body), HotkeyOutcome::Ignored);
    search.focus();
    search.set_query("wid");
    search.tick();
    assert_eq!(search.view().query, "");
    assert!(!search.view().show_suggestions);
}
