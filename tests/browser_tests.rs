// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests for searching, toggling and selecting

use cheat_sheet::browser::{render, Browser, BrowserEvent, ViewState};
use cheat_sheet::catalog::Catalog;
use cheat_sheet::types::{CategoryView, DetailView, Entry, EntryView, Target, CLEARED_TITLE};

fn e2e_catalog() -> Catalog {
    Catalog::builder()
        .entry("X", "Cat1", "foo", Entry::new("t1", "d1", "c1"))
        .entry("X", "Cat2", "bar", Entry::new("t2", "d2", "c2"))
        .build()
}

fn browser() -> Browser {
    Browser::new(e2e_catalog(), Some("X")).expect("browser should attach")
}

fn shown(browser: &Browser) -> Vec<(String, bool)> {
    browser
        .render()
        .into_iter()
        .map(|view| (view.name, view.is_expanded))
        .collect()
}

#[test]
fn test_empty_query_shows_all_collapsed() {
    let browser = browser();
    assert_eq!(
        shown(&browser),
        vec![("Cat1".to_string(), false), ("Cat2".to_string(), false)]
    );
}

#[test]
fn test_query_shows_only_matching_category_expanded() {
    let mut browser = browser();
    browser.apply(BrowserEvent::SetQuery("bar".into()));
    assert_eq!(
        browser.render(),
        vec![CategoryView {
            name: "Cat2".into(),
            is_expanded: true,
            entries: vec![EntryView {
                name: "bar".into(),
                tip: "t2".into(),
            }],
        }]
    );
}

#[test]
fn test_header_click_toggles_one_category() {
    let mut browser = browser();
    browser.apply(BrowserEvent::Activate(Target::category("Cat1")));
    assert_eq!(
        shown(&browser),
        vec![("Cat1".to_string(), true), ("Cat2".to_string(), false)]
    );
    browser.apply(BrowserEvent::Activate(Target::category("Cat1")));
    assert_eq!(
        shown(&browser),
        vec![("Cat1".to_string(), false), ("Cat2".to_string(), false)]
    );
}

#[test]
fn test_selecting_entry_fills_detail() {
    let mut browser = browser();
    assert_eq!(browser.detail(), &DetailView::cleared());
    assert_eq!(browser.detail().title, CLEARED_TITLE);

    browser.apply(BrowserEvent::Activate(Target::entry("Cat1", "foo")));
    assert_eq!(
        browser.detail(),
        &DetailView {
            title: "foo".into(),
            description: "d1".into(),
            code: "c1".into(),
        }
    );
}

#[test]
fn test_uppercase_query_matches() {
    let mut browser = browser();
    browser.apply(BrowserEvent::SetQuery("D1".into()));
    let views = browser.render();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].entries[0].name, "foo");
}

#[test]
fn test_search_forces_open_regardless_of_toggles() {
    let catalog = Catalog::builtin();
    let mut state = ViewState::new("C++");
    state.toggle("Domain & Threads");
    state.set_query("il2cpp");
    let views = render(&catalog, &state);
    assert!(!views.is_empty());
    assert!(views.iter().all(|view| view.is_expanded));
}

#[test]
fn test_toggling_one_category_leaves_others() {
    let catalog = Catalog::builtin();
    let names: Vec<String> = catalog
        .language("C++")
        .expect("C++ exists")
        .keys()
        .cloned()
        .collect();
    for toggled in &names {
        let mut state = ViewState::new("C++");
        for other in names.iter().step_by(2) {
            state.toggle(other);
        }
        let before: Vec<bool> = names.iter().map(|n| state.is_stored_expanded(n)).collect();
        state.toggle(toggled);
        for (idx, name) in names.iter().enumerate() {
            if name == toggled {
                assert_ne!(state.is_stored_expanded(name), before[idx]);
            } else {
                assert_eq!(state.is_stored_expanded(name), before[idx]);
            }
        }
    }
}

#[test]
fn test_render_is_repeatable() {
    let mut browser = Browser::new(Catalog::builtin(), None).expect("browser should attach");
    browser.apply(BrowserEvent::Activate(Target::category("Assembly & Image")));
    assert_eq!(browser.render(), browser.render());
    browser.apply(BrowserEvent::SetQuery("Used".into()));
    assert_eq!(browser.render(), browser.render());
}

#[test]
fn test_no_match_is_empty_not_error() {
    let mut browser = browser();
    browser.apply(BrowserEvent::SetQuery("no such thing".into()));
    assert!(browser.render().is_empty());
    assert_eq!(browser.view().visible_entry_count(), 0);
}

#[test]
fn test_language_switch_resets_view() {
    let mut browser = Browser::new(Catalog::builtin(), None).expect("browser should attach");
    browser.apply(BrowserEvent::Activate(Target::category("Class Metadata")));
    browser.apply(BrowserEvent::Activate(Target::entry(
        "Class Metadata",
        "il2cpp_class_get_methods",
    )));
    browser.apply(BrowserEvent::SetQuery("class".into()));
    browser.apply(BrowserEvent::SelectLanguage("C#".into()));

    assert_eq!(browser.state().query(), "");
    assert!(browser.detail().is_cleared());
    let names: Vec<String> = shown(&browser).into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Unity Lifecycle", "Input & Time"]);
    assert!(shown(&browser).iter().all(|(_, open)| !open));

    browser.apply(BrowserEvent::SelectLanguage("C++".into()));
    assert!(
        shown(&browser).iter().all(|(_, open)| !open),
        "toggles from before the switch must not come back"
    );
}
