// SPDX-License-Identifier: PMPL-1.0-or-later

//! Browser view: owned state, one delegated event handler, pure rendering.
//!
//! Front-ends never touch [`ViewState`] directly. They draw a
//! [`BrowserView`], translate user input into [`BrowserEvent`]s (clicks and
//! hovers carry the [`Target`] attached to the rendered control) and hand
//! them to [`Browser::apply`]. Every event runs to completion before the
//! next one, and rendering is recomputed from scratch afterwards.

mod detail;
mod filter;
mod state;
mod tooltip;

pub use detail::select_entry;
pub use filter::{entry_matches, normalize_query, render, searchable_text};
pub use state::ViewState;
pub use tooltip::{Tooltip, POINTER_OFFSET};

use crate::catalog::{Catalog, DEFAULT_LANGUAGE};
use crate::types::{CategoryView, DetailView, Target};
use anyhow::{anyhow, bail, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum BrowserEvent {
    SelectLanguage(String),
    SetQuery(String),
    /// Click on a rendered control.
    Activate(Target),
    HoverEnter { target: Target, pointer: (f32, f32) },
    HoverMove { pointer: (f32, f32) },
    HoverLeave,
}

/// Everything a front-end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowserView {
    pub languages: Vec<String>,
    pub selected_language: String,
    pub query: String,
    pub categories: Vec<CategoryView>,
    pub detail: DetailView,
    pub selection: Option<Target>,
    pub tooltip: Tooltip,
}

impl BrowserView {
    pub fn visible_entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }
}

pub struct Browser {
    catalog: Catalog,
    state: ViewState,
    detail: DetailView,
    selection: Option<Target>,
    tooltip: Tooltip,
}

impl Browser {
    /// Attach to a catalog, starting on `initial_language` when given,
    /// otherwise on [`DEFAULT_LANGUAGE`] or the first language present.
    ///
    /// Fails when the catalog is empty or the requested language is absent.
    pub fn new(catalog: Catalog, initial_language: Option<&str>) -> Result<Self> {
        if catalog.is_empty() {
            bail!("catalog contains no languages");
        }
        let language = match initial_language {
            Some(language) if catalog.contains_language(language) => language.to_string(),
            Some(language) => {
                let known: Vec<&str> = catalog.language_names().collect();
                return Err(anyhow!(
                    "initial language {language:?} not in catalog (known: {})",
                    known.join(", ")
                ));
            }
            None if catalog.contains_language(DEFAULT_LANGUAGE) => DEFAULT_LANGUAGE.to_string(),
            None => catalog
                .first_language()
                .map(str::to_string)
                .ok_or_else(|| anyhow!("catalog contains no languages"))?,
        };
        log::debug!("browser starting on {language}");
        Ok(Self {
            catalog,
            state: ViewState::new(language),
            detail: DetailView::cleared(),
            selection: None,
            tooltip: Tooltip::default(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn render(&self) -> Vec<CategoryView> {
        render(&self.catalog, &self.state)
    }

    pub fn view(&self) -> BrowserView {
        BrowserView {
            languages: self.catalog.language_names().map(str::to_string).collect(),
            selected_language: self.state.selected_language().to_string(),
            query: self.state.query().to_string(),
            categories: self.render(),
            detail: self.detail.clone(),
            selection: self.selection.clone(),
            tooltip: self.tooltip.clone(),
        }
    }

    /// The single entry point for user input.
    pub fn apply(&mut self, event: BrowserEvent) {
        match event {
            BrowserEvent::SelectLanguage(language) => self.select_language(&language),
            BrowserEvent::SetQuery(query) => self.state.set_query(query),
            BrowserEvent::Activate(Target::Category { category }) => {
                let open = self.state.toggle(&category);
                log::debug!("toggled {category}: expanded={open}");
            }
            BrowserEvent::Activate(Target::Entry { category, entry }) => {
                self.select(&category, &entry)
            }
            BrowserEvent::HoverEnter { target, pointer } => self.hover(target, pointer),
            BrowserEvent::HoverMove { pointer } => self.tooltip.track(pointer),
            BrowserEvent::HoverLeave => self.tooltip.leave(),
        }
    }

    fn select_language(&mut self, language: &str) {
        if !self.catalog.contains_language(language) {
            log::warn!("ignoring unknown language {language:?}");
            return;
        }
        log::debug!("switching language to {language}");
        self.state.switch_language(language);
        self.detail = DetailView::cleared();
        self.selection = None;
        self.tooltip.leave();
    }

    fn select(&mut self, category: &str, entry: &str) {
        self.detail = select_entry(
            &self.catalog,
            self.state.selected_language(),
            category,
            entry,
        );
        self.selection = if self.detail.is_cleared() {
            None
        } else {
            Some(Target::entry(category, entry))
        };
    }

    fn hover(&mut self, target: Target, pointer: (f32, f32)) {
        let tip = match &target {
            Target::Entry { category, entry } => self
                .catalog
                .entry(self.state.selected_language(), category, entry)
                .map(|found| found.tip.clone()),
            Target::Category { .. } => None,
        };
        match tip {
            Some(tip) => self.tooltip.enter(target, tip, pointer),
            None => self.tooltip.leave(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Entry;

    fn e2e_catalog() -> Catalog {
        Catalog::builder()
            .entry("X", "Cat1", "foo", Entry::new("t1", "d1", "c1"))
            .entry("X", "Cat2", "bar", Entry::new("t2", "d2", "c2"))
            .build()
    }

    fn expansion(browser: &Browser) -> Vec<(String, bool)> {
        browser
            .render()
            .into_iter()
            .map(|view| (view.name, view.is_expanded))
            .collect()
    }

    #[test]
    fn empty_catalog_fails_fast() {
        assert!(Browser::new(Catalog::default(), None).is_err());
    }

    #[test]
    fn unknown_initial_language_fails_fast() {
        let err = Browser::new(e2e_catalog(), Some("Z"))
            .err()
            .expect("unknown language must fail");
        assert!(err.to_string().contains("\"Z\""));
    }

    #[test]
    fn falls_back_to_first_language() {
        let browser = Browser::new(e2e_catalog(), None).expect("browser builds");
        assert_eq!(browser.state().selected_language(), "X");
    }

    #[test]
    fn builtin_starts_on_default_language() {
        let browser = Browser::new(Catalog::builtin(), None).expect("browser builds");
        assert_eq!(browser.state().selected_language(), DEFAULT_LANGUAGE);
        assert!(browser.detail().is_cleared());
    }

    #[test]
    fn header_clicks_toggle_one_category() {
        let mut browser = Browser::new(e2e_catalog(), None).expect("browser builds");
        browser.apply(BrowserEvent::Activate(Target::category("Cat1")));
        assert_eq!(
            expansion(&browser),
            vec![("Cat1".into(), true), ("Cat2".into(), false)]
        );
        browser.apply(BrowserEvent::Activate(Target::category("Cat1")));
        assert_eq!(
            expansion(&browser),
            vec![("Cat1".into(), false), ("Cat2".into(), false)]
        );
    }

    #[test]
    fn toggles_survive_a_search() {
        let mut browser = Browser::new(e2e_catalog(), None).expect("browser builds");
        browser.apply(BrowserEvent::Activate(Target::category("Cat2")));
        browser.apply(BrowserEvent::SetQuery("t".into()));
        assert!(browser.render().iter().all(|view| view.is_expanded));
        browser.apply(BrowserEvent::SetQuery(String::new()));
        assert_eq!(
            expansion(&browser),
            vec![("Cat1".into(), false), ("Cat2".into(), true)]
        );
    }

    #[test]
    fn selecting_entry_leaves_list_alone() {
        let mut browser = Browser::new(e2e_catalog(), None).expect("browser builds");
        browser.apply(BrowserEvent::Activate(Target::category("Cat1")));
        let before = browser.render();
        browser.apply(BrowserEvent::Activate(Target::entry("Cat1", "foo")));
        assert_eq!(browser.detail().title, "foo");
        assert_eq!(browser.detail().description, "d1");
        assert_eq!(browser.detail().code, "c1");
        assert_eq!(browser.render(), before);
        assert_eq!(browser.view().selection, Some(Target::entry("Cat1", "foo")));
    }

    #[test]
    fn language_switch_clears_everything() {
        let mut browser = Browser::new(Catalog::builtin(), None).expect("browser builds");
        browser.apply(BrowserEvent::Activate(Target::category("Class Metadata")));
        browser.apply(BrowserEvent::SetQuery("class".into()));
        browser.apply(BrowserEvent::Activate(Target::entry(
            "Class Metadata",
            "il2cpp_class_from_name",
        )));
        browser.apply(BrowserEvent::SelectLanguage("C#".into()));

        let view = browser.view();
        assert_eq!(view.selected_language, "C#");
        assert_eq!(view.query, "");
        assert!(view.detail.is_cleared());
        assert_eq!(view.selection, None);
        assert!(view.categories.iter().all(|c| !c.is_expanded));
        assert_eq!(view.visible_entry_count(), 4);
    }

    #[test]
    fn unknown_language_is_ignored() {
        let mut browser = Browser::new(e2e_catalog(), None).expect("browser builds");
        browser.apply(BrowserEvent::SetQuery("foo".into()));
        browser.apply(BrowserEvent::SelectLanguage("Z".into()));
        assert_eq!(browser.state().selected_language(), "X");
        assert_eq!(browser.state().query(), "foo");
    }

    #[test]
    fn stale_entry_click_clears_detail() {
        let mut browser = Browser::new(e2e_catalog(), None).expect("browser builds");
        browser.apply(BrowserEvent::Activate(Target::entry("Cat1", "foo")));
        browser.apply(BrowserEvent::Activate(Target::entry("Cat1", "gone")));
        assert!(browser.detail().is_cleared());
        assert_eq!(browser.view().selection, None);
    }

    #[test]
    fn hover_shows_tip_of_hovered_entry() {
        let mut browser = Browser::new(e2e_catalog(), None).expect("browser builds");
        browser.apply(BrowserEvent::HoverEnter {
            target: Target::entry("Cat2", "bar"),
            pointer: (1.0, 1.0),
        });
        assert_eq!(browser.tooltip().text(), Some("t2"));
        browser.apply(BrowserEvent::HoverMove {
            pointer: (5.0, 6.0),
        });
        assert_eq!(
            browser.tooltip().position(),
            Some((5.0 + POINTER_OFFSET.0, 6.0 + POINTER_OFFSET.1))
        );
        browser.apply(BrowserEvent::HoverEnter {
            target: Target::category("Cat2"),
            pointer: (1.0, 1.0),
        });
        assert!(!browser.tooltip().is_visible());
        browser.apply(BrowserEvent::HoverEnter {
            target: Target::entry("Cat1", "foo"),
            pointer: (1.0, 1.0),
        });
        browser.apply(BrowserEvent::HoverLeave);
        assert_eq!(browser.tooltip().text(), None);
    }
}
