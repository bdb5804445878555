// SPDX-License-Identifier: PMPL-1.0-or-later

//! Owned view state: selected language, query and stored expansion toggles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    selected_language: String,
    query: String,
    /// Categories the user has opened in the selected language. Only the
    /// stored toggles live here; an active query forces every shown
    /// category open without touching this set.
    expanded: BTreeSet<String>,
}

impl ViewState {
    pub fn new(selected_language: impl Into<String>) -> Self {
        Self {
            selected_language: selected_language.into(),
            query: String::new(),
            expanded: BTreeSet::new(),
        }
    }

    pub fn selected_language(&self) -> &str {
        &self.selected_language
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Switch language, resetting the query and every stored toggle.
    pub fn switch_language(&mut self, language: impl Into<String>) {
        self.selected_language = language.into();
        self.query.clear();
        self.expanded.clear();
    }

    /// Flip the stored state of one category. Returns the new stored state.
    pub fn toggle(&mut self, category: &str) -> bool {
        if self.expanded.remove(category) {
            false
        } else {
            self.expanded.insert(category.to_string());
            true
        }
    }

    pub fn is_stored_expanded(&self, category: &str) -> bool {
        self.expanded.contains(category)
    }

    /// What the list shows for a category: open while searching, otherwise
    /// whatever the user last toggled.
    pub fn is_displayed_expanded(&self, category: &str) -> bool {
        self.has_query() || self.is_stored_expanded(category)
    }

    pub fn expanded(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}
