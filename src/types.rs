// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for cheat-sheet
//!
//! The catalog stores [`Entry`] values under ordered string keys; the view
//! types below are the render-ready projections consumed by the terminal
//! and desktop front-ends.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Title shown in the detail pane while nothing is selected.
pub const CLEARED_TITLE: &str = "Select a method";

/// One documented API item. The entry's name is its key in the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Short hover text.
    pub tip: String,
    /// Longer text for the detail pane. `desc` is accepted when reading.
    #[serde(alias = "desc")]
    pub description: String,
    /// Code sample, shown verbatim.
    pub code: String,
}

impl Entry {
    pub fn new(
        tip: impl Into<String>,
        description: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            tip: tip.into(),
            description: description.into(),
            code: code.into(),
        }
    }
}

/// Entry name -> entry, in authoring order.
pub type Category = IndexMap<String, Entry>;

/// Category name -> category, in authoring order.
pub type Language = IndexMap<String, Category>;

/// A category as it appears in the rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryView {
    pub name: String,
    pub is_expanded: bool,
    pub entries: Vec<EntryView>,
}

/// An entry button in the rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryView {
    pub name: String,
    pub tip: String,
}

/// Contents of the detail pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailView {
    pub title: String,
    pub description: String,
    pub code: String,
}

impl DetailView {
    /// The placeholder shown before any selection and after a language switch.
    pub fn cleared() -> Self {
        Self {
            title: CLEARED_TITLE.to_string(),
            description: String::new(),
            code: String::new(),
        }
    }

    pub fn is_cleared(&self) -> bool {
        *self == Self::cleared()
    }
}

impl Default for DetailView {
    fn default() -> Self {
        Self::cleared()
    }
}

/// Control a pointer or cursor can land on. Rendered rows carry one of
/// these so a single handler can dispatch clicks and hovers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Target {
    Category { category: String },
    Entry { category: String, entry: String },
}

impl Target {
    pub fn category(name: impl Into<String>) -> Self {
        Target::Category {
            category: name.into(),
        }
    }

    pub fn entry(category: impl Into<String>, entry: impl Into<String>) -> Self {
        Target::Entry {
            category: category.into(),
            entry: entry.into(),
        }
    }

    pub fn category_name(&self) -> &str {
        match self {
            Target::Category { category } | Target::Entry { category, .. } => category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_reads_desc_alias() {
        let entry: Entry =
            serde_json::from_str(r#"{"tip":"t","desc":"d","code":"c"}"#).expect("entry parses");
        assert_eq!(entry, Entry::new("t", "d", "c"));
    }

    #[test]
    fn entry_requires_every_field() {
        let missing_code = serde_json::from_str::<Entry>(r#"{"tip":"t","description":"d"}"#);
        assert!(missing_code.is_err());
    }

    #[test]
    fn empty_strings_are_allowed() {
        let entry: Entry = serde_json::from_str(r#"{"tip":"","description":"","code":""}"#)
            .expect("empty fields are valid");
        assert!(entry.tip.is_empty());
    }

    #[test]
    fn cleared_detail_uses_placeholder_title() {
        let detail = DetailView::default();
        assert_eq!(detail.title, CLEARED_TITLE);
        assert!(detail.description.is_empty());
        assert!(detail.code.is_empty());
        assert!(detail.is_cleared());
    }
}
