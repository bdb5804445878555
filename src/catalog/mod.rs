// SPDX-License-Identifier: PMPL-1.0-or-later

//! The cheat sheet catalog: language -> category -> entry.
//!
//! A catalog is built once (from the built-in content or a JSON/YAML file)
//! and never mutated afterwards. Every map keeps authoring order, which is
//! the order the front-ends display.

mod builtin;
mod loader;

pub use loader::{load_catalog, save_catalog, CatalogFormat};
pub(crate) use loader::load_json_or_yaml;

use crate::types::{Category, Entry, Language};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Language selected when no other choice is configured.
pub const DEFAULT_LANGUAGE: &str = "C++";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    languages: IndexMap<String, Language>,
}

impl Catalog {
    pub fn new(languages: IndexMap<String, Language>) -> Self {
        Self { languages }
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Language names in display order.
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn first_language(&self) -> Option<&str> {
        self.language_names().next()
    }

    pub fn contains_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    pub fn language(&self, language: &str) -> Option<&Language> {
        self.languages.get(language)
    }

    pub fn category(&self, language: &str, category: &str) -> Option<&Category> {
        self.language(language)?.get(category)
    }

    /// Look up one entry. `None` covers a stale triple left over from a
    /// language switch as well as names that never existed.
    pub fn entry(&self, language: &str, category: &str, entry: &str) -> Option<&Entry> {
        self.category(language, category)?.get(entry)
    }

    pub fn category_count(&self) -> usize {
        self.languages.values().map(IndexMap::len).sum()
    }

    pub fn entry_count(&self) -> usize {
        self.languages
            .values()
            .flat_map(IndexMap::values)
            .map(IndexMap::len)
            .sum()
    }

    /// Per-language `(name, categories, entries)` counts, in display order.
    pub fn summary(&self) -> Vec<(&str, usize, usize)> {
        self.languages
            .iter()
            .map(|(name, categories)| {
                let entries: usize = categories.values().map(IndexMap::len).sum();
                (name.as_str(), categories.len(), entries)
            })
            .collect()
    }
}

/// Incremental construction of a [`Catalog`] in authoring order.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    languages: IndexMap<String, Language>,
}

impl CatalogBuilder {
    /// Add an entry, creating its language and category on first use.
    /// Re-adding an existing name replaces the entry in place.
    pub fn entry(
        mut self,
        language: &str,
        category: &str,
        name: &str,
        entry: Entry,
    ) -> Self {
        self.languages
            .entry(language.to_string())
            .or_default()
            .entry(category.to_string())
            .or_default()
            .insert(name.to_string(), entry);
        self
    }

    pub fn build(self) -> Catalog {
        Catalog::new(self.languages)
    }
}
