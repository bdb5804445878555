// SPDX-License-Identifier: PMPL-1.0-or-later

//! Query matching and the category list projection

use super::ViewState;
use crate::catalog::Catalog;
use crate::types::{CategoryView, Entry, EntryView};

/// Lower-cased query; the empty string matches everything.
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}

/// Name, tip and description joined with no separator, lower-cased.
pub fn searchable_text(name: &str, entry: &Entry) -> String {
    let mut text = String::with_capacity(name.len() + entry.tip.len() + entry.description.len());
    text.push_str(name);
    text.push_str(&entry.tip);
    text.push_str(&entry.description);
    text.to_lowercase()
}

/// `normalized` must already be lower-cased (see [`normalize_query`]).
pub fn entry_matches(name: &str, entry: &Entry, normalized: &str) -> bool {
    normalized.is_empty() || searchable_text(name, entry).contains(normalized)
}

/// Project the selected language into the list the front-ends draw.
///
/// Categories keep authoring order and are dropped entirely when no entry
/// matches. The result depends only on the catalog and the state, so
/// rendering twice without an intervening event gives the same list.
pub fn render(catalog: &Catalog, state: &ViewState) -> Vec<CategoryView> {
    let Some(language) = catalog.language(state.selected_language()) else {
        return Vec::new();
    };
    let normalized = normalize_query(state.query());

    language
        .iter()
        .filter_map(|(category, entries)| {
            let visible: Vec<EntryView> = entries
                .iter()
                .filter(|(name, entry)| entry_matches(name, entry, &normalized))
                .map(|(name, entry)| EntryView {
                    name: name.clone(),
                    tip: entry.tip.clone(),
                })
                .collect();
            if visible.is_empty() {
                return None;
            }
            Some(CategoryView {
                name: category.clone(),
                is_expanded: state.is_displayed_expanded(category),
                entries: visible,
            })
        })
        .collect()
}
