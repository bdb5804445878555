// SPDX-License-Identifier: PMPL-1.0-or-later

//! Detail pane projection

use crate::catalog::Catalog;
use crate::types::DetailView;

/// Detail for one entry, or the cleared placeholder when the triple no
/// longer resolves.
pub fn select_entry(catalog: &Catalog, language: &str, category: &str, entry: &str) -> DetailView {
    match catalog.entry(language, category, entry) {
        Some(found) => DetailView {
            title: entry.to_string(),
            description: found.description.clone(),
            code: found.code.clone(),
        },
        None => {
            log::warn!("stale selection {language}/{category}/{entry}; clearing detail");
            DetailView::cleared()
        }
    }
}
