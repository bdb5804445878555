// SPDX-License-Identifier: PMPL-1.0-or-later

//! cheat-sheet — a searchable, expandable browser of API snippets.
//!
//! The catalog is a nested, ordered table keyed by language, category and
//! entry name. The browser turns it plus a small owned state (language,
//! query, opened categories) into render-ready projections.
//!
//! PIECES:
//! 1. **Catalog**: immutable content, built in or loaded from JSON/YAML.
//! 2. **Browser**: pure filtering/rendering and a single event handler for
//!    language switches, search, category toggles, selection and hover.
//! 3. **UI**: a crossterm terminal front-end, an egui desktop front-end and
//!    plain console printing, with a decorative snowfall behind the GUI.

pub mod browser;
pub mod catalog;
pub mod config;
pub mod snow;
pub mod types;
pub mod ui;
