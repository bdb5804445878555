// SPDX-License-Identifier: PMPL-1.0-or-later

//! Plain console output for the non-interactive commands

use crate::browser::BrowserView;
use crate::catalog::Catalog;
use crate::types::DetailView;
use anyhow::Result;
use colored::*;
use std::io::Write;

pub struct SheetPrinter;

impl SheetPrinter {
    pub fn new() -> Self {
        Self
    }

    /// The rendered list: every shown category, with entries under the
    /// expanded ones.
    pub fn write_view(&self, out: &mut impl Write, view: &BrowserView) -> Result<()> {
        writeln!(out, "{}", view.selected_language.bold().cyan())?;
        if !view.query.is_empty() {
            writeln!(out, "  search: {}", view.query)?;
        }
        if view.categories.is_empty() {
            writeln!(out, "  {}", "No matches".dimmed())?;
            return Ok(());
        }
        for category in &view.categories {
            let marker = if category.is_expanded { "▾" } else { "▸" };
            writeln!(
                out,
                "  {} {} {}",
                marker,
                category.name.bold().yellow(),
                format!("({})", category.entries.len()).dimmed()
            )?;
            if !category.is_expanded {
                continue;
            }
            for entry in &category.entries {
                writeln!(out, "      {:32} {}", entry.name, entry.tip.dimmed())?;
            }
        }
        Ok(())
    }

    pub fn write_detail(&self, out: &mut impl Write, detail: &DetailView) -> Result<()> {
        writeln!(out, "{}", detail.title.bold().yellow())?;
        if !detail.description.is_empty() {
            writeln!(out, "{}", detail.description)?;
        }
        if !detail.code.is_empty() {
            writeln!(out)?;
            for line in detail.code.lines() {
                writeln!(out, "    {}", line.cyan())?;
            }
        }
        Ok(())
    }

    pub fn write_summary(&self, out: &mut impl Write, catalog: &Catalog) -> Result<()> {
        writeln!(out, "{}", "CATALOG".bold().cyan())?;
        for (language, categories, entries) in catalog.summary() {
            writeln!(
                out,
                "  {:16} {} categories, {} entries",
                language.bold(),
                categories,
                entries
            )?;
        }
        writeln!(
            out,
            "  {:16} {} categories, {} entries",
            "total",
            catalog.category_count(),
            catalog.entry_count()
        )?;
        Ok(())
    }
}

impl Default for SheetPrinter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{Browser, BrowserEvent};
    use crate::types::{Entry, Target};

    fn printed(write: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write(&mut out).expect("printing into a buffer");
        String::from_utf8(out).expect("utf-8 output")
    }

    fn browser() -> Browser {
        let catalog = Catalog::builder()
            .entry("X", "Cat1", "foo", Entry::new("t1", "d1", "c1"))
            .entry("X", "Cat2", "bar", Entry::new("t2", "d2", "line one\nline two"))
            .build();
        Browser::new(catalog, None).expect("browser builds")
    }

    #[test]
    fn collapsed_categories_list_counts_only() {
        let view = browser().view();
        let text = printed(|out| SheetPrinter::new().write_view(out, &view));
        assert!(text.contains("▸ Cat1 (1)"));
        assert!(!text.contains("foo"));
    }

    #[test]
    fn search_expands_and_lists_matches() {
        let mut browser = browser();
        browser.apply(BrowserEvent::SetQuery("BAR".into()));
        let view = browser.view();
        let text = printed(|out| SheetPrinter::new().write_view(out, &view));
        assert!(text.contains("search: BAR"));
        assert!(text.contains("▾ Cat2 (1)"));
        assert!(text.contains("bar"));
        assert!(!text.contains("Cat1"));
    }

    #[test]
    fn no_matches_is_reported() {
        let mut browser = browser();
        browser.apply(BrowserEvent::SetQuery("nothing".into()));
        let view = browser.view();
        let text = printed(|out| SheetPrinter::new().write_view(out, &view));
        assert!(text.contains("No matches"));
    }

    #[test]
    fn detail_prints_code_lines() {
        let mut browser = browser();
        browser.apply(BrowserEvent::Activate(Target::entry("Cat2", "bar")));
        let detail = browser.detail().clone();
        let text = printed(|out| SheetPrinter::new().write_detail(out, &detail));
        assert!(text.starts_with("bar\nd2\n"));
        assert!(text.contains("    line one\n    line two\n"));
    }

    #[test]
    fn summary_totals() {
        let catalog = Catalog::builtin();
        let text = printed(|out| SheetPrinter::new().write_summary(out, &catalog));
        assert!(text.contains("11 entries"));
    }
}
