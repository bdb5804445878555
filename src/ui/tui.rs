// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal front-end for browsing the cheat sheet

use crate::browser::{Browser, BrowserEvent, BrowserView};
use crate::types::{CategoryView, Target};
use anyhow::Result;
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use std::time::Duration;

pub struct BrowserTui;

impl BrowserTui {
    pub fn run(browser: &mut Browser) -> Result<()> {
        terminal::enable_raw_mode()?;
        let result = Self::run_inner(browser);
        terminal::disable_raw_mode()?;
        result
    }

    fn run_inner(browser: &mut Browser) -> Result<()> {
        let mut stdout = stdout();
        execute!(stdout, terminal::Clear(ClearType::All), cursor::Hide)?;
        let mut selected = 0;

        let result = loop {
            let rows = rows(&browser.render());
            selected = selected.min(rows.len().saturating_sub(1));
            sync_hover(browser, rows.get(selected), selected);

            let view = browser.view();
            Self::render(&mut stdout, &view, &rows, selected)?;

            if !event::poll(Duration::from_millis(200))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match handle_key(key, &view, &rows, selected) {
                KeyAction::Quit => break Ok(()),
                KeyAction::MoveTo(row) => selected = row,
                KeyAction::Dispatch(event) => browser.apply(event),
                KeyAction::Ignore => {}
            }
        };

        execute!(stdout, cursor::Show)?;
        result
    }

    fn render(
        stdout: &mut impl Write,
        view: &BrowserView,
        rows: &[Row],
        selected: usize,
    ) -> Result<()> {
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        line(stdout, &"CHEAT SHEET".bold().cyan().to_string())?;

        let languages: Vec<String> = view
            .languages
            .iter()
            .map(|language| {
                if *language == view.selected_language {
                    format!("[{}]", language).green().bold().to_string()
                } else {
                    format!(" {} ", language).dimmed().to_string()
                }
            })
            .collect();
        line(stdout, &languages.join(" "))?;
        line(stdout, &format!("Search: {}_", view.query))?;
        line(stdout, "")?;

        if rows.is_empty() {
            line(stdout, &"  No matches".dimmed().to_string())?;
        }
        for (idx, row) in rows.iter().enumerate() {
            let indicator = if idx == selected {
                "➤".green()
            } else {
                " ".normal()
            };
            let text = match &row.target {
                Target::Category { category } => {
                    let marker = if row.expanded { "▾" } else { "▸" };
                    format!(
                        "{} {} {}",
                        marker,
                        category.bold(),
                        format!("({})", row.entries).dimmed()
                    )
                }
                Target::Entry { entry, .. } => {
                    let name = if view.selection.as_ref() == Some(&row.target) {
                        entry.yellow().bold()
                    } else {
                        entry.normal()
                    };
                    format!("    {}", name)
                }
            };
            line(stdout, &format!("{} {}", indicator, text))?;
        }

        line(stdout, "")?;
        line(stdout, &view.detail.title.bold().yellow().to_string())?;
        if !view.detail.description.is_empty() {
            line(stdout, &view.detail.description)?;
        }
        for code in view.detail.code.lines() {
            line(stdout, &format!("  {}", code.cyan()))?;
        }
        if let Some(tip) = view.tooltip.text() {
            line(stdout, "")?;
            line(stdout, &format!("tip: {}", tip).dimmed().to_string())?;
        }

        line(stdout, "")?;
        line(
            stdout,
            &"Type to search, [Up/Down] Move, [Enter] Toggle/Show, [Tab] Language, [Esc] Clear/Quit"
                .dimmed()
                .to_string(),
        )?;
        stdout.flush()?;
        Ok(())
    }
}

/// Raw mode does not translate `\n`, so every line ends with `\r\n`.
fn line(stdout: &mut impl Write, text: &str) -> Result<()> {
    write!(stdout, "{}\r\n", text)?;
    Ok(())
}

/// One selectable line in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub target: Target,
    pub expanded: bool,
    /// Visible entries, for category rows.
    pub entries: usize,
}

/// Flatten rendered categories into rows; entries appear under open
/// categories only.
pub fn rows(categories: &[CategoryView]) -> Vec<Row> {
    let mut rows = Vec::new();
    for category in categories {
        rows.push(Row {
            target: Target::category(&category.name),
            expanded: category.is_expanded,
            entries: category.entries.len(),
        });
        if category.is_expanded {
            rows.extend(category.entries.iter().map(|entry| Row {
                target: Target::entry(&category.name, &entry.name),
                expanded: false,
                entries: 0,
            }));
        }
    }
    rows
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Quit,
    MoveTo(usize),
    Dispatch(BrowserEvent),
    Ignore,
}

pub fn handle_key(key: KeyEvent, view: &BrowserView, rows: &[Row], selected: usize) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('u') if ctrl => KeyAction::Dispatch(BrowserEvent::SetQuery(String::new())),
        KeyCode::Char(c) if !ctrl => {
            let mut query = view.query.clone();
            query.push(c);
            KeyAction::Dispatch(BrowserEvent::SetQuery(query))
        }
        KeyCode::Backspace => {
            let mut query = view.query.clone();
            if query.pop().is_none() {
                return KeyAction::Ignore;
            }
            KeyAction::Dispatch(BrowserEvent::SetQuery(query))
        }
        KeyCode::Esc if !view.query.is_empty() => {
            KeyAction::Dispatch(BrowserEvent::SetQuery(String::new()))
        }
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Down if !rows.is_empty() => KeyAction::MoveTo((selected + 1) % rows.len()),
        KeyCode::Up if !rows.is_empty() => {
            KeyAction::MoveTo((selected + rows.len() - 1) % rows.len())
        }
        KeyCode::Enter => rows
            .get(selected)
            .map(|row| KeyAction::Dispatch(BrowserEvent::Activate(row.target.clone())))
            .unwrap_or(KeyAction::Ignore),
        KeyCode::Tab => cycle_language(view, 1),
        KeyCode::BackTab => cycle_language(view, view.languages.len().saturating_sub(1)),
        _ => KeyAction::Ignore,
    }
}

fn cycle_language(view: &BrowserView, step: usize) -> KeyAction {
    let count = view.languages.len();
    if count < 2 {
        return KeyAction::Ignore;
    }
    let current = view
        .languages
        .iter()
        .position(|language| *language == view.selected_language)
        .unwrap_or(0);
    let next = view.languages[(current + step) % count].clone();
    KeyAction::Dispatch(BrowserEvent::SelectLanguage(next))
}

/// The cursor row stands in for the pointer: landing on an entry shows its
/// tip, landing anywhere else hides it.
fn sync_hover(browser: &mut Browser, row: Option<&Row>, selected: usize) {
    let pointer = (0.0, selected as f32);
    match row {
        Some(row) if matches!(row.target, Target::Entry { .. }) => {
            if browser.tooltip().hovered() == Some(&row.target) {
                browser.apply(BrowserEvent::HoverMove { pointer });
            } else {
                browser.apply(BrowserEvent::HoverEnter {
                    target: row.target.clone(),
                    pointer,
                });
            }
        }
        _ if browser.tooltip().is_visible() => browser.apply(BrowserEvent::HoverLeave),
        _ => {}
    }
}
