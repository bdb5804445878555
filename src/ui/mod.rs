// SPDX-License-Identifier: PMPL-1.0-or-later

//! Front-ends: terminal, desktop and plain console output

pub mod gui;
pub mod printer;
pub mod tui;

pub use gui::BrowserGui;
pub use printer::SheetPrinter;
pub use tui::BrowserTui;
