// SPDX-License-Identifier: PMPL-1.0-or-later

//! cheat-sheet: searchable API snippet browser
//!
//! Browse a nested language -> category -> entry catalog in the terminal or
//! a desktop window, or query it from the command line.

use anyhow::{bail, Result};
use cheat_sheet::browser::{Browser, BrowserEvent};
use cheat_sheet::catalog::{self, CatalogFormat};
use cheat_sheet::config::BrowserConfig;
use cheat_sheet::types::Target;
use cheat_sheet::ui::{BrowserGui, BrowserTui, SheetPrinter};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cheat-sheet")]
#[command(version)]
#[command(about = "Searchable, expandable cheat sheet of API snippets")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (JSON or YAML)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Catalog file to browse instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Language selected at startup
    #[arg(short, long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse in the terminal
    Tui,

    /// Browse in a desktop window
    Gui,

    /// Print the rendered category list for a query
    Render {
        /// Search text (case-insensitive)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Categories to open
        #[arg(short, long, value_delimiter = ',')]
        expand: Vec<String>,

        /// Emit the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the detail pane for one entry
    Show {
        #[arg(value_name = "CATEGORY")]
        category: String,

        #[arg(value_name = "ENTRY")]
        entry: String,

        /// Emit the detail as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalog languages with category and entry counts
    Languages,

    /// Write the catalog as JSON or YAML
    Export {
        /// Output format (default: from the output extension, else JSON)
        #[arg(short, long, value_enum)]
        format: Option<CatalogFormat>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load a catalog file and report what it contains
    Check {
        #[arg(value_name = "CATALOG")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BrowserConfig::load(path)?,
        None => BrowserConfig::default(),
    }
    .with_overrides(cli.lang, cli.catalog);

    let printer = SheetPrinter::new();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Tui => {
            let mut browser = config.build_browser()?;
            BrowserTui::run(&mut browser)?;
        }

        Commands::Gui => {
            BrowserGui::run(config.build_browser()?)?;
        }

        Commands::Render {
            query,
            expand,
            json,
        } => {
            let mut browser = config.build_browser()?;
            for category in expand {
                browser.apply(BrowserEvent::Activate(Target::category(category)));
            }
            browser.apply(BrowserEvent::SetQuery(query));
            let view = browser.view();
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&view.categories)?)?;
            } else {
                printer.write_view(&mut stdout, &view)?;
            }
        }

        Commands::Show {
            category,
            entry,
            json,
        } => {
            let mut browser = config.build_browser()?;
            let language = browser.state().selected_language().to_string();
            if browser.catalog().entry(&language, &category, &entry).is_none() {
                bail!("no entry {entry:?} in {language}/{category}");
            }
            browser.apply(BrowserEvent::Activate(Target::entry(category, entry)));
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(browser.detail())?)?;
            } else {
                printer.write_detail(&mut stdout, browser.detail())?;
            }
        }

        Commands::Languages => {
            printer.write_summary(&mut stdout, &config.load_catalog()?)?;
        }

        Commands::Export { format, output } => {
            let catalog = config.load_catalog()?;
            match output {
                Some(path) => {
                    let format = format.unwrap_or_else(|| CatalogFormat::from_path(&path));
                    catalog::save_catalog(&catalog, &path, format)?;
                    println!("Catalog saved to: {}", path.display());
                }
                None => {
                    let format = format.unwrap_or(CatalogFormat::Json);
                    writeln!(stdout, "{}", format.serialize(&catalog)?)?;
                }
            }
        }

        Commands::Check { path } => {
            let catalog = catalog::load_catalog(&path)?;
            // Same startup checks the interactive front-ends run.
            Browser::new(catalog.clone(), config.initial_language.as_deref())?;
            printer.write_summary(&mut stdout, &catalog)?;
        }
    }

    Ok(())
}
