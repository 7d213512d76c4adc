//! quicksearch: command-line interface for quicksearch-core
//!
//! This binary searches the bundled dataset (NATO phonetic alphabet and the
//! numbers zero to one hundred) from your terminal, highlights every match
//! and keeps a recent-search history on disk.
//!
//! Usage examples
//! --------------
//!
//! - Show the dataset or its stats
//!   $ quicksearch sections
//!   $ quicksearch stats
//!
//! - Search (case-insensitive) and remember the query
//!   $ quicksearch search one --record
//!
//! - Manage recent searches
//!   $ quicksearch history list
//!   $ quicksearch history remove 0
//!
//! - Interactive session (type queries, `:help` for commands)
//!   $ quicksearch interactive
//!
//! Storage
//! -------
//!
//! Recent searches live under the `RecentSearches` key of a JSON settings
//! file, by default in the platform data directory. Use `--store <path>` or
//! `QUICKSEARCH_STORE` to point somewhere else.
mod args;

use crate::args::{CliArgs, Commands, HistoryAction};
use anyhow::Context;
use clap::Parser;
use quicksearch_cli::render::{render_recent, render_row, Style};
use quicksearch_core::prelude::*;
use quicksearch_core::store::default_store_path;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(feature = "transliterate")]
fn fold_mode(args: &CliArgs) -> FoldMode {
    if args.transliterate {
        FoldMode::Transliterate
    } else {
        FoldMode::CaseInsensitive
    }
}

#[cfg(not(feature = "transliterate"))]
fn fold_mode(_args: &CliArgs) -> FoldMode {
    FoldMode::CaseInsensitive
}

fn print_results(view: &ResultsView, style: Style) {
    for (index, section) in view.sections().iter().enumerate() {
        println!("{}:", section.title);
        for row in view.rows(index).unwrap_or_default() {
            println!("  {}", render_row(&row, style));
        }
    }
}

fn print_history<S: SettingsStore>(history: &mut RecentSearchHistory<S>) -> Result<()> {
    let list = history.list()?;
    if list.is_empty() {
        println!("No recent searches");
    }
    for (index, term) in list.iter().enumerate() {
        println!("{}", render_recent(index, term));
    }
    Ok(())
}

fn interactive<S: SettingsStore>(
    session: &mut SearchSession<'_, S, ResultsView>,
    style: Style,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("Type a query, or :recent, :pick <n>, :delete <n>, :quit");

    loop {
        print!("search> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        let mut words = line.split_whitespace();

        match words.next() {
            Some(":quit") | Some(":q") => break,
            Some(":help") => println!(":recent  :pick <n>  :delete <n>  :quit"),
            Some(":recent") => {
                session.handle(InputEvent::SearchBegan)?;
                let visible = session.visible_list()?;
                for section in &visible {
                    println!("{}:", section.title);
                    for (index, term) in section.items.iter().enumerate() {
                        println!("{}", render_recent(index, term));
                    }
                }
                session.handle(InputEvent::SearchCancelled)?;
            }
            Some(cmd @ (":pick" | ":delete")) => {
                let Some(index) = words.next().and_then(|w| w.parse::<usize>().ok()) else {
                    eprintln!("usage: {cmd} <index>");
                    continue;
                };
                let outcome = if cmd == ":pick" {
                    session.handle(InputEvent::SearchBegan)?;
                    session.handle(InputEvent::SelectRecent(index))
                } else {
                    session.handle(InputEvent::DeleteRecent(index))
                };
                match outcome {
                    Ok(()) if cmd == ":pick" => print_results(session.results(), style),
                    Ok(()) => println!("Removed entry {index}"),
                    // A bad index from the prompt is a typo, not a crash.
                    Err(e @ SearchError::IndexOutOfRange { .. }) => eprintln!("{e}"),
                    Err(e) => return Err(e.into()),
                }
                if session.mode() == Mode::Searching {
                    session.handle(InputEvent::SearchCancelled)?;
                }
            }
            _ => {
                session.handle(InputEvent::SearchBegan)?;
                session.handle(InputEvent::QueryChanged(line.to_string()))?;
                print_results(session.results(), style);
                session.handle(InputEvent::QuerySubmitted)?;
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let store_path = args.store.clone().unwrap_or_else(default_store_path);
    let config = SearchConfig {
        history: HistoryConfig::with_capacity(args.capacity),
        fold_mode: fold_mode(&args),
    };
    let style = if args.plain { Style::Plain } else { Style::Ansi };
    tracing::debug!(store = %store_path.display(), ?config, "starting");

    let store = JsonFileStore::new(&store_path);
    let mut session = SearchSession::with_config(
        default_sections(),
        store,
        ResultsView::new(config.fold_mode),
        config,
    )
    .context("invalid configuration")?;

    match args.command {
        Commands::Sections => {
            for section in session.sections() {
                println!("{} ({}):", section.title, section.len());
                for item in &section.items {
                    println!("  {item}");
                }
            }
        }

        Commands::Stats => {
            let stats = session.sections().stats();
            println!("Dataset statistics:");
            println!("  Sections: {}", stats.sections);
            println!("  Items: {}", stats.items);
            println!("  Recent searches: {}", session.history().len()?);
        }

        Commands::Search { query, record } => {
            session.search_began();
            session.query_changed(&query);
            print_results(session.results(), style);
            if record {
                session
                    .query_submitted()
                    .with_context(|| format!("failed to record search in {}", store_path.display()))?;
            } else {
                session.search_cancelled();
            }
        }

        Commands::History { action } => {
            let history = session.history();
            match action {
                HistoryAction::List => print_history(history)?,
                HistoryAction::Record { term } => {
                    if !history.record(&term)? {
                        eprintln!("Empty terms are not recorded");
                    }
                    print_history(history)?;
                }
                HistoryAction::Remove { index } => {
                    let removed = history.remove(index)?;
                    println!("Removed: {removed}");
                }
                HistoryAction::Clear => {
                    history.clear()?;
                    println!("Recent searches cleared");
                }
            }
        }

        Commands::Interactive => interactive(&mut session, style)?,
    }

    Ok(())
}
