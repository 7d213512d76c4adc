use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for quicksearch
#[derive(Debug, Parser)]
#[command(
    name = "quicksearch",
    version,
    about = "Search the bundled phonetic-alphabet and number lists with highlighting and a recent-search history"
)]
pub struct CliArgs {
    /// Path to the JSON settings file holding recent searches
    /// (default: <data dir>/quicksearch/settings.json)
    #[arg(short = 's', long = "store", env = "QUICKSEARCH_STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Maximum number of remembered searches
    #[arg(long = "capacity", default_value_t = 25, global = true)]
    pub capacity: usize,

    /// Match accents loosely (e.g. "zurich" finds "Zürich")
    #[cfg(feature = "transliterate")]
    #[arg(short = 't', long = "transliterate", global = true)]
    pub transliterate: bool,

    /// Print matches in [brackets] instead of ANSI bold red
    #[arg(long = "plain", global = true)]
    pub plain: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every section of the dataset
    Sections,

    /// Show a summary of the dataset contents
    Stats,

    /// Filter the dataset and highlight matches
    Search {
        /// Substring to search (case-insensitive)
        query: String,

        /// Also remember the query in the recent-search history
        #[arg(short = 'r', long = "record")]
        record: bool,
    },

    /// Inspect or edit the recent-search history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Line-based search session reading from stdin
    Interactive,
}

#[derive(Debug, Subcommand)]
pub enum HistoryAction {
    /// List recent searches, newest first
    List,

    /// Record a search term
    Record { term: String },

    /// Remove the entry at a position shown by `history list`
    Remove { index: usize },

    /// Forget every recent search
    Clear,
}
