// crates/quicksearch-core/src/lib.rs

//! quicksearch-core
//! ================
//!
//! Search a small static dataset the way a mobile search screen does:
//! filter sectioned lists on every keystroke, highlight each
//! case-insensitive match, and keep a bounded recent-search history in a
//! key-value settings store.
//!
//! ```rust
//! use quicksearch_core::prelude::*;
//!
//! let results = default_sections().filter("one");
//! assert_eq!(results[1].items.first().map(String::as_str), Some("One"));
//!
//! let spans = find_occurrences("One Hundred", "one");
//! assert_eq!(spans[0].range(), 0..3);
//!
//! let mut history = RecentSearchHistory::new(MemoryStore::new());
//! history.record("one")?;
//! assert_eq!(history.list()?, ["one"]);
//! # Ok::<(), quicksearch_core::SearchError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod dataset;
pub mod error;
pub mod highlight;
pub mod history;
pub mod model;
pub mod prelude;
pub mod search;
pub mod session;
pub mod store;
pub mod text; // folding shared by highlight + search
pub mod traits;

// Re-exports
pub use crate::common::DatasetStats;
pub use crate::error::{Result, SearchError};
pub use crate::highlight::{find_occurrences, HighlightSpan, Highlighter};
pub use crate::history::RecentSearchHistory;
pub use crate::model::SectionedList;
pub use crate::search::filter;
pub use crate::session::{ResultsSink, SearchSession};
pub use crate::store::{MemoryStore, SettingsStore};
// The filter trait has to be in scope for `.filter()` on collections.
pub use crate::traits::{SearchFilter, Searchable};
