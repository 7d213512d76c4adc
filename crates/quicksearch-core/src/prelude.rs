//! quicksearch prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::common::{DatasetStats, NO_RESULTS_PLACEHOLDER, RECENT_SEARCHES_TITLE};
pub use crate::config::{HistoryConfig, SearchConfig, DEFAULT_HISTORY_CAPACITY, RECENT_SEARCHES_KEY};
pub use crate::dataset::default_sections;
pub use crate::error::{Result, SearchError};
pub use crate::highlight::{find_occurrences, segments, HighlightSpan, Highlighter, Segment};
pub use crate::history::RecentSearchHistory;
pub use crate::model::SectionedList;
pub use crate::search::{result_rows, ResultRow};
pub use crate::session::{InputEvent, Mode, ResultsSink, ResultsView, SearchSession};
#[cfg(feature = "json")]
pub use crate::store::JsonFileStore;
pub use crate::store::{MemoryStore, SettingsStore};
pub use crate::text::FoldMode;
pub use crate::traits::{SearchFilter, Searchable};
