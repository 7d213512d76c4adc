// crates/quicksearch-core/src/config.rs
use crate::error::{Result, SearchError};
use crate::text::FoldMode;
use serde::{Deserialize, Serialize};

/// Storage key the recent-search list lives under.
pub const RECENT_SEARCHES_KEY: &str = "RecentSearches";

/// Maximum number of remembered searches.
pub const DEFAULT_HISTORY_CAPACITY: usize = 25;

/// Settings of a [`crate::history::RecentSearchHistory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub key: String,
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            key: RECENT_SEARCHES_KEY.to_string(),
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl HistoryConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(SearchError::invalid("history key must not be empty"));
        }
        if self.capacity == 0 {
            return Err(SearchError::invalid("history capacity must be at least 1"));
        }
        Ok(())
    }
}

/// Everything a search session needs besides its collaborators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub history: HistoryConfig,
    pub fold_mode: FoldMode,
}
