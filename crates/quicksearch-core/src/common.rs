// crates/quicksearch-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a sectioned dataset.
///
/// Returned by [`crate::search::SearchFilter::stats`]; counts reflect the
/// snapshot they were computed from, so a filtered snapshot reports only the
/// surviving items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub sections: usize,
    pub items: usize,
    /// Sections with no items left (rendered with a placeholder row).
    pub empty_sections: usize,
}

/// Text shown in place of rows for a section with no items.
pub const NO_RESULTS_PLACEHOLDER: &str = "No results found";

/// Header of the recent-search list.
pub const RECENT_SEARCHES_TITLE: &str = "Recent searches";
