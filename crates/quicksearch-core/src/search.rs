// crates/quicksearch-core/src/search.rs

//! # Section Filtering
//!
//! The per-keystroke filter applied to the whole dataset, plus the row model
//! handed to the list renderer.
//!
//! Every query change triggers a full linear rescan. At this dataset size
//! (≈127 items) that is cheaper than maintaining an index; a dataset orders
//! of magnitude larger should switch to a prebuilt inverted index.

use crate::common::{DatasetStats, NO_RESULTS_PLACEHOLDER};
use crate::highlight::{HighlightSpan, Highlighter};
use crate::model::SectionedList;
use crate::text::FoldMode;
use crate::traits::{SearchFilter, Searchable};
use tracing::debug;

/// Filter `sections` by `query` with the default case-insensitive folding.
pub fn filter(sections: &[SectionedList], query: &str) -> Vec<SectionedList> {
    filter_with(sections, query, FoldMode::default())
}

pub fn filter_with(sections: &[SectionedList], query: &str, mode: FoldMode) -> Vec<SectionedList> {
    let matcher = Highlighter::with_mode(query, mode);
    let out: Vec<SectionedList> = sections
        .iter()
        .map(|section| SectionedList {
            title: section.title.clone(),
            items: section
                .items
                .iter()
                .filter(|item| matcher.is_match(item))
                .cloned()
                .collect(),
        })
        .collect();

    debug!(
        query,
        sections = out.len(),
        items = out.iter().map(SectionedList::len).sum::<usize>(),
        "filtered sections"
    );
    out
}

impl<T: Searchable + ?Sized> SearchFilter for T {
    fn stats(&self) -> DatasetStats {
        let sections = self.sections();
        DatasetStats {
            sections: sections.len(),
            items: sections.iter().map(SectionedList::len).sum(),
            empty_sections: sections.iter().filter(|s| s.is_empty()).count(),
        }
    }

    fn filter_with(&self, query: &str, mode: FoldMode) -> Vec<SectionedList> {
        filter_with(self.sections(), query, mode)
    }
}

/// One display row of a result section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultRow<'a> {
    /// Stand-in row for a section that has no items.
    Placeholder,
    Item {
        index: usize,
        text: &'a str,
        spans: Vec<HighlightSpan>,
    },
}

impl<'a> ResultRow<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            ResultRow::Placeholder => NO_RESULTS_PLACEHOLDER,
            ResultRow::Item { text, .. } => *text,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ResultRow::Placeholder)
    }
}

/// Rows for one section: a single placeholder when empty, otherwise one
/// highlighted row per item.
pub fn result_rows<'a>(section: &'a SectionedList, highlighter: &Highlighter) -> Vec<ResultRow<'a>> {
    if section.is_empty() {
        return vec![ResultRow::Placeholder];
    }
    section
        .items
        .iter()
        .enumerate()
        .map(|(index, text)| ResultRow::Item {
            index,
            text,
            spans: highlighter.spans(text),
        })
        .collect()
}
