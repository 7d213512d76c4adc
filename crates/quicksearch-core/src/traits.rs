// crates/quicksearch-core/src/traits.rs
use crate::common::DatasetStats;
use crate::model::SectionedList;
use crate::text::FoldMode;

/// A collection that can be shown as sections.
pub trait Searchable {
    fn sections(&self) -> &[SectionedList];
}

impl Searchable for [SectionedList] {
    fn sections(&self) -> &[SectionedList] {
        self
    }
}

impl Searchable for Vec<SectionedList> {
    fn sections(&self) -> &[SectionedList] {
        self
    }
}

/// The filter operations available on any [`Searchable`].
///
/// Implemented for every `Searchable` in `search.rs`.
pub trait SearchFilter {
    fn stats(&self) -> DatasetStats;

    /// Sections whose items contain `query`, case-insensitively.
    ///
    /// Section count, titles and order are kept; sections may come back
    /// empty. An empty query returns a copy of everything.
    ///
    /// # Example
    ///
    /// ```rust
    /// use quicksearch_core::{SearchFilter, SectionedList};
    ///
    /// let data = vec![SectionedList::new("Letters", ["Alpha", "Bravo"])];
    /// let out = data.filter("ra");
    /// assert_eq!(out, vec![SectionedList::new("Letters", ["Bravo"])]);
    /// ```
    fn filter(&self, query: &str) -> Vec<SectionedList> {
        self.filter_with(query, FoldMode::default())
    }

    fn filter_with(&self, query: &str, mode: FoldMode) -> Vec<SectionedList>;
}
