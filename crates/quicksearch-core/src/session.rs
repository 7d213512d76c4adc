// crates/quicksearch-core/src/session.rs

//! # Search Session
//!
//! The screen-level glue between a search input, the dataset, the results
//! list and the recent-search history, with no UI attached.
//!
//! While the input has focus the session is [`Mode::Searching`] and the
//! screen shows the recent-search list; every keystroke re-filters the
//! dataset into the injected [`ResultsSink`]. Submitting (or picking a recent
//! search) records the term and returns to [`Mode::Browsing`].

use crate::common::RECENT_SEARCHES_TITLE;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::highlight::Highlighter;
use crate::history::RecentSearchHistory;
use crate::model::SectionedList;
use crate::search::{filter_with, result_rows, ResultRow};
use crate::store::SettingsStore;
use crate::text::FoldMode;
use std::borrow::Cow;
use tracing::debug;

/// Receives every freshly filtered snapshot.
pub trait ResultsSink {
    fn show(&mut self, query: &str, sections: &[SectionedList]);
}

impl<F> ResultsSink for F
where
    F: FnMut(&str, &[SectionedList]),
{
    fn show(&mut self, query: &str, sections: &[SectionedList]) {
        self(query, sections)
    }
}

/// The stock sink: keeps the latest snapshot and renders highlighted rows.
#[derive(Debug, Clone, Default)]
pub struct ResultsView {
    query: String,
    sections: Vec<SectionedList>,
    mode: FoldMode,
    refreshes: usize,
}

impl ResultsView {
    pub fn new(mode: FoldMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sections(&self) -> &[SectionedList] {
        &self.sections
    }

    /// How many snapshots have been shown so far.
    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }

    pub fn highlighter(&self) -> Highlighter {
        Highlighter::with_mode(&self.query, self.mode)
    }

    /// Rows of section `index`; `None` if there is no such section.
    pub fn rows(&self, index: usize) -> Option<Vec<ResultRow<'_>>> {
        let section = self.sections.get(index)?;
        Some(result_rows(section, &self.highlighter()))
    }
}

impl ResultsSink for ResultsView {
    fn show(&mut self, query: &str, sections: &[SectionedList]) {
        self.query.clear();
        self.query.push_str(query);
        self.sections = sections.to_vec();
        self.refreshes += 1;
    }
}

/// Which list the screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The full dataset.
    #[default]
    Browsing,
    /// The recent-search list, with results in the sink.
    Searching,
}

/// Events emitted by a search input or the lists around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    SearchBegan,
    QueryChanged(String),
    QuerySubmitted,
    SearchCancelled,
    SelectRecent(usize),
    DeleteRecent(usize),
}

pub struct SearchSession<'d, S: SettingsStore, R: ResultsSink> {
    sections: Cow<'d, [SectionedList]>,
    history: RecentSearchHistory<S>,
    results: R,
    fold_mode: FoldMode,
    mode: Mode,
    query: String,
}

impl<'d, S: SettingsStore, R: ResultsSink> SearchSession<'d, S, R> {
    pub fn new(
        sections: impl Into<Cow<'d, [SectionedList]>>,
        history: RecentSearchHistory<S>,
        results: R,
    ) -> Self {
        Self {
            sections: sections.into(),
            history,
            results,
            fold_mode: FoldMode::default(),
            mode: Mode::Browsing,
            query: String::new(),
        }
    }

    /// Build the history from `config` and the fold mode it names.
    pub fn with_config(
        sections: impl Into<Cow<'d, [SectionedList]>>,
        store: S,
        results: R,
        config: SearchConfig,
    ) -> Result<Self> {
        let history = RecentSearchHistory::with_config(store, config.history)?;
        let mut session = Self::new(sections, history, results);
        session.fold_mode = config.fold_mode;
        Ok(session)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &R {
        &self.results
    }

    pub fn history(&mut self) -> &mut RecentSearchHistory<S> {
        &mut self.history
    }

    pub fn sections(&self) -> &[SectionedList] {
        &self.sections
    }

    fn refresh_results(&mut self) {
        let filtered = filter_with(&self.sections, &self.query, self.fold_mode);
        self.results.show(&self.query, &filtered);
    }

    /// Input gained focus.
    pub fn search_began(&mut self) {
        self.refresh_results();
        self.mode = Mode::Searching;
    }

    /// Keystroke: re-filter everything for the new text.
    pub fn query_changed(&mut self, text: &str) {
        self.query.clear();
        self.query.push_str(text);
        self.refresh_results();
    }

    /// Explicit confirmation. Records the query unless it is empty.
    pub fn query_submitted(&mut self) -> Result<()> {
        self.mode = Mode::Browsing;
        let recorded = self.history.record(&self.query)?;
        debug!(query = %self.query, recorded, "search submitted");
        Ok(())
    }

    /// Input dismissed: the text is cleared and the full list shown again.
    pub fn search_cancelled(&mut self) {
        self.query.clear();
        self.refresh_results();
        self.mode = Mode::Browsing;
    }

    /// Re-run the recent search at `index`, moving it to the front.
    ///
    /// Only meaningful while searching; otherwise returns `Ok(None)`.
    pub fn select_recent(&mut self, index: usize) -> Result<Option<String>> {
        if self.mode != Mode::Searching {
            return Ok(None);
        }
        let term = self.history.get(index)?;
        self.query_changed(&term);
        self.query_submitted()?;
        Ok(Some(term))
    }

    /// Row-deletion commit on the recent-search list.
    pub fn delete_recent(&mut self, index: usize) -> Result<String> {
        self.history.remove(index)
    }

    pub fn handle(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::SearchBegan => self.search_began(),
            InputEvent::QueryChanged(text) => self.query_changed(&text),
            InputEvent::QuerySubmitted => self.query_submitted()?,
            InputEvent::SearchCancelled => self.search_cancelled(),
            InputEvent::SelectRecent(index) => {
                self.select_recent(index)?;
            }
            InputEvent::DeleteRecent(index) => {
                self.delete_recent(index)?;
            }
        }
        Ok(())
    }

    /// What the main screen shows: the dataset while browsing, the recent
    /// searches while searching.
    pub fn visible_list(&mut self) -> Result<Vec<SectionedList>> {
        match self.mode {
            Mode::Browsing => Ok(self.sections.to_vec()),
            Mode::Searching => {
                let recent = self.history.list()?;
                Ok(vec![SectionedList::new(RECENT_SEARCHES_TITLE, recent.iter().cloned())])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::store::MemoryStore;

    fn data() -> Vec<SectionedList> {
        vec![
            SectionedList::new("Letters", ["Alpha", "Bravo", "Charlie"]),
            SectionedList::new("Numbers", ["Zero", "One", "Two"]),
        ]
    }

    fn session(data: &[SectionedList]) -> SearchSession<'_, MemoryStore, ResultsView> {
        SearchSession::new(
            data,
            RecentSearchHistory::new(MemoryStore::new()),
            ResultsView::default(),
        )
    }

    #[test]
    fn typing_filters_into_sink() {
        let data = data();
        let mut s = session(&data);
        s.search_began();
        assert_eq!(s.mode(), Mode::Searching);
        s.query_changed("AR");
        let view = s.results();
        assert_eq!(view.query(), "AR");
        assert_eq!(view.sections()[0].items, vec!["Charlie"]);
        assert!(view.sections()[1].is_empty());
        let rows = view.rows(1).unwrap();
        assert_eq!(rows[0].text(), "No results found");
        assert_eq!(view.refresh_count(), 2);
    }

    #[test]
    fn submit_records_and_returns_to_browsing() {
        let data = data();
        let mut s = session(&data);
        s.search_began();
        s.query_changed("one");
        s.query_submitted().unwrap();
        assert_eq!(s.mode(), Mode::Browsing);
        assert_eq!(s.history().list().unwrap(), ["one"]);
        assert_eq!(s.visible_list().unwrap(), data);
    }

    #[test]
    fn empty_submit_records_nothing() {
        let data = data();
        let mut s = session(&data);
        s.search_began();
        s.query_submitted().unwrap();
        assert!(s.history().is_empty().unwrap());
    }

    #[test]
    fn cancel_clears_query_and_shows_everything() {
        let data = data();
        let mut s = session(&data);
        s.search_began();
        s.query_changed("zzz");
        s.search_cancelled();
        assert_eq!(s.mode(), Mode::Browsing);
        assert_eq!(s.query(), "");
        assert_eq!(s.results().sections(), data.as_slice());
    }

    #[test]
    fn searching_shows_recent_list() {
        let data = data();
        let mut s = session(&data);
        for q in ["a", "b"] {
            s.search_began();
            s.query_changed(q);
            s.query_submitted().unwrap();
        }
        s.search_began();
        let visible = s.visible_list().unwrap();
        assert_eq!(visible, vec![SectionedList::new("Recent searches", ["b", "a"])]);
    }

    #[test]
    fn selecting_recent_reruns_and_promotes_it() {
        let data = data();
        let mut s = session(&data);
        for q in ["two", "alpha"] {
            s.handle(InputEvent::SearchBegan).unwrap();
            s.handle(InputEvent::QueryChanged(q.into())).unwrap();
            s.handle(InputEvent::QuerySubmitted).unwrap();
        }
        s.search_began();
        assert_eq!(s.select_recent(1).unwrap().as_deref(), Some("two"));
        assert_eq!(s.mode(), Mode::Browsing);
        assert_eq!(s.history().list().unwrap(), ["two", "alpha"]);
        assert_eq!(s.results().sections()[1].items, vec!["Two"]);
    }

    #[test]
    fn selecting_recent_while_browsing_is_ignored() {
        let data = data();
        let mut s = session(&data);
        s.history().record("x").unwrap();
        assert_eq!(s.select_recent(0).unwrap(), None);
    }

    #[test]
    fn deleting_out_of_range_recent_fails() {
        let data = data();
        let mut s = session(&data);
        assert!(matches!(
            s.handle(InputEvent::DeleteRecent(0)),
            Err(SearchError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn closure_sink_receives_snapshots() {
        let data = data();
        let mut seen = Vec::new();
        {
            let sink = |q: &str, sections: &[SectionedList]| {
                seen.push((q.to_string(), sections.iter().map(SectionedList::len).sum::<usize>()));
            };
            let mut s = SearchSession::new(
                data.as_slice(),
                RecentSearchHistory::new(MemoryStore::new()),
                sink,
            );
            s.search_began();
            s.query_changed("o");
        }
        assert_eq!(seen, vec![(String::new(), 6), ("o".to_string(), 4)]);
    }
}
