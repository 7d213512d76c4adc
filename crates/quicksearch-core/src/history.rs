// crates/quicksearch-core/src/history.rs

//! # Recent Search History
//!
//! A bounded, newest-first, duplicate-free list of submitted search terms,
//! written through to a [`SettingsStore`] on every change.
//!
//! Invariants after every operation:
//! - no two entries are equal (case-sensitive)
//! - `len() <= capacity`
//! - index 0 is the most recently recorded term
//!
//! Mutation takes `&mut self`, so there is exactly one writer at a time. To
//! share a history across threads, wrap it in a `Mutex`.

use crate::config::HistoryConfig;
use crate::error::{Result, SearchError};
use crate::store::SettingsStore;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Keep the first occurrence of every term, preserving order.
pub(crate) fn dedup_keep_first(terms: &mut Vec<String>) {
    let mut seen = HashSet::with_capacity(terms.len());
    terms.retain(|t| seen.insert(t.clone()));
}

pub struct RecentSearchHistory<S: SettingsStore> {
    store: S,
    config: HistoryConfig,
    cache: Option<Vec<String>>,
}

impl<S: SettingsStore> RecentSearchHistory<S> {
    /// History with the default `"RecentSearches"` key and capacity 25.
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: HistoryConfig::default(),
            cache: None,
        }
    }

    pub fn with_config(store: S, config: HistoryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            cache: None,
        })
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Drop the cached list; the next access reloads from the store.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    /// Loaded entries, normalized to the invariants in case the stored list
    /// was written by something less careful.
    fn entries(&mut self) -> Result<&mut Vec<String>> {
        if self.cache.is_none() {
            let mut loaded = self.store.load(&self.config.key)?;
            let raw_len = loaded.len();
            dedup_keep_first(&mut loaded);
            loaded.truncate(self.config.capacity);
            if loaded.len() != raw_len {
                warn!(
                    key = %self.config.key,
                    stored = raw_len,
                    kept = loaded.len(),
                    "normalized stored recent searches"
                );
            }
            debug!(key = %self.config.key, len = loaded.len(), "loaded recent searches");
            self.cache = Some(loaded);
        }
        Ok(self.cache.get_or_insert_with(Vec::new))
    }

    /// Save `next` and only then make it the cached list, so a failed write
    /// leaves the history exactly as the store has it.
    fn commit(&mut self, next: Vec<String>) -> Result<()> {
        self.store.save(&self.config.key, &next)?;
        self.cache = Some(next);
        Ok(())
    }

    /// Current terms, newest first.
    pub fn list(&mut self) -> Result<&[String]> {
        Ok(self.entries()?.as_slice())
    }

    pub fn len(&mut self) -> Result<usize> {
        Ok(self.entries()?.len())
    }

    pub fn is_empty(&mut self) -> Result<bool> {
        Ok(self.entries()?.is_empty())
    }

    /// The term at `index`, or `IndexOutOfRange`.
    pub fn get(&mut self, index: usize) -> Result<String> {
        let entries = self.entries()?;
        entries
            .get(index)
            .cloned()
            .ok_or(SearchError::IndexOutOfRange {
                index,
                len: entries.len(),
            })
    }

    /// Put `term` at the front, drop any older copy, trim to capacity, then
    /// persist.
    ///
    /// An empty term is ignored and `Ok(false)` returned.
    pub fn record(&mut self, term: &str) -> Result<bool> {
        if term.is_empty() {
            return Ok(false);
        }
        let capacity = self.config.capacity;
        let mut next = Vec::with_capacity(capacity + 1);
        next.push(term.to_string());
        next.extend(self.entries()?.iter().cloned());
        dedup_keep_first(&mut next);
        next.truncate(capacity);
        let len = next.len();
        self.commit(next)?;
        debug!(term, len, "recorded recent search");
        Ok(true)
    }

    /// Delete the entry at `index` and persist. Returns the removed term.
    pub fn remove(&mut self, index: usize) -> Result<String> {
        let entries = self.entries()?;
        if index >= entries.len() {
            let len = entries.len();
            warn!(index, len, "recent search removal out of range");
            return Err(SearchError::IndexOutOfRange { index, len });
        }
        let mut next = entries.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        debug!(index, term = %removed, "removed recent search");
        Ok(removed)
    }

    /// Forget every entry and persist the empty list.
    pub fn clear(&mut self) -> Result<()> {
        self.commit(Vec::new())
    }
}
