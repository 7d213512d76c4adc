// crates/quicksearch-core/src/store/mod.rs

//! # Settings Store
//!
//! The persistence collaborator behind the recent-search history: one named
//! slot per key, each holding an ordered list of strings.
//!
//! Stores are injected into [`crate::history::RecentSearchHistory`] instead of
//! reached through a process-wide global, so tests can swap in
//! [`MemoryStore`].

use crate::error::Result;
use std::collections::HashMap;
use tracing::trace;

#[cfg(feature = "json")]
mod json_file;

#[cfg(feature = "json")]
pub use json_file::{default_store_path, JsonFileStore, DEFAULT_STORE_FILENAME};

/// Key-value storage of string lists.
///
/// `save` must be durable by the time it returns; callers read back with
/// `load` on the next activation and expect exactly what they wrote.
pub trait SettingsStore {
    /// The list stored under `key`, or an empty list if the key is absent.
    fn load(&self, key: &str) -> Result<Vec<String>>;

    /// Replace the list stored under `key`.
    fn save(&mut self, key: &str, values: &[String]) -> Result<()>;
}

impl<S: SettingsStore + ?Sized> SettingsStore for Box<S> {
    fn load(&self, key: &str) -> Result<Vec<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, values: &[String]) -> Result<()> {
        (**self).save(key, values)
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for &mut S {
    fn load(&self, key: &str) -> Result<Vec<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, values: &[String]) -> Result<()> {
        (**self).save(key, values)
    }
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, Vec<String>>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate `key`, as if written by an earlier session.
    pub fn with_entry<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slots
            .insert(key.to_string(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Number of successful `save` calls.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.slots.get(key).map(Vec::as_slice)
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Vec<String>> {
        Ok(self.slots.get(key).cloned().unwrap_or_default())
    }

    fn save(&mut self, key: &str, values: &[String]) -> Result<()> {
        trace!(key, len = values.len(), "memory store save");
        self.slots.insert(key.to_string(), values.to_vec());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_loads_empty() {
        let store = MemoryStore::new();
        assert!(store.load("RecentSearches").unwrap().is_empty());
    }

    #[test]
    fn save_then_load_returns_same_order() {
        let mut store = MemoryStore::new();
        let values = vec!["b".to_string(), "a".to_string()];
        store.save("k", &values).unwrap();
        assert_eq!(store.load("k").unwrap(), values);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn SettingsStore> =
            Box::new(MemoryStore::new().with_entry("k", ["x"]));
        assert_eq!(store.load("k").unwrap(), vec!["x"]);
        store.save("k", &[]).unwrap();
        assert!(store.load("k").unwrap().is_empty());
    }
}
