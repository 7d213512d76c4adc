// crates/quicksearch-core/src/model.rs
use serde::{Deserialize, Serialize};

/// A titled group of display strings, rendered as one section.
///
/// Insertion order is display order. A snapshot is never mutated in place;
/// filtering builds a new one (see [`crate::search::filter`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionedList {
    pub title: String,
    pub items: Vec<String>,
}

impl SectionedList {
    pub fn new<T, I, S>(title: T, items: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
