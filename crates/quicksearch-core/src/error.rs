// crates/quicksearch-core/src/error.rs

//! Error types shared by every module of the crate.
//!
//! Both domain variants ([`SearchError::InvalidArgument`] and
//! [`SearchError::IndexOutOfRange`]) signal a caller bug rather than a
//! condition reachable through normal user interaction. They are returned
//! instead of silently ignored so the displayed list never drifts from the
//! stored one.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// A value that violates a documented precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An index that does not address an existing entry.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SearchError::InvalidArgument(msg.into())
    }

    /// `true` for the two programmer-error kinds.
    pub fn is_caller_bug(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidArgument(_) | SearchError::IndexOutOfRange { .. }
        )
    }
}
