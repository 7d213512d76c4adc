//! quicksearch-rs: umbrella crate re-exporting `quicksearch-core` for the demos.
pub use quicksearch_core::*;
