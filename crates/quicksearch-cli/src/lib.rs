//! quicksearch-cli
//! ===============
//!
//! Command-line interface for the `quicksearch-core` library.
//!
//! This crate primarily provides a binary (`quicksearch`). The library target
//! holds the terminal rendering helpers so they can be unit tested.
//!
//! Basic usage:
//!
//! ```text
//! quicksearch --help
//! quicksearch search one --record
//! quicksearch history list
//! quicksearch history remove 0
//! quicksearch interactive
//! ```
//!
//! For programmatic access use [`quicksearch-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod render;
