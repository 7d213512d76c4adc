//! Error handling example for quicksearch-rs
//!
//! This example demonstrates the two caller-bug errors and how they surface.

use quicksearch_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== quicksearch-rs Error Handling Example ===\n");

    // Example 1: Removing a recent search that does not exist
    println!("--- Example 1: Out-of-range removal ---");
    let mut history = RecentSearchHistory::new(MemoryStore::new());
    history.record("alpha")?;
    for index in [0, 0] {
        match history.remove(index) {
            Ok(term) => println!("  Removed {term:?}"),
            Err(e) => println!("  ✗ {e}"),
        }
    }
    println!();

    // Example 2: Invalid configuration
    println!("--- Example 2: Invalid history configuration ---");
    match RecentSearchHistory::with_config(MemoryStore::new(), HistoryConfig::with_capacity(0)) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  ✗ {e} (caller bug: {})", e.is_caller_bug()),
    }
    println!();

    // Example 3: Building a span by hand
    println!("--- Example 3: Hand-made highlight spans ---");
    for (start, end) in [(0, 3), (3, 3)] {
        match HighlightSpan::new(start, end) {
            Ok(span) => println!("  {start}..{end} ok, len {}", span.len()),
            Err(e) => println!("  ✗ {e}"),
        }
    }

    Ok(())
}
