//! Basic usage example for quicksearch-rs
//!
//! This example demonstrates how to:
//! - Browse the bundled dataset
//! - Filter sections by a query
//! - Highlight matches inside each row
//! - Keep a recent-search history

use quicksearch_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== quicksearch-rs Basic Usage Example ===\n");

    // Example 1: The dataset
    println!("--- Example 1: Bundled sections ---");
    let sections = default_sections();
    let stats = sections.stats();
    println!("{} sections, {} items", stats.sections, stats.items);
    for section in sections {
        let preview: Vec<_> = section.items.iter().take(5).map(String::as_str).collect();
        println!("{}: {} ...", section.title, preview.join(", "));
    }
    println!();

    // Example 2: Filtering
    println!("--- Example 2: Filter by \"one\" ---");
    for section in sections.filter("one") {
        println!("{}: {:?}", section.title, section.items);
    }
    println!();

    // Example 3: Highlighting
    println!("--- Example 3: Highlight spans ---");
    for text in ["Papa", "One Hundred", "Ninety-nine"] {
        let spans = find_occurrences(text, "n");
        let marked: String = segments(text, &spans)
            .iter()
            .map(|s| {
                if s.emphasized {
                    format!("[{}]", s.text)
                } else {
                    s.text.to_string()
                }
            })
            .collect();
        println!("{text:>12} -> {marked}");
    }
    println!();

    // Example 4: Recent searches
    println!("--- Example 4: Recent searches ---");
    let mut history = RecentSearchHistory::new(MemoryStore::new());
    for term in ["alpha", "two", "alpha", ""] {
        history.record(term)?;
    }
    println!("Recent: {:?}", history.list()?);

    Ok(())
}
