//! Search session example for quicksearch-rs
//!
//! Drives a session with the same events a search bar emits and prints what
//! the screen would show after each one.

use quicksearch_rs::prelude::*;

fn show(session: &mut SearchSession<'_, MemoryStore, ResultsView>) -> Result<()> {
    println!("  mode: {:?}", session.mode());
    for section in session.visible_list()? {
        println!("  [{}] {} item(s)", section.title, section.len());
    }
    let view = session.results();
    for (index, section) in view.sections().iter().enumerate() {
        let rows = view.rows(index).unwrap_or_default();
        let texts: Vec<_> = rows.iter().map(|r| r.text()).collect();
        println!("  results {}: {:?}", section.title, texts);
    }
    Ok(())
}

fn main() -> Result<()> {
    println!("=== quicksearch-rs Search Session Example ===\n");

    let store = MemoryStore::new().with_entry(RECENT_SEARCHES_KEY, ["two"]);
    let mut session = SearchSession::new(
        default_sections(),
        RecentSearchHistory::new(store),
        ResultsView::default(),
    );

    let events = [
        InputEvent::SearchBegan,
        InputEvent::QueryChanged("ec".into()),
        InputEvent::QueryChanged("ech".into()),
        InputEvent::QuerySubmitted,
        InputEvent::SearchBegan,
        InputEvent::SelectRecent(1),
    ];

    for event in events {
        println!("--- {event:?} ---");
        session.handle(event)?;
        show(&mut session)?;
    }

    println!("\nRecent searches: {:?}", session.history().list()?);
    Ok(())
}
