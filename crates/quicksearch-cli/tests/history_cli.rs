// crates/quicksearch-cli/tests/history_cli.rs
use quicksearch_core::prelude::*;
use std::path::Path;
use std::process::{Command, Output};

fn quicksearch(store: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quicksearch"))
        .arg("--store")
        .arg(store)
        .arg("--plain")
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run quicksearch")
}

fn stored(path: &Path) -> Vec<String> {
    JsonFileStore::new(path).load(RECENT_SEARCHES_KEY).unwrap()
}

#[test]
fn history_record_and_remove_round_trip_through_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    for term in ["alpha", "one", "alpha"] {
        let out = quicksearch(&path, &["history", "record", term]);
        assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    }
    assert_eq!(stored(&path), vec!["alpha", "one"]);

    let out = quicksearch(&path, &["history", "remove", "0"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Removed: alpha"));
    assert_eq!(stored(&path), vec!["one"]);

    let out = quicksearch(&path, &["history", "list"]);
    assert!(String::from_utf8_lossy(&out.stdout).contains("0  🔍 one"));
}

#[test]
fn removing_past_the_end_fails_and_keeps_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    assert!(quicksearch(&path, &["history", "record", "x"]).status.success());
    let out = quicksearch(&path, &["history", "remove", "3"]);
    assert!(!out.status.success());
    assert_eq!(stored(&path), vec!["x"]);
}

#[test]
fn search_with_record_remembers_the_query() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let out = quicksearch(&path, &["search", "ONE", "--record"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("[One] Hundred"));
    assert!(stdout.contains("No results found"));
    assert_eq!(stored(&path), vec!["ONE"]);
}
