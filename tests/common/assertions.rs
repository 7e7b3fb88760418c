//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the repository discovery error
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("✕ Error: Not in a git repository")
}

/// Creates a predicate that checks the selection list was drawn
pub fn shows_picker(action: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Action: {action}"))
        .and(predicates::str::contains("Select a branch:"))
}

/// Creates a predicate for a list row, e.g. `> feature` or `  main (current branch)`
pub fn has_row(row: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{row}\r\n"))
}

/// Creates a predicate for the force-delete confirmation prompt
pub fn has_delete_prompt(branch: &str) -> impl Predicate<str> {
    predicates::str::contains(format!(
        "Branch '{branch}' is not fully merged. Delete anyway? [y/N]: "
    ))
}
