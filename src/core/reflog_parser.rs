//! Recognition of branch switches in HEAD reflog subjects.
//!
//! This module provides [`ReflogParser`] which turns the output of
//! `git reflog show --format=%gs HEAD` into the list of branches the user moved to,
//! most recent first. Parsing is pure string work so it can be tested without
//! spawning git.
//!
//! # Recognised Subjects
//! - **Move from/to**: `checkout: moving from main to feature`, also the
//!   `switch: moving from` and `switch branch: from` spellings
//! - **Move to**: `checkout: moving to release`, `reset: moving to main`
//! - **Switching**: `checkout: switching to 'bugfix'`, `switch to branch 'bugfix'`
//!
//! Anything else (commits, merges, rebases, unknown phrasings) yields no branch.
//! Detached HEAD expressions are dropped. A destination that looks like a commit
//! id is kept, since it may be a branch named `1234567`; callers check it against
//! `refs/heads` before offering it.

/// Subjects of the form `<prefix><from> to <destination>`
const MOVE_FROM_PREFIXES: [&str; 3] = [
    "checkout: moving from ",
    "switch: moving from ",
    "switch branch: from ",
];

/// Subjects of the form `<prefix><destination>`
const MOVE_TO_PREFIXES: [&str; 4] = [
    "checkout: moving to ",
    "checkout: switching to ",
    "switch to branch ",
    "reset: moving to ",
];

pub struct ReflogParser;

impl ReflogParser {
    /// Extract destination branches from reflog output, one subject per line.
    ///
    /// Order is preserved and duplicates are kept.
    pub fn parse(output: &str) -> Vec<String> {
        output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(Self::branch_from_subject)
            .collect()
    }

    /// Extract the destination branch from a single reflog subject
    pub fn branch_from_subject(subject: &str) -> Option<String> {
        let subject = subject.trim();

        let destination = if let Some(rest) = strip_any_prefix(subject, &MOVE_FROM_PREFIXES) {
            let idx = rest.rfind(" to ")?;
            &rest[idx + " to ".len()..]
        } else {
            strip_any_prefix(subject, &MOVE_TO_PREFIXES)?
        };

        let branch = destination.trim().trim_matches(|c| c == '\'' || c == '"');
        if branch.is_empty() || is_detached(branch) {
            return None;
        }

        Some(branch.to_string())
    }
}

fn strip_any_prefix<'a>(subject: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes
        .iter()
        .find_map(|prefix| subject.strip_prefix(prefix))
}

/// `HEAD`, `HEAD~2`, `HEAD@{1}` and `(detached ...)` markers
fn is_detached(name: &str) -> bool {
    name.starts_with("HEAD") || name.contains("(detached")
}
