//! Per-invocation data structures.
//!
//! Everything here is created fresh for one run of the tool and dropped at exit;
//! nothing is persisted outside git's own refs and reflog.
//!
//! # Public API
//! - [`BranchCandidate`]: A branch row offered to the user
//! - [`SelectionResult`]: Outcome of the interactive selection loop
//! - [`Action`]: What to do with the selected branch
//! - [`ActionOptions`]: Immutable options for one invocation

use crate::core::error::{BranchNavigatorError, Result};
use crate::core::git::MergeOptions;
use std::fmt;

/// Default number of recent branches offered besides the current one
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCandidate {
    pub name: String,
    pub is_current: bool,
}

impl BranchCandidate {
    pub fn current(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_current: true,
        }
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_current: false,
        }
    }

    /// Build the list shown to the user: the current branch first, then `recent`.
    ///
    /// Names equal to the current branch or already listed are skipped so the
    /// list never contains a name twice.
    pub fn list(current: &str, recent: &[String]) -> Vec<Self> {
        let mut candidates = Vec::with_capacity(recent.len() + 1);
        candidates.push(Self::current(current));
        for name in recent {
            if name.is_empty() || candidates.iter().any(|c| &c.name == name) {
                continue;
            }
            candidates.push(Self::other(name.as_str()));
        }
        candidates
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    /// The user confirmed a branch other than the current one
    Selected(String),
    /// The user confirmed the row of the branch that is already checked out
    AlreadyOn(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Checkout,
    Merge,
    Delete,
}

impl Action {
    /// Resolve the action from the three mutually exclusive command line flags
    pub fn from_flags(checkout: bool, merge: bool, delete: bool) -> Result<Self> {
        let selected: Vec<Action> = [
            (checkout, Action::Checkout),
            (merge, Action::Merge),
            (delete, Action::Delete),
        ]
        .into_iter()
        .filter_map(|(set, action)| set.then_some(action))
        .collect();

        match selected.as_slice() {
            [] => Ok(Action::Checkout),
            [action] => Ok(*action),
            _ => Err(BranchNavigatorError::validation(
                "only one of -c, -m, or -d may be specified",
            )),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Checkout => "checkout",
            Action::Merge => "merge",
            Action::Delete => "delete",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Action::Checkout => "Switch to the selected branch",
            Action::Merge => "Merge the selected branch into the current branch",
            Action::Delete => "Delete the selected local branch",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOptions {
    pub action: Action,
    pub limit: usize,
    pub merge: MergeOptions,
}

impl Default for ActionOptions {
    fn default() -> Self {
        Self {
            action: Action::default(),
            limit: DEFAULT_LIMIT,
            merge: MergeOptions::default(),
        }
    }
}

impl ActionOptions {
    /// Validate a user supplied limit, which must be a positive integer
    pub fn new(action: Action, limit: i64, merge: MergeOptions) -> Result<Self> {
        if limit <= 0 {
            return Err(BranchNavigatorError::validation(
                "limit must be greater than 0",
            ));
        }
        let limit = usize::try_from(limit)
            .map_err(|_| BranchNavigatorError::validation("limit is too large"))?;

        Ok(Self {
            action,
            limit,
            merge,
        })
    }
}
