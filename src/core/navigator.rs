//! Recent branch discovery.
//!
//! [`BranchNavigator`] combines the HEAD reflog (where the user actually went)
//! with local branches sorted by commit date (fallback) into a short, ordered,
//! duplicate-free list of branch names. The current branch is never part of
//! the result; callers show it separately.

use crate::core::{error::Result, git::GitRepo, runner::CommandRunner};
use std::collections::HashSet;

/// The git queries branch discovery needs
pub trait BranchSource {
    fn current_branch(&self) -> Result<String>;
    fn branch_history(&self) -> Result<Vec<String>>;
    fn local_branches_by_recency(&self) -> Result<Vec<String>>;
    fn branch_exists(&self, name: &str) -> Result<bool>;
}

impl<R: CommandRunner> BranchSource for GitRepo<R> {
    fn current_branch(&self) -> Result<String> {
        GitRepo::current_branch(self)
    }

    fn branch_history(&self) -> Result<Vec<String>> {
        GitRepo::branch_history(self)
    }

    fn local_branches_by_recency(&self) -> Result<Vec<String>> {
        GitRepo::local_branches_by_recency(self)
    }

    fn branch_exists(&self, name: &str) -> Result<bool> {
        GitRepo::branch_exists(self, name)
    }
}

/// Anything that can produce the recent branch list for the selection screen
pub trait RecentBranches {
    fn recent_branches(&self, limit: usize) -> Result<Vec<String>>;
}

pub struct BranchNavigator<'a, S: BranchSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: BranchSource + ?Sized> BranchNavigator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Accept candidates in order until `limit` names are collected.
    ///
    /// Empty names, names in `seen` and branches that no longer exist are skipped.
    fn accept(
        &self,
        candidates: Vec<String>,
        seen: &mut HashSet<String>,
        results: &mut Vec<String>,
        limit: usize,
    ) -> Result<()> {
        for candidate in candidates {
            if results.len() >= limit {
                break;
            }

            let candidate = candidate.trim();
            if candidate.is_empty() || seen.contains(candidate) {
                continue;
            }

            if !self.source.branch_exists(candidate)? {
                log::debug!("skipping '{candidate}': branch no longer exists");
                continue;
            }

            seen.insert(candidate.to_string());
            results.push(candidate.to_string());
        }
        Ok(())
    }
}

impl<S: BranchSource + ?Sized> RecentBranches for BranchNavigator<'_, S> {
    /// Up to `limit` recently used branches, reflog order first, then commit date order
    fn recent_branches(&self, limit: usize) -> Result<Vec<String>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let current = self.source.current_branch()?;
        let mut seen = HashSet::from([current]);
        let mut results = Vec::new();

        let history = self.source.branch_history()?;
        self.accept(history, &mut seen, &mut results, limit)?;
        if results.len() >= limit {
            return Ok(results);
        }

        log::debug!(
            "reflog gave {} of {limit} branches, falling back to commit date order",
            results.len()
        );
        let fallback = self.source.local_branches_by_recency()?;
        self.accept(fallback, &mut seen, &mut results, limit)?;

        results.truncate(limit);
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::BranchNavigatorError;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeSource {
        current: String,
        history: Vec<String>,
        fallback: Vec<String>,
        existing: Vec<String>,
        history_error: bool,
        exists_error_for: Option<String>,
        calls: Cell<usize>,
        exists_checked: RefCell<Vec<String>>,
        fallback_queried: Cell<bool>,
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    impl FakeSource {
        fn new(current: &str, history: &[&str], fallback: &[&str], existing: &[&str]) -> Self {
            Self {
                current: current.to_string(),
                history: names(history),
                fallback: names(fallback),
                existing: names(existing),
                ..Default::default()
            }
        }
    }

    impl BranchSource for FakeSource {
        fn current_branch(&self) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.current.clone())
        }

        fn branch_history(&self) -> Result<Vec<String>> {
            self.calls.set(self.calls.get() + 1);
            if self.history_error {
                return Err(BranchNavigatorError::git_command_failed(
                    &["reflog"],
                    "fatal: bad reflog",
                ));
            }
            Ok(self.history.clone())
        }

        fn local_branches_by_recency(&self) -> Result<Vec<String>> {
            self.calls.set(self.calls.get() + 1);
            self.fallback_queried.set(true);
            Ok(self.fallback.clone())
        }

        fn branch_exists(&self, name: &str) -> Result<bool> {
            self.calls.set(self.calls.get() + 1);
            self.exists_checked.borrow_mut().push(name.to_string());
            if self.exists_error_for.as_deref() == Some(name) {
                return Err(BranchNavigatorError::git_command_failed(
                    &["show-ref"],
                    "fatal: unable to read refs",
                ));
            }
            Ok(self.existing.iter().any(|b| b == name))
        }
    }

    #[test]
    fn test_zero_limit_does_no_work() -> Result<()> {
        let source = FakeSource::new("main", &["feature"], &["feature"], &["feature"]);
        let navigator = BranchNavigator::new(&source);
        assert!(navigator.recent_branches(0)?.is_empty());
        assert_eq!(source.calls.get(), 0);
        Ok(())
    }

    #[test]
    fn test_history_dedup_excludes_current_and_stale() -> Result<()> {
        let source = FakeSource::new(
            "main",
            &["feature", "main", "feature", "", "deleted", "bugfix"],
            &[],
            &["main", "feature", "bugfix"],
        );
        let navigator = BranchNavigator::new(&source);
        assert_eq!(navigator.recent_branches(5)?, vec!["feature", "bugfix"]);
        Ok(())
    }

    #[test]
    fn test_history_precedes_fallback() -> Result<()> {
        let source = FakeSource::new(
            "main",
            &["beta"],
            &["alpha", "main", "beta", "gamma"],
            &["main", "alpha", "beta", "gamma"],
        );
        let navigator = BranchNavigator::new(&source);
        assert_eq!(navigator.recent_branches(10)?, vec!["beta", "alpha", "gamma"]);
        Ok(())
    }

    #[test]
    fn test_full_history_skips_fallback() -> Result<()> {
        let source = FakeSource::new(
            "main",
            &["a", "b", "c"],
            &["z"],
            &["a", "b", "c", "z"],
        );
        let navigator = BranchNavigator::new(&source);
        assert_eq!(navigator.recent_branches(2)?, vec!["a", "b"]);
        assert!(!source.fallback_queried.get());
        assert_eq!(*source.exists_checked.borrow(), vec!["a", "b"]);
        Ok(())
    }

    #[test]
    fn test_fallback_respects_limit() -> Result<()> {
        let source = FakeSource::new(
            "main",
            &["a"],
            &["b", "c", "d"],
            &["a", "b", "c", "d"],
        );
        let navigator = BranchNavigator::new(&source);
        assert_eq!(navigator.recent_branches(3)?, vec!["a", "b", "c"]);
        Ok(())
    }

    #[test]
    fn test_source_errors_propagate() {
        let mut source = FakeSource::new("main", &["feature"], &[], &["feature"]);
        source.history_error = true;
        let navigator = BranchNavigator::new(&source);
        assert!(navigator.recent_branches(3).is_err());
    }

    #[test]
    fn test_existence_check_errors_propagate() {
        let mut source = FakeSource::new("main", &["feature", "other"], &[], &["other"]);
        source.exists_error_for = Some("feature".to_string());
        let navigator = BranchNavigator::new(&source);
        let err = navigator.recent_branches(3).unwrap_err();
        assert!(err.to_string().contains("unable to read refs"));
    }

    #[test]
    fn test_no_name_repeats_and_current_never_returned() -> Result<()> {
        let source = FakeSource::new(
            "main",
            &["x", "main", "y", "x", "y", "main"],
            &["main", "y", "z", "x"],
            &["main", "x", "y", "z"],
        );
        let navigator = BranchNavigator::new(&source);
        let result = navigator.recent_branches(10)?;
        assert_eq!(result, vec!["x", "y", "z"]);
        assert!(!result.iter().any(|b| b == "main"));
        Ok(())
    }

    #[test]
    fn test_huge_limit_returns_what_exists() -> Result<()> {
        let source = FakeSource::new(
            "main",
            &["feature"],
            &["main", "feature", "bugfix"],
            &["main", "feature", "bugfix"],
        );
        let navigator = BranchNavigator::new(&source);
        assert_eq!(
            navigator.recent_branches(usize::MAX)?,
            vec!["feature", "bugfix"]
        );
        Ok(())
    }

    #[test]
    fn test_hex_named_branch_keeps_reflog_position() -> Result<()> {
        let source = FakeSource::new(
            "main",
            &["1234567", "3f2a9c1", "feature"],
            &["main", "feature", "1234567"],
            &["main", "feature", "1234567"],
        );
        let navigator = BranchNavigator::new(&source);
        assert_eq!(navigator.recent_branches(10)?, vec!["1234567", "feature"]);
        Ok(())
    }
}
