//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`BranchNavigatorError`] which covers every failure mode of
//! branch-navigator, from invalid command line input to git refusing to delete a
//! branch. It uses `thiserror` for ergonomic error definitions and includes
//! constructor helpers for the common cases.
//!
//! # Public API
//! - [`BranchNavigatorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, BranchNavigatorError>`
//!
//! # Error Categories
//! - **Configuration**: missing repository, unresolvable HEAD, bare repository
//! - **Validation**: non-positive limit, conflicting action flags (exit code 2)
//! - **Git operations**: generic pass-through of git's stderr
//! - **Branch deletion**: not fully merged, current branch, aborted by the user

use thiserror::Error;

/// Domain-specific error types for branch-navigator
#[derive(Error, Debug)]
pub enum BranchNavigatorError {
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("{message}")]
    Configuration { message: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("branch name is required")]
    BranchNameRequired,

    /// git exited non-zero; `stderr` is kept verbatim so the user sees git's guidance
    #[error("{command}: {stderr}")]
    GitCommandFailed { command: String, stderr: String },

    #[error("branch '{branch}' is not fully merged")]
    BranchNotFullyMerged { branch: String },

    #[error("cannot delete branch '{branch}': it is currently checked out")]
    DeleteCurrentBranch { branch: String },

    #[error("{message}")]
    Aborted { message: String },

    /// A failure whose diagnostics have already been written to the error stream.
    #[error("{0}")]
    Reported(Box<BranchNavigatorError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),
}

/// Convenience type alias for Results using BranchNavigatorError
pub type Result<T> = std::result::Result<T, BranchNavigatorError>;

impl BranchNavigatorError {
    /// Create a configuration error with a specific message
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a validation error with a specific message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a git command failure from the argument vector and captured stderr
    pub fn git_command_failed(args: &[&str], stderr: impl AsRef<str>) -> Self {
        let stderr = stderr.as_ref().trim();
        Self::GitCommandFailed {
            command: format!("git {}", args.join(" ")),
            stderr: if stderr.is_empty() {
                "exited with a non-zero status".to_string()
            } else {
                stderr.to_string()
            },
        }
    }

    pub fn branch_not_fully_merged(branch: impl Into<String>) -> Self {
        Self::BranchNotFullyMerged {
            branch: branch.into(),
        }
    }

    pub fn delete_current_branch(branch: impl Into<String>) -> Self {
        Self::DeleteCurrentBranch {
            branch: branch.into(),
        }
    }

    /// The user declined to force-delete an unmerged branch
    pub fn deletion_aborted() -> Self {
        Self::Aborted {
            message: "branch deletion aborted".to_string(),
        }
    }

    /// Mark an error as already shown to the user
    pub fn reported(self) -> Self {
        match self {
            Self::Reported(_) => self,
            other => Self::Reported(Box::new(other)),
        }
    }

    pub fn is_reported(&self) -> bool {
        matches!(self, Self::Reported(_))
    }

    /// Process exit code for this failure: 2 for invalid input, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => 2,
            Self::Reported(inner) => inner.exit_code(),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BranchNavigatorError::NotInGitRepo;
        assert_eq!(err.to_string(), "Not in a git repository");
    }

    #[test]
    fn test_git_command_failed_keeps_stderr() {
        let err = BranchNavigatorError::git_command_failed(
            &["checkout", "feature"],
            "error: pathspec 'feature' did not match\n",
        );
        assert_eq!(
            err.to_string(),
            "git checkout feature: error: pathspec 'feature' did not match"
        );
    }

    #[test]
    fn test_git_command_failed_without_stderr() {
        let err = BranchNavigatorError::git_command_failed(&["merge", "topic"], "  ");
        assert_eq!(err.to_string(), "git merge topic: exited with a non-zero status");
    }

    #[test]
    fn test_deletion_aborted_message() {
        let err = BranchNavigatorError::deletion_aborted();
        assert_eq!(err.to_string(), "branch deletion aborted");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_validation_exit_code() {
        let err = BranchNavigatorError::validation("limit must be greater than 0");
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "limit must be greater than 0");
    }

    #[test]
    fn test_reported_wraps_once_and_keeps_exit_code() {
        let err = BranchNavigatorError::validation("bad").reported().reported();
        assert!(err.is_reported());
        assert_eq!(err.exit_code(), 2);
        match err {
            BranchNavigatorError::Reported(inner) => assert!(!inner.is_reported()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_delete_current_branch_message() {
        let err = BranchNavigatorError::delete_current_branch("main");
        assert!(err.to_string().contains("'main'"));
        assert!(err.to_string().contains("currently checked out"));
    }
}
