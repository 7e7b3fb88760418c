//! Core functionality for the branch-navigator tool.
//!
//! This module provides the fundamental building blocks: running git, reading
//! branch history, the selection terminal, error handling, and UI styling.

pub mod config;
pub mod error;
pub mod git;
pub mod navigator;
pub mod output;
pub mod reflog_parser;
pub mod runner;
pub mod state;
pub mod terminal;
pub mod theme;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{BranchNavigatorError, Result};

// === Command execution ===
// The seam between the tool and the git executable
pub use runner::{CommandOutput, CommandRunner, GitCli};

// === Git operations ===
// Branch queries and the checkout/merge/delete operations built on a runner
pub use git::{
    DeleteOptions, DeleteOutcome, FastForward, GitRepo, MergeOptions, MergeOutcome,
    OperationOutcome,
};

// === Reflog parsing ===
// Turns `git reflog --format=%gs` lines into branch names, newest first
pub use reflog_parser::ReflogParser;

// === Branch discovery ===
// Recent branches from the reflog with a commit-date fallback
pub use navigator::{BranchNavigator, BranchSource, RecentBranches};

// === State management ===
// Actions, options and the values passed between selection and execution
pub use state::{Action, ActionOptions, BranchCandidate, SelectionResult, DEFAULT_LIMIT};

// === Selection terminal ===
// Raw-mode keystroke loop for picking a branch
pub use terminal::{ActionDetails, BranchSelector, RawModeGuard, SelectionTerminal};

// === Color system ===
// Named color themes and environment-driven UI configuration
pub use config::{UiConfig, THEME_ENV_VAR};
pub use theme::{Style, Theme, THEME_NAMES};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_confirm_prompt, print_error, print_if_not_empty};
