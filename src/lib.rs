//! Branch Navigator - an interactive picker for recently visited git branches.
//!
//! Recent branches are read from the reflog (falling back to commit-date order),
//! shown in a keystroke-driven list, and the chosen one is checked out, merged
//! into the current branch, or deleted.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Git command execution behind a replaceable runner
//! - Recent-branch discovery
//! - The selection terminal and color themes
//! - Error handling and result types
//!
//! The end-to-end flow lives in [`commands::navigate`].

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Actions and options
    Action,
    ActionOptions,
    // Error handling
    BranchNavigatorError,
    // Branch discovery
    BranchNavigator,
    BranchSelector,
    // Command execution
    CommandOutput,
    CommandRunner,
    GitCli,
    // Git operations
    GitRepo,
    MergeOptions,
    RecentBranches,
    Result,
    // UI
    SelectionTerminal,
    Theme,
    UiConfig,
};
