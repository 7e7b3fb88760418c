//! Typed git operations on top of a [`CommandRunner`].
//!
//! This module provides [`GitRepo`], which turns git's textual output into typed
//! values and recognises the failures branch-navigator reacts to (an unmerged
//! branch on delete, deleting the checked-out branch).
//!
//! # Public API
//! - [`GitRepo`]: Repository client for the current working tree
//! - [`MergeOptions`] / [`FastForward`]: Merge strategy flags
//! - [`DeleteOptions`]: Safe or forced branch deletion
//! - [`OperationOutcome`]: Captured output of a merge or delete
//!
//! # Key Features
//! - **Branch discovery**: reflog history and local branches by commit date
//! - **No-op checkouts**: checking out the current branch never runs git
//! - **Output capture**: merge and delete output is kept even when git fails

use crate::core::{
    error::{BranchNavigatorError, Result},
    reflog_parser::ReflogParser,
    runner::{CommandOutput, CommandRunner, GitCli},
};

/// git reports this on `branch -d` when commits would be lost
const NOT_FULLY_MERGED: &str = "not fully merged";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FastForward {
    /// Let git decide
    #[default]
    Default,
    /// `--ff-only`
    Only,
    /// `--no-ff`
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOptions {
    pub fast_forward: FastForward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteOptions {
    pub force: bool,
}

/// Output of a merge or delete. `failure` is set when git exited non-zero.
#[derive(Debug, Default)]
pub struct OperationOutcome {
    pub stdout: String,
    pub stderr: String,
    pub failure: Option<BranchNavigatorError>,
}

pub type MergeOutcome = OperationOutcome;
pub type DeleteOutcome = OperationOutcome;

impl OperationOutcome {
    pub fn succeeded(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            failure: None,
        }
    }

    pub fn failed(stderr: impl Into<String>, failure: BranchNavigatorError) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            failure: Some(failure),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

pub struct GitRepo<R: CommandRunner = GitCli> {
    runner: R,
}

impl<R: CommandRunner> GitRepo<R> {
    pub fn new(runner: R) -> Self {
        GitRepo { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run git and turn a non-zero exit into [`BranchNavigatorError::GitCommandFailed`]
    fn run_checked(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = self.runner.run(args)?;
        if !output.success {
            return Err(BranchNavigatorError::git_command_failed(args, &output.stderr));
        }
        Ok(output)
    }

    pub fn current_branch(&self) -> Result<String> {
        let output = self.run_checked(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        let branch = output.stdout.trim();
        if branch.is_empty() {
            return Err(BranchNavigatorError::configuration(
                "could not determine the current branch",
            ));
        }
        Ok(branch.to_string())
    }

    /// Branches the user switched to, most recent first, as recorded in the HEAD reflog.
    ///
    /// Duplicates and the current branch are kept; filtering is the navigator's job.
    pub fn branch_history(&self) -> Result<Vec<String>> {
        let output = self.run_checked(&["reflog", "show", "--format=%gs", "HEAD"])?;
        Ok(ReflogParser::parse(&output.stdout))
    }

    /// Local branch names ordered by most recent commit date
    pub fn local_branches_by_recency(&self) -> Result<Vec<String>> {
        let output = self.run_checked(&[
            "for-each-ref",
            "--format=%(refname:short)",
            "--sort=-committerdate",
            "refs/heads",
        ])?;

        Ok(output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Whether `refs/heads/<name>` exists.
    ///
    /// `show-ref --quiet` prints nothing for a missing ref, so a failure with
    /// stderr output means git could not answer rather than "no such branch".
    pub fn branch_exists(&self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }

        let reference = format!("refs/heads/{name}");
        let args = ["show-ref", "--verify", "--quiet", reference.as_str()];
        let output = self.runner.run(&args)?;

        if output.success {
            Ok(true)
        } else if output.stderr.trim().is_empty() {
            Ok(false)
        } else {
            Err(BranchNavigatorError::git_command_failed(&args, &output.stderr))
        }
    }

    /// Switch to `name`, or report `already on '<name>'` without touching the work tree
    pub fn checkout(&self, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BranchNavigatorError::BranchNameRequired);
        }

        let current = self.current_branch()?;
        if name == current {
            return Ok(format!("already on '{name}'"));
        }

        let output = self.run_checked(&["checkout", name])?;
        Ok(join_output(&output.stdout, &output.stderr))
    }

    /// Merge `name` into the current branch, keeping git's output even on failure
    pub fn merge(&self, name: &str, options: MergeOptions) -> Result<MergeOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BranchNavigatorError::BranchNameRequired);
        }

        let mut args = vec!["merge"];
        match options.fast_forward {
            FastForward::Default => {}
            FastForward::Only => args.push("--ff-only"),
            FastForward::Never => args.push("--no-ff"),
        }
        args.push(name);

        let output = self.runner.run(&args)?;
        let failure = (!output.success)
            .then(|| BranchNavigatorError::git_command_failed(&args, &output.stderr));

        Ok(OperationOutcome {
            stdout: output.stdout,
            stderr: output.stderr,
            failure,
        })
    }

    /// Delete a local branch with `branch -d`, or `branch -D` when forced.
    ///
    /// The checked-out branch is refused before git is run.
    pub fn delete(&self, name: &str, options: DeleteOptions) -> Result<DeleteOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BranchNavigatorError::BranchNameRequired);
        }

        let current = self.current_branch()?;
        if name == current {
            return Err(BranchNavigatorError::delete_current_branch(name));
        }

        let flag = if options.force { "-D" } else { "-d" };
        let args = ["branch", flag, name];
        let output = self.runner.run(&args)?;

        let failure = if output.success {
            None
        } else if !options.force && is_not_fully_merged(&output.stderr) {
            Some(BranchNavigatorError::branch_not_fully_merged(name))
        } else {
            Some(BranchNavigatorError::git_command_failed(&args, &output.stderr))
        };

        Ok(OperationOutcome {
            stdout: output.stdout,
            stderr: output.stderr,
            failure,
        })
    }
}

pub fn is_not_fully_merged(stderr: &str) -> bool {
    stderr.to_lowercase().contains(NOT_FULLY_MERGED)
}

fn join_output(stdout: &str, stderr: &str) -> String {
    [stdout.trim(), stderr.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Runner answering from a table keyed by the joined argument vector
    #[derive(Default)]
    pub struct ScriptedRunner {
        responses: HashMap<String, CommandOutput>,
        pub calls: RefCell<Vec<String>>,
    }

    impl ScriptedRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn on(mut self, args: &str, output: CommandOutput) -> Self {
            self.responses.insert(args.to_string(), output);
            self
        }

        pub fn called(&self, args: &str) -> bool {
            self.calls.borrow().iter().any(|call| call == args)
        }

        pub fn calls_starting_with(&self, prefix: &str) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|call| call.starts_with(prefix))
                .count()
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&self, args: &[&str]) -> Result<CommandOutput> {
            let key = args.join(" ");
            self.calls.borrow_mut().push(key.clone());
            Ok(self
                .responses
                .get(&key)
                .cloned()
                .unwrap_or_else(|| CommandOutput::failure(format!("unexpected git {key}"))))
        }
    }
}
