//! End-to-end flow: discover branches, let the user pick one, act on it.
//!
//! All collaborators are passed in through [`Dependencies`], so tests can drive
//! the whole flow with in-memory fakes and byte buffers.

use crate::commands::{execute_checkout, execute_delete, execute_merge};
use crate::core::{
    error::{BranchNavigatorError, Result},
    git::{DeleteOptions, DeleteOutcome, GitRepo, MergeOptions, MergeOutcome},
    navigator::RecentBranches,
    print_error,
    runner::CommandRunner,
    state::{Action, ActionOptions, BranchCandidate, SelectionResult},
    terminal::BranchSelector,
};
use std::io::{BufRead, Write};

/// The git operations the selected action may perform
pub trait BranchOperations {
    fn current_branch(&self) -> Result<String>;
    fn checkout(&self, name: &str) -> Result<String>;
    fn merge(&self, name: &str, options: MergeOptions) -> Result<MergeOutcome>;
    fn delete(&self, name: &str, options: DeleteOptions) -> Result<DeleteOutcome>;
}

impl<R: CommandRunner> BranchOperations for GitRepo<R> {
    fn current_branch(&self) -> Result<String> {
        GitRepo::current_branch(self)
    }

    fn checkout(&self, name: &str) -> Result<String> {
        GitRepo::checkout(self, name)
    }

    fn merge(&self, name: &str, options: MergeOptions) -> Result<MergeOutcome> {
        GitRepo::merge(self, name, options)
    }

    fn delete(&self, name: &str, options: DeleteOptions) -> Result<DeleteOutcome> {
        GitRepo::delete(self, name, options)
    }
}

pub struct Dependencies<'a> {
    pub git: &'a dyn BranchOperations,
    pub navigator: &'a dyn RecentBranches,
    pub selector: &'a mut dyn BranchSelector,
    pub input: &'a mut dyn BufRead,
    pub output: &'a mut dyn Write,
    pub error: &'a mut dyn Write,
}

/// Run the whole flow and return the process exit code.
///
/// Failures are written to the error stream; 2 for invalid input, 1 otherwise.
pub fn run(options: &ActionOptions, mut deps: Dependencies<'_>) -> i32 {
    match execute(options, &mut deps) {
        Ok(()) => 0,
        Err(err) => {
            if !err.is_reported() {
                if let Err(write_err) = print_error(deps.error, &err.to_string()) {
                    log::warn!("Failed to report error: {write_err}");
                }
            }
            err.exit_code()
        }
    }
}

pub fn execute(options: &ActionOptions, deps: &mut Dependencies<'_>) -> Result<()> {
    if options.limit == 0 {
        return Err(BranchNavigatorError::validation(
            "limit must be greater than 0",
        ));
    }

    let recent = deps.navigator.recent_branches(options.limit)?;
    let current = deps.git.current_branch()?;
    let candidates = BranchCandidate::list(&current, &recent);
    log::debug!("offering {} branches", candidates.len());

    let mut input = &mut *deps.input;
    let branch = match deps.selector.select(&candidates, &mut input)? {
        SelectionResult::Selected(branch) => branch,
        SelectionResult::AlreadyOn(branch) => {
            log::debug!("already on '{branch}', nothing to do");
            return Ok(());
        }
        SelectionResult::Quit => return Ok(()),
    };

    match options.action {
        Action::Checkout => execute_checkout(deps.git, deps.output, &branch),
        Action::Merge => execute_merge(deps.git, deps.output, deps.error, &branch, options.merge),
        Action::Delete => execute_delete(deps.git, deps.input, deps.output, deps.error, &branch),
    }
}
