use crate::commands::navigate::BranchOperations;
use crate::core::{error::Result, git::MergeOptions, print_if_not_empty};
use std::io::Write;

/// Merge `branch` into the current branch.
///
/// git's stdout always comes first. Its stderr is shown on success too, since
/// git may warn on a merge that otherwise worked. On failure the error itself is
/// only shown when it adds something beyond the stderr already printed.
pub fn execute_merge(
    git: &dyn BranchOperations,
    out: &mut dyn Write,
    err_out: &mut dyn Write,
    branch: &str,
    options: MergeOptions,
) -> Result<()> {
    let outcome = git.merge(branch, options)?;
    print_if_not_empty(out, &outcome.stdout)?;

    let stderr = outcome.stderr.trim();
    let Some(failure) = outcome.failure else {
        print_if_not_empty(err_out, stderr)?;
        return Ok(());
    };

    if stderr.is_empty() {
        return Err(failure);
    }

    writeln!(err_out, "{stderr}")?;
    if failure.to_string().contains(stderr) {
        Err(failure.reported())
    } else {
        Err(failure)
    }
}
