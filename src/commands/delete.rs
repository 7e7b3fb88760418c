use crate::commands::navigate::BranchOperations;
use crate::core::{
    error::{BranchNavigatorError, Result},
    git::DeleteOptions,
    print_confirm_prompt, print_if_not_empty,
};
use std::io::{BufRead, Write};

/// Delete `branch`, offering a forced retry when git reports it is not fully merged.
///
/// The forced delete only ever runs after an explicit `y`/`yes` answer.
pub fn execute_delete(
    git: &dyn BranchOperations,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err_out: &mut dyn Write,
    branch: &str,
) -> Result<()> {
    let outcome = git.delete(branch, DeleteOptions::default())?;

    match outcome.failure {
        None => {
            print_if_not_empty(out, &outcome.stdout)?;
            print_if_not_empty(err_out, &outcome.stderr)?;
            Ok(())
        }
        Some(BranchNavigatorError::BranchNotFullyMerged { .. }) => {
            print_if_not_empty(err_out, &outcome.stderr)?;
            if !confirm_deletion(input, out, branch)? {
                return Err(BranchNavigatorError::deletion_aborted());
            }

            log::debug!("force deleting '{branch}' after confirmation");
            let forced = git.delete(branch, DeleteOptions { force: true })?;
            if let Some(failure) = forced.failure {
                print_if_not_empty(err_out, &forced.stderr)?;
                return Err(failure);
            }

            print_if_not_empty(out, &forced.stdout)?;
            print_if_not_empty(err_out, &forced.stderr)?;
            Ok(())
        }
        Some(failure) => {
            print_if_not_empty(err_out, &outcome.stderr)?;
            Err(failure)
        }
    }
}

/// Ask before force-deleting. Anything but `y` or `yes` (any case) is a no,
/// including an empty line or end of input.
fn confirm_deletion(input: &mut dyn BufRead, out: &mut dyn Write, branch: &str) -> Result<bool> {
    print_confirm_prompt(
        out,
        &format!("Branch '{branch}' is not fully merged. Delete anyway?"),
    )?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
