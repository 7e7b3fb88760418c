use crate::commands::navigate::BranchOperations;
use crate::core::{error::Result, print_if_not_empty};
use std::io::Write;

/// Switch to `branch` and echo git's message (or `already on '<branch>'`)
pub fn execute_checkout(
    git: &dyn BranchOperations,
    out: &mut dyn Write,
    branch: &str,
) -> Result<()> {
    let message = git.checkout(branch)?;
    print_if_not_empty(out, &message)?;
    Ok(())
}
