//! Process invocation for the git executable.
//!
//! [`CommandRunner`] is the only seam between branch-navigator and the outside
//! world: it takes an argument vector and hands back stdout and stderr captured
//! separately plus a success flag. [`GitCli`] is the real implementation; tests
//! substitute in-memory runners.

use crate::core::error::Result;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured result of one git invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
        }
    }

    pub fn failure(stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
        }
    }
}

/// Runs the version-control binary with the given arguments.
///
/// Any non-zero exit is reported as `success == false`; `Err` is reserved for
/// failures to launch the process at all.
pub trait CommandRunner {
    fn run(&self, args: &[&str]) -> Result<CommandOutput>;
}

/// Runs the local `git` binary
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git inside `workdir` instead of the process working directory
    pub fn in_dir(workdir: impl AsRef<Path>) -> Self {
        Self {
            workdir: Some(workdir.as_ref().to_path_buf()),
        }
    }

    /// Build the git invocation without running it.
    ///
    /// Messages are forced to the C locale: stderr is matched against
    /// English text such as "not fully merged".
    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        cmd.args(args)
            .env("GIT_PAGER", "cat")
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("GIT_MERGE_AUTOEDIT", "no")
            .env("LC_ALL", "C");

        if let Some(workdir) = &self.workdir {
            cmd.current_dir(workdir);
        }
        cmd
    }
}

impl CommandRunner for GitCli {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = self.command(args).output()?;
        log::debug!("git {} -> {}", args.join(" "), output.status);

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        })
    }
}
