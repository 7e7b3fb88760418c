//! Git repository management and setup utilities
//!
//! Provides functions for creating test repositories with a known branch
//! history, so the reflog and commit dates are predictable.

#![allow(dead_code)]

use branch_navigator::core::error::{BranchNavigatorError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run git in the repository and return its trimmed stdout
    ///
    /// A non-zero exit is an error so setup mistakes fail loudly.
    pub fn git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()?;
        if !output.status.success() {
            return Err(BranchNavigatorError::git_command_failed(
                args,
                String::from_utf8_lossy(&output.stderr),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    pub fn current_branch(&self) -> Result<String> {
        self.git(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    pub fn branch_exists(&self, name: &str) -> bool {
        self.git(&["show-ref", "--verify", "--quiet", &format!("refs/heads/{name}")])
            .is_ok()
    }

    pub fn checkout(&self, name: &str) -> Result<()> {
        self.git(&["checkout", name]).map(|_| ())
    }

    /// Create `name` at HEAD without switching to it
    pub fn create_branch(&self, name: &str) -> Result<()> {
        self.git(&["branch", name]).map(|_| ())
    }

    /// Write `filename` and commit it on the current branch
    pub fn commit_file(&self, filename: &str, content: &str) -> Result<()> {
        fs::write(self.path.join(filename), content)?;
        self.git(&["add", filename])?;
        self.git(&["commit", "-m", &format!("Add {filename}")])?;
        Ok(())
    }
}

/// Sets up a fresh repository on `main` with one commit
///
/// HEAD is pointed at `main` explicitly so the result does not depend on
/// the machine's `init.defaultBranch`.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo = TestRepo {
        path: temp_dir.path().to_path_buf(),
        temp_dir,
    };

    repo.git(&["init", "--quiet"])?;
    repo.git(&["symbolic-ref", "HEAD", "refs/heads/main"])?;
    repo.git(&["config", "user.name", "Test User"])?;
    repo.git(&["config", "user.email", "test@example.com"])?;
    repo.git(&["config", "commit.gpgsign", "false"])?;
    repo.commit_file("initial.txt", "initial content\n")?;

    Ok(repo)
}

/// Scenario: `feature` holds one commit that `main` lacks, and the user
/// has visited it before returning to `main`
pub fn setup_repo_with_visited_feature() -> Result<TestRepo> {
    let repo = setup_test_repo()?;
    repo.create_branch("feature")?;
    repo.checkout("feature")?;
    repo.commit_file("feature.txt", "feature work\n")?;
    repo.checkout("main")?;
    Ok(repo)
}

/// A directory that is not inside any repository
pub fn setup_plain_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}
