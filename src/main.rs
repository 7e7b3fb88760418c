use branch_navigator::commands::navigate::{run, Dependencies};
use branch_navigator::core::{
    error::{BranchNavigatorError, Result},
    print_error, Action, ActionDetails, ActionOptions, BranchNavigator, FastForward, GitCli,
    GitRepo, MergeOptions, SelectionTerminal, UiConfig, DEFAULT_LIMIT,
};
use clap::Parser;
use std::io::{self, IsTerminal};

#[derive(Parser)]
#[command(name = "branch-navigator")]
#[command(about = "Pick a recently visited git branch and check it out, merge it, or delete it")]
#[command(version = "0.1.0")]
struct Cli {
    /// Check out the selected branch (default)
    #[arg(short = 'c', long = "checkout")]
    checkout: bool,

    /// Merge the selected branch into the current branch
    #[arg(short = 'm', long = "merge")]
    merge: bool,

    /// Delete the selected local branch
    #[arg(short = 'd', long = "delete")]
    delete: bool,

    /// Number of recent branches to list
    #[arg(short = 'n', long = "limit", default_value_t = DEFAULT_LIMIT as i64, allow_negative_numbers = true)]
    limit: i64,

    /// Refuse to merge unless it can be fast-forwarded
    #[arg(long = "ff-only", conflicts_with = "no_ff")]
    ff_only: bool,

    /// Always create a merge commit
    #[arg(long = "no-ff")]
    no_ff: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

impl Cli {
    fn options(&self) -> Result<ActionOptions> {
        let action = Action::from_flags(self.checkout, self.merge, self.delete)?;
        let fast_forward = if self.ff_only {
            FastForward::Only
        } else if self.no_ff {
            FastForward::Never
        } else {
            FastForward::Default
        };
        ActionOptions::new(action, self.limit, MergeOptions { fast_forward })
    }
}

/// Locate the enclosing repository and return a client running git in its work tree
fn open_repository() -> Result<GitRepo> {
    let repo = git2::Repository::discover(".").map_err(|err| {
        log::debug!("repository discovery failed: {err}");
        BranchNavigatorError::NotInGitRepo
    })?;
    let workdir = repo.workdir().ok_or_else(|| {
        BranchNavigatorError::configuration("bare repositories have no branches to switch to")
    })?;
    log::debug!("using work tree {}", workdir.display());
    Ok(GitRepo::new(GitCli::in_dir(workdir)))
}

fn fail(err: BranchNavigatorError) -> ! {
    if let Err(write_err) = print_error(&mut io::stderr(), &err.to_string()) {
        log::warn!("Failed to report error: {write_err}");
    }
    std::process::exit(err.exit_code());
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag; RUST_LOG still wins when set
    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let options = cli.options().unwrap_or_else(|err| fail(err));
    let git = open_repository().unwrap_or_else(|err| fail(err));
    let navigator = BranchNavigator::new(&git);

    let stdin = io::stdin();
    let mut selector = SelectionTerminal::new(io::stdout(), ActionDetails::from(options.action))
        .with_theme(UiConfig::from_env().theme)
        .with_raw_mode(stdin.is_terminal());
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut error = io::stderr();

    let code = run(
        &options,
        Dependencies {
            git: &git,
            navigator: &navigator,
            selector: &mut selector,
            input: &mut input,
            output: &mut output,
            error: &mut error,
        },
    );
    std::process::exit(code);
}
