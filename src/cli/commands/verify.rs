//! Verify command implementation.
//!
//! Runs one challenge's verifier and renders the result list. Exit code 0
//! means the challenge completed; 1 means not yet.

use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::api::ApiClient;
use crate::challenges::ChallengeId;
use crate::cli::args::VerifyArgs;
use crate::cli::style::{completed_banner, StatusKind};
use crate::error::Result;
use crate::git::GitRunner;
use crate::progress::ProgressStore;
use crate::verify::{run_challenge, Reporter, VerifyContext};

pub fn run(args: &VerifyArgs, store: &ProgressStore, quiet: bool) -> Result<i32> {
    let id: ChallengeId = args.challenge.parse()?;
    store.seed_if_missing()?;

    let dir = target_directory(id, args.directory.clone());

    let git = GitRunner::resolve();
    let api = ApiClient::new();
    let ctx = VerifyContext::new(&git, &api);
    let mut list = Reporter::new();

    // One verification at a time; the store has no locking.
    let spinner = start_spinner(id, quiet);
    let outcome = run_challenge(id, &ctx, &dir, &mut list, store);
    spinner.finish_and_clear();

    for entry in list.entries() {
        let kind = if entry.passed {
            StatusKind::Pass
        } else {
            StatusKind::Fail
        };
        println!("{}", kind.line(&entry.message));
    }

    if outcome.is_complete() {
        if !quiet {
            println!();
            println!("{}", completed_banner());
        }
        Ok(0)
    } else {
        if !quiet {
            println!();
            println!("Challenge not complete. Make the changes and verify again.");
        }
        Ok(1)
    }
}

/// Where the verifier should run.
///
/// Repository challenges default to the current directory; setup and
/// account challenges read global config, so they run from home.
fn target_directory(id: ChallengeId, explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if id.needs_directory() {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    } else {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}

fn start_spinner(id: ChallengeId, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("static spinner template"),
    );
    spinner.set_message(format!("Verifying {}...", id.title()));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directory_wins() {
        let dir = target_directory(ChallengeId::Repository, Some(PathBuf::from("/tmp/x")));
        assert_eq!(dir, PathBuf::from("/tmp/x"));
    }

    #[test]
    fn setup_challenges_default_to_home() {
        let dir = target_directory(ChallengeId::GetGit, None);
        assert_eq!(dir, dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
    }

    #[test]
    fn repository_challenges_default_to_current_dir() {
        let dir = target_directory(ChallengeId::Repository, None);
        assert_eq!(dir, std::env::current_dir().unwrap());
    }
}
