//! Commit challenge: the learner has committed their changes.

use std::path::Path;

use super::{require_directory, Reporter, VerifierOutcome, VerifyContext};

/// Three-way classification of `git status` output.
///
/// The branches are checked in order and are mutually exclusive: a status
/// mentioning the initial commit means nothing has ever been committed,
/// a clean tree means the work is committed, anything else means changes
/// are still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitState {
    /// No commit exists yet.
    NoCommitsYet,
    /// Working tree clean, changes committed.
    Committed,
    /// Uncommitted changes remain.
    ChangesPending,
}

/// Classify trimmed `git status` output.
pub fn classify(status: &str) -> CommitState {
    if status.contains("Initial commit") {
        CommitState::NoCommitsYet
    } else if status.contains("nothing to commit") {
        CommitState::Committed
    } else {
        CommitState::ChangesPending
    }
}

/// Verify committed changes exist in the target repository.
pub fn verify(ctx: &VerifyContext, dir: &Path, list: &mut Reporter) -> VerifierOutcome {
    if !require_directory(dir, "Path is not a directory.", list) {
        return VerifierOutcome::Incomplete;
    }

    let output = match ctx.git.run(&["status"], Some(dir)) {
        Ok(output) => output,
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            return VerifierOutcome::Incomplete;
        }
    };

    match classify(output.trimmed()) {
        CommitState::NoCommitsYet => {
            list.report("Can't find committed changes.", false);
            VerifierOutcome::Incomplete
        }
        CommitState::Committed => {
            list.report("Changes have been committed!", true);
            VerifierOutcome::Complete
        }
        CommitState::ChangesPending => {
            list.report("Seems there are changes to commit still.", false);
            VerifierOutcome::Incomplete
        }
    }
}
