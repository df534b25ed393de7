//! Repository challenge: the chosen folder is tracked by Git.

use std::path::Path;

use super::{require_directory, Reporter, VerifierOutcome, VerifyContext};

/// Verify the target directory is a Git repository.
///
/// `git status` exiting non-zero here is not a transport error; outside a
/// work tree that exit IS the answer.
pub fn verify(ctx: &VerifyContext, dir: &Path, list: &mut Reporter) -> VerifierOutcome {
    if !require_directory(dir, "Path is not a directory", list) {
        return VerifierOutcome::Incomplete;
    }

    match ctx.git.run(&["status"], Some(dir)) {
        Err(_) => {
            list.report("This folder is not being tracked by Git.", false);
            VerifierOutcome::Incomplete
        }
        Ok(output) if on_branch(output.trimmed()) => {
            list.report("This is a Git repository!", true);
            VerifierOutcome::Complete
        }
        Ok(_) => {
            list.report("This folder isn't being tracked by Git.", false);
            VerifierOutcome::Incomplete
        }
    }
}

/// Whether status output carries the current-branch marker.
fn on_branch(status: &str) -> bool {
    status.contains("On branch")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_with_branch_marker_passes() {
        assert!(on_branch("On branch main\nnothing to commit, working tree clean"));
        assert!(on_branch("On branch add-jlord\nChanges not staged for commit:"));
    }

    #[test]
    fn detached_or_foreign_output_fails() {
        assert!(!on_branch("HEAD detached at 1a2b3c4"));
        assert!(!on_branch(""));
    }
}
