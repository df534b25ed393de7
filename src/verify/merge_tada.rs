//! Merge challenge: the learner merged their branch and deleted it.

use std::path::Path;

use super::{require_directory, Reporter, VerifierOutcome, VerifyContext};

const TOTAL: usize = 2;

/// Verify a merge happened and the per-user branch is gone.
///
/// The merge check soft-fails so the branch-deletion check still reports.
pub fn verify(ctx: &VerifyContext, dir: &Path, list: &mut Reporter) -> VerifierOutcome {
    let mut counter = 0;

    if !require_directory(dir, "Path is not a directory", list) {
        return VerifierOutcome::Incomplete;
    }

    match ctx.git.run(&["reflog", "-10"], Some(dir)) {
        Ok(output) => {
            if output.trimmed().contains("merge") {
                counter += 1;
                list.report("Branch has been merged!", true);
            } else {
                list.report("No merge in the history.", false);
            }
        }
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            return VerifierOutcome::Incomplete;
        }
    }

    let username = match ctx.git.read_config("user.username", Some(dir)) {
        Ok(value) => value,
        Err(_) => {
            list.report("Could not find username", false);
            return VerifierOutcome::Incomplete;
        }
    };

    let output = match ctx.git.run(&["branch"], Some(dir)) {
        Ok(output) => output,
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            return VerifierOutcome::Incomplete;
        }
    };

    let branch_name = format!("add-{username}");
    if (ctx.matches)(output.trimmed(), &branch_name) {
        list.report("Uh oh, branch is still there.", false);
    } else {
        counter += 1;
        list.report("Branch deleted!", true);
    }

    if counter == TOTAL {
        VerifierOutcome::Complete
    } else {
        VerifierOutcome::Incomplete
    }
}
