//! Collaboration challenge: Reporobot has been added as a collaborator
//! on the learner's fork.

use std::path::Path;

use super::{Reporter, VerifierOutcome, VerifyContext};

/// Verify Reporobot's collaborator access via the helper service.
pub fn verify(ctx: &VerifyContext, dir: &Path, list: &mut Reporter) -> VerifierOutcome {
    let username = match ctx.git.read_config("user.username", Some(dir)) {
        Ok(value) => value,
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            return VerifierOutcome::Incomplete;
        }
    };

    match ctx.api.collab(&username) {
        Ok(true) => {
            list.report("Reporobot has been added!", true);
            VerifierOutcome::Complete
        }
        Ok(false) => {
            list.report("Reporobot doesn't have access to the fork", false);
            VerifierOutcome::Incomplete
        }
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            VerifierOutcome::Incomplete
        }
    }
}
