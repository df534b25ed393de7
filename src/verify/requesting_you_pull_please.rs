//! Pull-request challenge: a merged pull request from the learner against
//! the upstream tutorial repository.

use std::path::Path;

use super::{Reporter, VerifierOutcome, VerifyContext};

/// Verify a merged pull request via the helper service.
pub fn verify(ctx: &VerifyContext, dir: &Path, list: &mut Reporter) -> VerifierOutcome {
    let username = match ctx.git.read_config("user.username", Some(dir)) {
        Ok(value) => value,
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            return VerifierOutcome::Incomplete;
        }
    };

    match ctx.api.pull_request(&username) {
        Ok(true) => {
            list.report("Found your pull request!", true);
            VerifierOutcome::Complete
        }
        Ok(false) => {
            list.report(
                format!(
                    "No merged pull request found for {username}. If you did make \
                     a pull request, return to its website to see comments."
                ),
                false,
            );
            VerifierOutcome::Incomplete
        }
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            VerifierOutcome::Incomplete
        }
    }
}
