//! Push challenge: the learner has pushed to their remote.

use std::path::Path;

use super::{require_directory, Reporter, VerifierOutcome, VerifyContext};

/// Marker the reflog carries for a ref updated by `git push`.
pub(crate) const PUSH_MARKER: &str = "update by push";

/// Verify a push is visible in the reflog of `origin/master`.
pub fn verify(ctx: &VerifyContext, dir: &Path, list: &mut Reporter) -> VerifierOutcome {
    if !require_directory(dir, "Path is not a directory", list) {
        return VerifierOutcome::Incomplete;
    }

    let output = match ctx.git.run(&["reflog", "show", "origin/master"], Some(dir)) {
        Ok(output) => output,
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            return VerifierOutcome::Incomplete;
        }
    };

    if output.trimmed().contains(PUSH_MARKER) {
        list.report("Bingo! Detected a push.", true);
        VerifierOutcome::Complete
    } else {
        list.report("No evidence of push.", false);
        VerifierOutcome::Incomplete
    }
}
