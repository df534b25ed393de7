//! Pull challenge: the local clone is up to date with its remote.
//!
//! A dry-run fetch that prints nothing means there is nothing to pull.

use std::path::Path;

use super::{Reporter, VerifierOutcome, VerifyContext};

/// Verify there are no remote changes pending.
pub fn verify(ctx: &VerifyContext, dir: &Path, list: &mut Reporter) -> VerifierOutcome {
    let output = match ctx.git.run(&["fetch", "--dry-run"], Some(dir)) {
        Ok(output) => output,
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            return VerifierOutcome::Incomplete;
        }
    };

    if up_to_date(&output.stdout, &output.stderr) {
        list.report("Up to date!", true);
        VerifierOutcome::Complete
    } else {
        list.report("There are changes to pull in.", false);
        VerifierOutcome::Incomplete
    }
}

/// A silent dry-run fetch means up to date.
///
/// Fetch writes its ref summary to stderr, so both streams count as
/// "output" here.
fn up_to_date(stdout: &str, stderr: &str) -> bool {
    stdout.trim().is_empty() && stderr.trim().is_empty()
}
