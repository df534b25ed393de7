//! GitHub account challenge: a username in Git config that exists on
//! GitHub with the same capitalization.

use std::path::Path;

use super::{Reporter, VerifierOutcome, VerifyContext};

const TOTAL: usize = 3;

/// Verify the configured username against the GitHub users endpoint.
pub fn verify(ctx: &VerifyContext, dir: &Path, list: &mut Reporter) -> VerifierOutcome {
    let mut counter = 0;

    let username = match ctx.git.read_config("user.username", Some(dir)) {
        Ok(value) => value,
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            return VerifierOutcome::Incomplete;
        }
    };
    if username.is_empty() {
        list.report("No username found.", false);
        return VerifierOutcome::Incomplete;
    }
    counter += 1;
    list.report("Username added to Git config!", true);

    let account = match ctx.api.user(&username) {
        Ok(Some(account)) => account,
        Ok(None) => {
            list.report(
                "GitHub account matching Git config username wasn't found.",
                false,
            );
            return VerifierOutcome::Incomplete;
        }
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            return VerifierOutcome::Incomplete;
        }
    };
    counter += 1;
    list.report("You're on GitHub!", true);

    // The users endpoint is case-insensitive; the containment check against
    // the canonical login is what catches a capitalization mismatch.
    if (ctx.matches)(&username, &account.login) {
        counter += 1;
        list.report("Username same on GitHub and Git config!", true);
    } else {
        list.report("GitHub & Git config usernames do not match", false);
    }

    if counter == TOTAL {
        VerifierOutcome::Complete
    } else {
        VerifierOutcome::Incomplete
    }
}
