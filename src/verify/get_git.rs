//! Setup challenge: a configured email, a configured name, an installed Git.

use std::path::Path;

use super::{Reporter, VerifierOutcome, VerifyContext};

const TOTAL: usize = 3;

/// Verify local Git setup. Runs config reads in the given directory
/// (the CLI passes the user's home directory).
pub fn verify(ctx: &VerifyContext, dir: &Path, list: &mut Reporter) -> VerifierOutcome {
    let mut counter = 0;

    let email = match ctx.git.read_config("user.email", Some(dir)) {
        Ok(value) => value,
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            return VerifierOutcome::Incomplete;
        }
    };
    if email.is_empty() {
        list.report("No email found.", false);
        return VerifierOutcome::Incomplete;
    }
    counter += 1;
    list.report("Email Added", true);

    let name = match ctx.git.read_config("user.name", Some(dir)) {
        Ok(value) => value,
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            return VerifierOutcome::Incomplete;
        }
    };
    if name.is_empty() {
        list.report("No name found.", false);
        return VerifierOutcome::Incomplete;
    }
    counter += 1;
    list.report("Name Added!", true);

    match ctx.git.run(&["--version"], Some(dir)) {
        Ok(output) if is_git_version(output.trimmed()) => {
            counter += 1;
            list.report("Found Git installed.", true);
        }
        Ok(_) => {
            list.report("Found no Git installed.", false);
        }
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            return VerifierOutcome::Incomplete;
        }
    }

    if counter == TOTAL {
        VerifierOutcome::Complete
    } else {
        VerifierOutcome::Incomplete
    }
}

/// Whether `--version` output looks like a Git version banner.
fn is_git_version(output: &str) -> bool {
    output.contains("git version")
}
