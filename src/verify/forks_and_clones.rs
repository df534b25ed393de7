//! Fork challenge: origin points at the learner's fork, upstream at the
//! canonical tutorial repository. Both remotes present implies the fork
//! and clone happened.

use std::path::Path;

use regex::Regex;

use super::{
    require_directory, Reporter, VerifierOutcome, VerifyContext, TUTORIAL_REPO, UPSTREAM_OWNER,
};

/// Regex matching a remote line that points at `github.com/<owner>/…`,
/// over both SSH (`github.com:`) and HTTPS (`github.com/`) URL forms.
fn owner_pattern(owner: &str) -> Regex {
    Regex::new(&format!(r"github\.com[:/]{}/", regex::escape(owner)))
        .expect("owner pattern is a valid regex")
}

/// Verify the two-remote topology of a fork-and-clone.
pub fn verify(ctx: &VerifyContext, dir: &Path, list: &mut Reporter) -> VerifierOutcome {
    if !require_directory(dir, "Path is not a directory", list) {
        return VerifierOutcome::Incomplete;
    }

    let username = match ctx.git.read_config("user.username", Some(dir)) {
        Ok(value) => value,
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            return VerifierOutcome::Incomplete;
        }
    };

    let output = match ctx.git.run(&["remote", "-v"], Some(dir)) {
        Ok(output) => output,
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            return VerifierOutcome::Incomplete;
        }
    };

    check_remotes(output.trimmed(), &username, list)
}

/// Evaluate `git remote -v` output: exactly two remotes, origin at the
/// learner's fork, upstream at the canonical owner.
fn check_remotes(output: &str, username: &str, list: &mut Reporter) -> VerifierOutcome {
    let lines: Vec<&str> = output.lines().collect();
    // Two remotes show as four lines (fetch and push per remote).
    if lines.len() != 4 {
        list.report("Not finding 2 remotes set up.", false);
        return VerifierOutcome::Incomplete;
    }

    // One line per remote is enough; remotes list alphabetically so the
    // first line is origin's and the last is upstream's.
    let mut failures = 0;
    for line in [lines[0], lines[3]] {
        if line.contains("origin") {
            if owner_pattern(username).is_match(line) {
                list.report("Origin points to your fork!", true);
            } else {
                failures += 1;
                list.report(
                    format!("Origin remote not pointing to {username}/{TUTORIAL_REPO}"),
                    false,
                );
            }
        }
        if line.contains("upstream") {
            if owner_pattern(UPSTREAM_OWNER).is_match(line) {
                list.report("Upstream remote set up!", true);
            } else {
                failures += 1;
                list.report(
                    format!("Upstream remote not pointing to {UPSTREAM_OWNER}/{TUTORIAL_REPO}"),
                    false,
                );
            }
        }
    }

    if failures == 0 {
        VerifierOutcome::Complete
    } else {
        VerifierOutcome::Incomplete
    }
}
