//! Branch challenge: a branch named after the learner, pushed, with their
//! file added under the contributors directory.

use std::fs;
use std::path::{Path, PathBuf};

use super::{require_directory, Reporter, VerifierOutcome, VerifyContext};
use crate::verify::remote_control::PUSH_MARKER;

const TOTAL: usize = 3;

/// Verify the branch name, the push, and the contributors file.
///
/// The first two checks soft-fail: a misnamed branch still gets its push
/// history inspected (against the branch that actually exists), and the
/// file check runs regardless, so the learner sees everything wrong in
/// one pass.
pub fn verify(ctx: &VerifyContext, dir: &Path, list: &mut Reporter) -> VerifierOutcome {
    let mut counter = 0;

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

    let head = match ctx.git.run(&["rev-parse", "--abbrev-ref", "HEAD"], Some(dir)) {
        Ok(output) => output.trimmed().to_string(),
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            return VerifierOutcome::Incomplete;
        }
    };

    let expected = format!("add-{username}");
    if (ctx.matches)(&head, &expected) {
        counter += 1;
        list.report("Found branch as expected!", true);
    } else {
        list.report(format!("Branch name expected: {expected}"), false);
    }

    // Push check runs against the branch that is actually checked out.
    let remote_ref = format!("origin/{head}");
    match ctx.git.run(&["reflog", "show", &remote_ref], Some(dir)) {
        Ok(output) => {
            if output.stdout.contains(PUSH_MARKER) {
                counter += 1;
                list.report("Changes have been pushed!", true);
            } else {
                list.report("Changes not pushed", false);
            }
        }
        Err(e) => {
            list.report(format!("Error: {e}"), false);
            return VerifierOutcome::Incomplete;
        }
    }

    match find_contributor_file(dir, &username, ctx.matches) {
        Ok(true) => {
            counter += 1;
            list.report("File in contributors folder!", true);
        }
        Ok(false) => {
            list.report("File not in contributors folder!", false);
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

/// Whether a file whose name carries the username exists in the
/// contributors directory.
///
/// When the target path itself already lives under `contributors`, it is
/// searched directly instead of looking for a nested subdirectory.
fn find_contributor_file(
    dir: &Path,
    username: &str,
    matches: super::TextMatch,
) -> std::io::Result<bool> {
    let users_path = contributors_path(dir);
    let mut names = Vec::new();
    for entry in fs::read_dir(users_path)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    let all_files = names.join(",");
    Ok(matches(&all_files, username))
}

fn contributors_path(dir: &Path) -> PathBuf {
    if dir.to_string_lossy().contains("contributors") {
        dir.to_path_buf()
    } else {
        dir.join("contributors")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::contains;
    use tempfile::TempDir;

    #[test]
    fn finds_file_named_after_username() {
        let temp = TempDir::new().unwrap();
        let contributors = temp.path().join("contributors");
        fs::create_dir(&contributors).unwrap();
        fs::write(contributors.join("add-octocat.txt"), "hi").unwrap();

        assert!(find_contributor_file(temp.path(), "octocat", contains).unwrap());
    }

    #[test]
    fn missing_file_reports_false() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("contributors")).unwrap();

        assert!(!find_contributor_file(temp.path(), "octocat", contains).unwrap());
    }

    #[test]
    fn missing_contributors_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(find_contributor_file(temp.path(), "octocat", contains).is_err());
    }

    #[test]
    fn path_already_inside_contributors_is_searched_directly() {
        let temp = TempDir::new().unwrap();
        let contributors = temp.path().join("contributors");
        fs::create_dir(&contributors).unwrap();
        fs::write(contributors.join("octocat.md"), "hi").unwrap();

        assert!(find_contributor_file(&contributors, "octocat", contains).unwrap());
    }

    #[test]
    fn substring_policy_matches_longer_names_too() {
        let temp = TempDir::new().unwrap();
        let contributors = temp.path().join("contributors");
        fs::create_dir(&contributors).unwrap();
        fs::write(contributors.join("add-samantha.txt"), "hi").unwrap();

        // The historical containment policy: "sam" matches "samantha".
        assert!(find_contributor_file(temp.path(), "sam", contains).unwrap());
    }
}
