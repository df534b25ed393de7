//! CLI smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cairn() -> (TempDir, Command) {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("cairn").unwrap();
    cmd.env("CAIRN_PROGRESS_FILE", temp.path().join("progress.json"))
        .env("NO_COLOR", "1");
    (temp, cmd)
}

#[test]
fn list_shows_every_challenge() {
    let (_temp, mut cmd) = cairn();
    let mut assert = cmd.arg("list").assert().success();
    for id in [
        "get_git",
        "repository",
        "commit_to_it",
        "githubbin",
        "remote_control",
        "forks_and_clones",
        "branches_arent_just_for_birds",
        "its_a_small_world",
        "requesting_you_pull_please",
        "merge_tada",
        "pull_never_out_of_date",
    ] {
        assert = assert.stdout(predicate::str::contains(id));
    }
}

#[test]
fn status_on_a_fresh_store_shows_nothing_complete() {
    let (_temp, mut cmd) = cairn();
    cmd.arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 11 complete"));
}

#[test]
fn verify_rejects_an_unknown_challenge() {
    let (_temp, mut cmd) = cairn();
    cmd.args(["verify", "rebase_in_peace"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown challenge"));
}

#[test]
fn verify_reports_a_missing_directory() {
    let (_temp, mut cmd) = cairn();
    cmd.args([
        "verify",
        "repository",
        "--directory",
        "/nonexistent/cairn-smoke-test",
    ])
    .assert()
    .code(1)
    .stdout(predicate::str::contains("Path is not a directory"));
}

#[test]
fn verify_fails_cleanly_on_an_untracked_folder() {
    let (_temp, mut cmd) = cairn();
    let plain = TempDir::new().unwrap();
    cmd.args(["verify", "repository", "--directory"])
        .arg(plain.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "This folder is not being tracked by Git.",
        ));
}

#[test]
fn reset_requires_a_target() {
    let (_temp, mut cmd) = cairn();
    cmd.arg("reset")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Specify a challenge id or --all"));
}

#[test]
fn reset_all_with_yes_clears_the_store() {
    let temp = TempDir::new().unwrap();
    let progress = temp.path().join("progress.json");

    let mut status = Command::cargo_bin("cairn").unwrap();
    status
        .env("CAIRN_PROGRESS_FILE", &progress)
        .env("NO_COLOR", "1")
        .args(["reset", "--all", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All challenges cleared."));
}
