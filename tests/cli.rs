//! Drives the binary through failure paths that never reach the card service.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("readme-cards").unwrap();
    cmd.current_dir(dir)
        .env_remove("INPUT_CARD")
        .env_remove("INPUT_OPTIONS")
        .env_remove("INPUT_PATH")
        .env_remove("GITHUB_REPOSITORY_OWNER")
        .env_remove("GITHUB_OUTPUT")
        .env_remove("READMECARDS_LOG")
        .env("GITHUB_ACTIONS", "false")
        .env("READMECARDS_BASE_URL", "http://127.0.0.1:9");
    cmd
}

#[test]
fn gist_without_id_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .env("INPUT_CARD", "gist")
        .env("INPUT_OPTIONS", "username=alice")
        .assert()
        .failure()
        .stderr(predicate::str::contains("id is required for the gist card."));
    assert!(!dir.path().join("profile").exists());
}

#[test]
fn unsupported_card_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .args(["--card", "Repo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported card type: repo"));
}

#[test]
fn missing_card_input_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .env("INPUT_CARD", "")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Input required and not supplied: card",
        ));
}

#[test]
fn failures_are_annotated_inside_actions() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .env("GITHUB_ACTIONS", "true")
        .args(["--card", "pin", "--options", "username=readme-tools"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "::error::repo is required for the pin card.",
        ));
}

#[test]
fn invalid_json_options_fail() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .args(["--card", "stats", "--options", "{bad json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in options."));
}

#[test]
fn owner_fallback_is_annotated_as_warning() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .env("GITHUB_ACTIONS", "true")
        .env("GITHUB_REPOSITORY_OWNER", "octocat")
        .args(["--card", "gist"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "::warning::username not provided; defaulting to repository owner.",
        ))
        .stdout(predicate::str::contains(
            "::error::id is required for the gist card.",
        ));
}

#[test]
fn explicit_username_raises_no_warning() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .env("GITHUB_ACTIONS", "true")
        .env("GITHUB_REPOSITORY_OWNER", "octocat")
        .args(["--card", "gist", "--options", "username=alice"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("::warning::").not());
}

#[test]
fn warnings_stay_logs_outside_actions() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .env("GITHUB_REPOSITORY_OWNER", "octocat")
        .args(["--card", "gist"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("::warning::").not())
        .stderr(predicate::str::contains(
            "username not provided; defaulting to repository owner.",
        ));
}
