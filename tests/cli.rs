// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

//! End-to-end runs of the binary: exit codes and pipeline outcomes.

mod helpers;

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{chat_body, git, init_repo, inside_existing_repo};

/// Binary isolated from the caller's config, keys and keychain.
fn commit_ai(cwd: &Path, home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("commit-ai").unwrap();
    cmd.current_dir(cwd)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("GROQ_API_KEY")
        .env_remove("COMMIT_AI_API_KEY")
        .env_remove("COMMIT_AI_MODEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_commit_and_yes_flags() {
    let home = tempfile::tempdir().unwrap();
    commit_ai(home.path(), home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--commit"))
        .stdout(predicate::str::contains("--yes"));
}

#[test]
fn completions_are_generated() {
    let home = tempfile::tempdir().unwrap();
    commit_ai(home.path(), home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("commit-ai"));
}

#[test]
fn missing_credential_exits_one() {
    let home = tempfile::tempdir().unwrap();
    let repo = init_repo();
    fs::write(repo.path().join("a.txt"), "a\n").unwrap();

    commit_ai(repo.path(), home.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No API key found"));

    // Nothing was staged: the credential check runs before git
    let staged = git(repo.path(), &["diff", "--cached", "--name-only"]);
    assert!(staged.trim().is_empty());
}

#[test]
fn no_changes_is_a_success() {
    let home = tempfile::tempdir().unwrap();
    let repo = init_repo();

    commit_ai(repo.path(), home.path())
        .env("GROQ_API_KEY", "gsk_test")
        // Unreachable on purpose: an empty diff must not hit the network
        .env("COMMIT_AI_BASE_URL", "http://127.0.0.1:1")
        .assert()
        .success()
        .stderr(predicate::str::contains("No changes detected."));
}

#[test]
fn outside_repository_is_reported_with_zero_exit() {
    let home = tempfile::tempdir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    if inside_existing_repo(dir.path()) {
        return;
    }

    commit_ai(dir.path(), home.path())
        .env("GROQ_API_KEY", "gsk_test")
        .env("COMMIT_AI_BASE_URL", "http://127.0.0.1:1")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Not a git repository"));
}

#[test]
fn key_file_in_home_is_used() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join(".commit-ai-key"), "gsk_cached\n").unwrap();
    let repo = init_repo();

    commit_ai(repo.path(), home.path())
        .env("COMMIT_AI_BASE_URL", "http://127.0.0.1:1")
        .assert()
        .success()
        .stderr(predicate::str::contains("No changes detected."));
}

#[test]
fn invalid_config_exits_one() {
    let home = tempfile::tempdir().unwrap();
    commit_ai(home.path(), home.path())
        .env("COMMIT_AI_TEMPERATURE", "9.5")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("temperature"));
}

#[test]
fn completion_failure_is_reported_without_commit() {
    let home = tempfile::tempdir().unwrap();
    let repo = init_repo();
    fs::write(repo.path().join("a.txt"), "a\n").unwrap();

    commit_ai(repo.path(), home.path())
        .args(["--commit", "--yes"])
        .env("GROQ_API_KEY", "gsk_test")
        .env("COMMIT_AI_BASE_URL", "http://127.0.0.1:1")
        .env("COMMIT_AI_TIMEOUT_SECS", "5")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Completion request failed"));

    let log = std::process::Command::new("git")
        .args(["rev-parse", "--verify", "HEAD"])
        .current_dir(repo.path())
        .output()
        .unwrap();
    assert!(!log.status.success(), "no commit should exist");
}

async fn mock_completion(content: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(content)))
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn suggestion_is_printed_without_commit_mode() {
    let server = mock_completion(
        "<report>* add greeting file</report><message>feat: Add greeting.</message>",
    )
    .await;
    let home = tempfile::tempdir().unwrap();
    let repo = init_repo();
    fs::write(repo.path().join("hello.txt"), "hello\n").unwrap();

    let base_url = format!("{}/v1", server.uri());
    let (repo_path, home_path) = (repo.path().to_path_buf(), home.path().to_path_buf());
    tokio::task::spawn_blocking(move || {
        commit_ai(&repo_path, &home_path)
            .env("GROQ_API_KEY", "gsk_test")
            .env("COMMIT_AI_BASE_URL", base_url)
            .assert()
            .success()
            .stdout(predicate::str::contains("COMMIT_MESSAGE: feat: add greeting"))
            .stdout(predicate::str::contains("* add greeting file"));
    })
    .await
    .unwrap();

    let head = std::process::Command::new("git")
        .args(["rev-parse", "--verify", "HEAD"])
        .current_dir(repo.path())
        .output()
        .unwrap();
    assert!(!head.status.success(), "suggestion-only run must not commit");
}

#[tokio::test(flavor = "multi_thread")]
async fn commit_mode_with_yes_commits() {
    let server = mock_completion(
        "<report>* add greeting file</report><message>feat: Add greeting.</message>",
    )
    .await;
    let home = tempfile::tempdir().unwrap();
    let repo = init_repo();
    fs::write(repo.path().join("hello.txt"), "hello\n").unwrap();

    let base_url = format!("{}/v1", server.uri());
    let (repo_path, home_path) = (repo.path().to_path_buf(), home.path().to_path_buf());
    tokio::task::spawn_blocking(move || {
        commit_ai(&repo_path, &home_path)
            .args(["-c", "-y"])
            .env("GROQ_API_KEY", "gsk_test")
            .env("COMMIT_AI_BASE_URL", base_url)
            .assert()
            .success()
            .stderr(predicate::str::contains("Committed!"));
    })
    .await
    .unwrap();

    let subject = git(repo.path(), &["log", "-1", "--format=%s"]);
    let body = git(repo.path(), &["log", "-1", "--format=%b"]);
    assert_eq!(subject.trim(), "feat: add greeting");
    assert_eq!(body.trim(), "* add greeting file");
}

#[tokio::test(flavor = "multi_thread")]
async fn commit_mode_without_terminal_needs_yes() {
    let server = mock_completion("<message>fix: Typo</message>").await;
    let home = tempfile::tempdir().unwrap();
    let repo = init_repo();
    fs::write(repo.path().join("a.txt"), "a\n").unwrap();

    let base_url = format!("{}/v1", server.uri());
    let (repo_path, home_path) = (repo.path().to_path_buf(), home.path().to_path_buf());
    tokio::task::spawn_blocking(move || {
        commit_ai(&repo_path, &home_path)
            .arg("--commit")
            .env("GROQ_API_KEY", "gsk_test")
            .env("COMMIT_AI_BASE_URL", base_url)
            .assert()
            .success()
            .stderr(predicate::str::contains("--yes"));
    })
    .await
    .unwrap();

    let head = std::process::Command::new("git")
        .args(["rev-parse", "--verify", "HEAD"])
        .current_dir(repo.path())
        .output()
        .unwrap();
    assert!(!head.status.success());
}

#[tokio::test(flavor = "multi_thread")]
async fn key_from_dotenv_file_is_used() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer gsk_from_dotenv"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_body("<message>docs: Add notes</message>")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let repo = init_repo();
    fs::write(repo.path().join(".env"), "GROQ_API_KEY=gsk_from_dotenv\n").unwrap();
    fs::write(repo.path().join(".gitignore"), ".env\n").unwrap();
    fs::write(repo.path().join("notes.txt"), "notes\n").unwrap();

    let base_url = format!("{}/v1", server.uri());
    let (repo_path, home_path) = (repo.path().to_path_buf(), home.path().to_path_buf());
    tokio::task::spawn_blocking(move || {
        commit_ai(&repo_path, &home_path)
            .env("COMMIT_AI_BASE_URL", base_url)
            .assert()
            .success()
            .stdout(predicate::str::contains("COMMIT_MESSAGE: docs: add notes"));
    })
    .await
    .unwrap();

    // Ignored by git, so the key never reaches the index
    let staged = git(repo.path(), &["diff", "--cached", "--name-only"]);
    assert!(!staged.contains(".env"));
}
