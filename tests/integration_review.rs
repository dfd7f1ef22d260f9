// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for complete non-interactive review sessions.

use git_review::error::{GitError, ReviewError};
use git_review::prompt::Unattended;
use git_review::review::finalize::FinalizeOutcome;
use git_review::review::{ReviewOptions, ReviewOutcome, ReviewSettings, run_review};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn git(args: &[&str], cwd: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to spawn git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn init_repo() -> TempDir {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let dir = temp.path();
    git(&["init", "-q", "--initial-branch=main"], dir);
    git(&["config", "user.email", "test@example.com"], dir);
    git(&["config", "user.name", "Test"], dir);
    git(&["config", "commit.gpgsign", "false"], dir);
    fs::write(dir.join("a.txt"), "one\n").unwrap();
    git(&["add", "-A"], dir);
    git(&["commit", "-q", "-m", "init"], dir);
    temp
}

fn commit_file(dir: &Path, file: &str, content: &str, message: &str) {
    fs::write(dir.join(file), content).unwrap();
    git(&["add", "-A"], dir);
    git(&["commit", "-q", "-m", message], dir);
}

fn options(from: Option<&str>, to: Option<&str>) -> ReviewOptions {
    ReviewOptions::builder()
        .maybe_from(from)
        .maybe_to(to)
        .interactive(false)
        .build()
}

fn settings() -> ReviewSettings {
    ReviewSettings {
        fetch: false,
        ..ReviewSettings::default()
    }
}

fn branch_exists(dir: &Path, name: &str) -> bool {
    Command::new("git")
        .args(["show-ref", "--verify", "--quiet", &format!("refs/heads/{name}")])
        .current_dir(dir)
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[test]
fn review_feature_branch_against_main() {
    let repo = init_repo();
    let dir = repo.path();
    git(&["checkout", "-q", "-b", "feat/x"], dir);
    commit_file(dir, "a.txt", "one\ntwo\n", "change a");

    let report = run_review(dir, &options(None, None), &settings(), &mut Unattended).unwrap();

    match report.outcome {
        ReviewOutcome::Ready {
            review_branch,
            status,
            finalize,
        } => {
            assert_eq!(review_branch, "feat/x-review");
            assert_eq!(status.modified, 1);
            assert_eq!(status.staged, 0);
            assert_eq!(finalize, FinalizeOutcome::NotRequested);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(git(&["branch", "--show-current"], dir), "feat/x-review");
    assert_eq!(git(&["status", "--porcelain"], dir), "M a.txt");
    assert_eq!(
        git(&["rev-parse", "feat/x-review"], dir),
        git(&["rev-parse", "main"], dir)
    );
}

#[test]
fn review_only_contains_changes_missing_from_target() {
    let repo = init_repo();
    let dir = repo.path();
    git(&["checkout", "-q", "-b", "feat/x"], dir);
    commit_file(dir, "feature.txt", "feature\n", "feature");
    git(&["checkout", "-q", "main"], dir);
    commit_file(dir, "main.txt", "main only\n", "main moves on");

    let report = run_review(
        dir,
        &options(Some("feat/x"), Some("main")),
        &settings(),
        &mut Unattended,
    )
    .unwrap();
    assert!(matches!(report.outcome, ReviewOutcome::Ready { .. }));

    // The tree of the review branch now equals the tree of `from`.
    assert!(dir.join("feature.txt").exists());
    assert!(!dir.join("main.txt").exists());
    let porcelain = git(&["status", "--porcelain"], dir);
    assert!(porcelain.contains("?? feature.txt"));
    assert!(porcelain.contains("D main.txt"));
}

#[test]
fn review_with_master_as_default_target() {
    let temp = tempfile::tempdir().unwrap();
    let dir = temp.path();
    git(&["init", "-q", "--initial-branch=master"], dir);
    git(&["config", "user.email", "test@example.com"], dir);
    git(&["config", "user.name", "Test"], dir);
    git(&["config", "commit.gpgsign", "false"], dir);
    commit_file(dir, "a.txt", "one\n", "init");
    git(&["checkout", "-q", "-b", "topic"], dir);
    commit_file(dir, "a.txt", "two\n", "topic");

    let report = run_review(dir, &options(None, None), &settings(), &mut Unattended).unwrap();
    assert!(matches!(report.outcome, ReviewOutcome::Ready { .. }));
    assert_eq!(
        git(&["rev-parse", "topic-review"], dir),
        git(&["rev-parse", "master"], dir)
    );
}

#[test]
fn review_identical_branches() {
    let repo = init_repo();
    let dir = repo.path();
    git(&["checkout", "-q", "-b", "feat/x"], dir);

    let report = run_review(
        dir,
        &options(None, Some("main")),
        &settings(),
        &mut Unattended,
    )
    .unwrap();

    assert!(matches!(report.outcome, ReviewOutcome::NoDifferences { .. }));
    assert_eq!(git(&["branch", "--show-current"], dir), "feat/x");
    assert!(!branch_exists(dir, "feat/x-review"));
}

#[test]
fn review_remote_only_source_branch() {
    let upstream = init_repo();
    git(&["checkout", "-q", "-b", "shared"], upstream.path());
    commit_file(upstream.path(), "a.txt", "remote\n", "remote work");
    git(&["checkout", "-q", "main"], upstream.path());

    let repo = init_repo();
    let dir = repo.path();
    let url = upstream.path().display().to_string();
    git(&["remote", "add", "origin", &url], dir);

    let settings = ReviewSettings::default();
    let report = run_review(
        dir,
        &options(Some("shared"), Some("main")),
        &settings,
        &mut Unattended,
    )
    .unwrap();

    assert!(matches!(report.outcome, ReviewOutcome::Ready { .. }));
    assert_eq!(fs::read_to_string(dir.join("a.txt")).unwrap(), "remote\n");
    assert!(branch_exists(dir, "shared-review"));
}

#[test]
fn review_unknown_target_fails() {
    let repo = init_repo();
    let dir = repo.path();
    git(&["checkout", "-q", "-b", "feat/x"], dir);

    let err = run_review(
        dir,
        &options(None, Some("develop")),
        &settings(),
        &mut Unattended,
    )
    .unwrap_err();

    match err {
        ReviewError::Git(git_err) => match *git_err {
            GitError::BranchNotFound { branch } => assert_eq!(branch, "develop"),
            other => panic!("unexpected git error: {other}"),
        },
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(git(&["branch", "--show-current"], dir), "feat/x");
}
