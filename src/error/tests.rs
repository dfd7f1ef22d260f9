// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, GitError, PromptError, ReviewError, ReviewResult, bail_out};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "review".to_string(),
        key: "suffix".to_string(),
        message: "must not be empty".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'suffix' in section '[review]': must not be empty"
    );
}

#[test]
fn test_git_error_wraps_into_review_error() {
    let err: ReviewError = GitError::BranchNotFound {
        branch: "feat/x".to_string(),
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"git error: branch not found: feat/x");
}

#[test]
fn test_prompt_error_names_the_prompt() {
    let err: ReviewError = PromptError::NonInteractive {
        prompt: "Stash changes?".to_string(),
    }
    .into();
    assert!(err.to_string().contains("Stash changes?"));
}

#[test]
fn test_bail_out_message() {
    insta::assert_snapshot!(bail_out("boom").to_string(), @"fatal error: boom");
}

#[test]
fn test_review_error_size() {
    // Box<str> variants (Bailed, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<ReviewError>();
    assert!(size <= 24, "ReviewError is {size} bytes, expected <= 24");
}

#[test]
fn test_review_result_size() {
    let size = std::mem::size_of::<ReviewResult<()>>();
    assert!(size <= 24, "ReviewResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_command_message_prefers_git_stderr() {
    let err: ReviewError = GitError::CommandFailed {
        command: "git apply x.patch".to_string(),
        message: "error: patch failed: a.txt:1".to_string(),
    }
    .into();
    assert_eq!(err.command_message(), "error: patch failed: a.txt:1");
    assert_eq!(bail_out("plain").command_message(), "fatal error: plain");
}
