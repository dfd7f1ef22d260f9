// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command operations using shell backend.
//!
//! ```text
//! cmd.rs --> ShellBackend --> git (fetch, checkout, branch, stash,
//!                                  apply, commit, reset, clean, push)
//! ```

use crate::error::ReviewResult;
use std::io::Write;
use std::path::Path;

use super::backend::{GitMutation, ShellBackend};

/// Fetch all remotes.
///
/// # Errors
///
/// Returns a `GitError` if the fetch operation fails.
pub fn fetch_all(repo_path: &Path) -> ReviewResult<()> {
    ShellBackend::fetch_all(repo_path)
}

/// Checkout a branch.
///
/// # Errors
///
/// Returns a `GitError` if the checkout operation fails.
pub fn checkout(repo_path: &Path, what: &str) -> ReviewResult<()> {
    ShellBackend::checkout(repo_path, what)
}

/// Create a branch at HEAD and switch to it.
///
/// # Errors
///
/// Returns a `GitError` if the branch cannot be created.
pub fn create_branch(repo_path: &Path, name: &str) -> ReviewResult<()> {
    ShellBackend::create_branch(repo_path, name)
}

/// Force-delete a local branch.
///
/// # Errors
///
/// Returns a `GitError` if the branch cannot be deleted.
pub fn delete_branch(repo_path: &Path, name: &str) -> ReviewResult<()> {
    ShellBackend::delete_branch(repo_path, name)
}

/// Stash all working tree changes under `message`.
///
/// # Errors
///
/// Returns a `GitError` if the stash cannot be created.
pub fn stash(repo_path: &Path, message: &str, include_untracked: bool) -> ReviewResult<()> {
    ShellBackend::stash_push(repo_path, message, include_untracked)
}

/// Apply patch text to the working tree without staging it.
///
/// The patch is spooled through a temporary file; `git apply` is atomic, so a
/// failure leaves the working tree untouched.
///
/// # Errors
///
/// Returns an `Io` error if the patch cannot be spooled, or a `GitError` if it
/// does not apply.
pub fn apply_patch(repo_path: &Path, patch: &[u8]) -> ReviewResult<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(patch)?;
    file.flush()?;
    ShellBackend::apply_patch(repo_path, file.path())
}

/// Commit the index.
///
/// # Errors
///
/// Returns a `GitError` if the commit fails.
pub fn commit(repo_path: &Path, message: &str) -> ReviewResult<()> {
    ShellBackend::commit(repo_path, message)
}

/// Hard reset the current branch to `rev`.
///
/// # Errors
///
/// Returns a `GitError` if the reset fails.
pub fn reset_hard(repo_path: &Path, rev: &str) -> ReviewResult<()> {
    ShellBackend::reset_hard(repo_path, rev)
}

/// Drop uncommitted edits to tracked files, and remove those of `paths` that
/// are untracked. Other untracked files are left alone.
///
/// # Errors
///
/// Returns a `GitError` if the reset or clean fails.
pub fn discard_changes(repo_path: &Path, paths: &[String]) -> ReviewResult<()> {
    ShellBackend::reset_hard(repo_path, "HEAD")?;
    if paths.is_empty() {
        return Ok(());
    }
    let paths: Vec<&str> = paths.iter().map(String::as_str).collect();
    ShellBackend::clean_untracked(repo_path, &paths)
}

/// Lease-protected force push of `branch` to `remote`.
///
/// # Errors
///
/// Returns a `GitError::PushFailed` if the push is rejected or fails.
pub fn push_force_with_lease(repo_path: &Path, remote: &str, branch: &str) -> ReviewResult<()> {
    ShellBackend::push_force_with_lease(repo_path, remote, branch)
}
