// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations.
//!
//! ```text
//! query.rs --> GixBackend   --> .git/ (no subprocess)
//!          --> ShellBackend --> status / diff / rev-parse
//! ```
//!
//! Repository, HEAD and ref lookups go through gix. Status and diffs go
//! through the CLI so they honour the user's git configuration.

use crate::error::{GitError, ReviewResult};
use std::path::{Path, PathBuf};

use super::backend::{GitQuery, GixBackend, ShellBackend};
use super::status::WorkingTreeStatus;

#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// Top-level directory of the work tree containing `path`.
///
/// Commands that take pathspecs (`apply`, `clean`) only see the current
/// directory and below, so every run is anchored here.
///
/// # Errors
///
/// Returns `GitError::RepoNotFound` if `path` is not inside a work tree.
pub fn work_tree_root(path: &Path) -> ReviewResult<PathBuf> {
    let root = ShellBackend::git_command(&["rev-parse", "--show-toplevel"], path)
        .ok()
        .filter(|root| !root.is_empty())
        .ok_or_else(|| GitError::RepoNotFound {
            path: path.display().to_string(),
        })?;
    Ok(PathBuf::from(root))
}

/// Get current branch name (None if HEAD is detached).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn current_branch(path: &Path) -> ReviewResult<Option<String>> {
    GixBackend::current_branch(path)
}

/// Check whether a fully qualified reference exists.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or reference lookup fails.
pub fn ref_exists(path: &Path, refname: &str) -> ReviewResult<bool> {
    GixBackend::ref_exists(path, refname)
}

/// Check whether a local branch exists.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or reference lookup fails.
pub fn local_branch_exists(path: &Path, branch: &str) -> ReviewResult<bool> {
    ref_exists(path, &format!("refs/heads/{branch}"))
}

/// Names of all configured remotes.
///
/// # Errors
///
/// Returns a `GitError` if `git remote` fails.
pub fn remotes(path: &Path) -> ReviewResult<Vec<String>> {
    let output = ShellBackend::git_command(&["remote"], path)?;
    Ok(output.lines().map(str::to_string).collect())
}

/// Snapshot of the working tree and index.
///
/// # Errors
///
/// Returns a `GitError` if `git status` fails.
pub fn working_tree_status(path: &Path) -> ReviewResult<WorkingTreeStatus> {
    let output = ShellBackend::git_command_raw(
        &["status", "--porcelain=v1", "-z", "--untracked-files=all"],
        path,
    )?;
    Ok(WorkingTreeStatus::parse(&String::from_utf8_lossy(&output)))
}

/// Number of paths with changes staged in the index.
///
/// # Errors
///
/// Returns a `GitError` if `git status` fails.
pub fn staged_count(path: &Path) -> ReviewResult<usize> {
    working_tree_status(path).map(|status| status.staged)
}

/// Patch turning the tree of `base` into the tree of `head`.
///
/// The output is returned untouched: trimming would corrupt the final hunk.
///
/// # Errors
///
/// Returns a `GitError` if either revision cannot be resolved.
pub fn diff_between(path: &Path, base: &str, head: &str) -> ReviewResult<Vec<u8>> {
    ShellBackend::git_command_raw(
        &[
            "diff",
            "--binary",
            "--no-color",
            "--no-ext-diff",
            "--src-prefix=a/",
            "--dst-prefix=b/",
            base,
            head,
            "--",
        ],
        path,
    )
}

/// Paths that exist in `head` but not in `base` (added, copied or renamed to).
///
/// Applying the `base..head` patch creates these as untracked files.
///
/// # Errors
///
/// Returns a `GitError` if either revision cannot be resolved.
pub fn added_paths(path: &Path, base: &str, head: &str) -> ReviewResult<Vec<String>> {
    let output = ShellBackend::git_command_raw(
        &["diff", "--name-only", "-z", "--diff-filter=ACR", base, head, "--"],
        path,
    )?;
    Ok(String::from_utf8_lossy(&output)
        .split('\0')
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect())
}

/// Resolve a revision to a full commit id.
///
/// # Errors
///
/// Returns a `GitError` if the revision does not name a commit.
pub fn rev_parse(path: &Path, rev: &str) -> ReviewResult<String> {
    ShellBackend::git_command(
        &["rev-parse", "--verify", "--quiet", &format!("{rev}^{{commit}}")],
        path,
    )
}
