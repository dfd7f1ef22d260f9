// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pre-flight validation.
//!
//! All questions are asked before anything is changed, so a declined
//! confirmation leaves the repository exactly as it was found.
//!
//! ```text
//! resolve from, to      BranchNotFound -> error (exit 1)
//! review branch name    must differ from both
//! {from}{suffix} exists confirm recreate   (no -> Cancelled)
//! dirty working tree    confirm stash      (no -> Cancelled)
//! ---------------------------------------------------------
//! stash, then delete the stale review branch
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::select::SelectedBranches;
use super::{CancelReason, Session};
use crate::error::{ConfigError, GitError, ProcessError, ReviewResult};
use crate::git::cmd::{checkout, delete_branch, stash};
use crate::git::discovery::{ResolvedBranch, resolve_branch};
use crate::git::query::{
    current_branch, is_git_repo, local_branch_exists, work_tree_root, working_tree_status,
};

/// Branches a run will operate on, all known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub from: ResolvedBranch,
    pub to: ResolvedBranch,
    /// `{from}{suffix}`; does not exist once pre-flight has passed.
    pub review_branch: String,
    /// Stash message, when local changes were stashed.
    pub stash: Option<String>,
}

/// Verdict of the pre-flight checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preflight {
    Proceed(Resolved),
    Cancelled(CancelReason),
}

/// Stash message used for changes set aside before creating `review_branch`.
#[must_use]
pub fn stash_message(review_branch: &str) -> String {
    format!("git-review: before creating {review_branch}")
}

/// Ensure `git` is callable and `repo` is inside a work tree; return the top
/// of that work tree.
///
/// # Errors
///
/// Returns `ProcessError::ExecutableNotFound` or `GitError::RepoNotFound`.
pub fn check_environment(repo: &Path) -> ReviewResult<PathBuf> {
    let git = which::which("git").map_err(|_| ProcessError::ExecutableNotFound {
        name: "git".to_string(),
    })?;
    debug!(git = %git.display(), "found git");

    if !is_git_repo(repo) {
        return Err(GitError::RepoNotFound {
            path: repo.display().to_string(),
        }
        .into());
    }
    let root = work_tree_root(repo)?;
    debug!(root = %root.display(), "work tree");
    Ok(root)
}

/// Validate the selection and clear the way for the review branch.
///
/// # Errors
///
/// Returns `GitError::BranchNotFound` for a missing branch, `ConfigError` when
/// the suffix makes the review branch collide with `from` or `to`, or any git
/// error from stashing or deleting.
pub fn run(session: &mut Session<'_>, selected: &SelectedBranches) -> ReviewResult<Preflight> {
    let repo = session.repo.as_path();
    let from = resolve_branch(repo, &selected.from)?;
    let to = resolve_branch(repo, &selected.to)?;
    debug!(from = %from.rev, to = %to.rev, "resolved");

    let review_branch = session.options.review_branch_for(&from.name);
    if review_branch == from.name || review_branch == to.name {
        return Err(ConfigError::InvalidValue {
            section: "review".to_string(),
            key: "suffix".to_string(),
            message: format!("review branch '{review_branch}' would replace an input branch"),
        }
        .into());
    }

    let interactive = session.options.interactive();

    let stale = local_branch_exists(repo, &review_branch)?;
    if stale && interactive {
        let prompt = format!("Branch '{review_branch}' already exists. Delete and recreate it?");
        if !session.prompter.confirm(&prompt, false)? {
            return Ok(Preflight::Cancelled(CancelReason::ReviewBranchExists));
        }
    }

    let status = working_tree_status(repo)?;
    // Untracked files only block the run when they would be stashed too.
    let dirty = if session.settings.include_untracked {
        !status.is_clean()
    } else {
        status.tracked_changes() > 0
    };
    if dirty && interactive {
        let prompt = format!("Working tree has changes ({status}). Stash them?");
        if !session.prompter.confirm(&prompt, true)? {
            return Ok(Preflight::Cancelled(CancelReason::DirtyWorkingTree));
        }
    }

    let stash_msg = if dirty {
        let message = stash_message(&review_branch);
        stash(repo, &message, session.settings.include_untracked)?;
        info!(%message, "stashed local changes");
        Some(message)
    } else {
        None
    };

    if stale {
        if current_branch(repo)?.as_deref() == Some(review_branch.as_str()) {
            checkout(repo, from.checkout_target())?;
        }
        delete_branch(repo, &review_branch)?;
        info!(branch = %review_branch, "deleted stale review branch");
    }

    Ok(Preflight::Proceed(Resolved {
        from,
        to,
        review_branch,
        stash: stash_msg,
    }))
}
