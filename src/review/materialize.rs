// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Review branch materialization.
//!
//! ```text
//! checkout to -> create {from}{suffix} -> diff to..from
//!                                           |
//!                       empty: back to from, delete review branch
//!                       else:  apply as unstaged changes
//!                              (failure: back to from, delete, ApplyFailed)
//!
//! Once the review branch exists, every exit path either leaves it holding the
//! delta or removes it again.
//! ```

use tracing::{error, info};

use super::Session;
use super::preflight::Resolved;
use crate::error::{GitError, ReviewResult};
use crate::git::cmd::{apply_patch, checkout, create_branch, delete_branch};
use crate::git::query::{diff_between, working_tree_status};
use crate::git::status::WorkingTreeStatus;

/// Result of materializing the review branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Materialized {
    /// Review branch checked out, delta present as unstaged changes.
    Ready(WorkingTreeStatus),
    /// Nothing to review; the review branch was removed again.
    NoDifferences,
}

/// Create the review branch off `to` and apply the `to..from` delta to it.
///
/// # Errors
///
/// Returns `GitError::ApplyFailed` (after rolling back) when the delta does not
/// apply, or any git error from checkout, branch creation or diffing. A failed
/// diff is rolled back too.
pub fn run(session: &Session<'_>, resolved: &Resolved) -> ReviewResult<Materialized> {
    let repo = session.repo.as_path();
    let review = resolved.review_branch.as_str();

    checkout(repo, resolved.to.checkout_target())?;
    create_branch(repo, review)?;
    info!(branch = review, base = %resolved.to.rev, "created review branch");

    let patch = match diff_between(repo, &resolved.to.rev, &resolved.from.rev) {
        Ok(patch) => patch,
        Err(e) => {
            if let Err(rollback) = rollback(session, resolved) {
                error!(branch = review, error = %rollback, "rollback failed");
            }
            return Err(e);
        }
    };
    if patch.is_empty() {
        info!(from = %resolved.from.name, to = %resolved.to.name, "no differences");
        leave_review_branch(session, resolved)?;
        return Ok(Materialized::NoDifferences);
    }

    if let Err(e) = apply_patch(repo, &patch) {
        let message = e.command_message();
        if let Err(rollback) = rollback(session, resolved) {
            error!(branch = review, error = %rollback, "rollback failed");
        }
        return Err(GitError::ApplyFailed {
            branch: review.to_string(),
            message,
        }
        .into());
    }

    let status = working_tree_status(repo)?;
    info!(branch = review, %status, "changes applied");
    Ok(Materialized::Ready(status))
}

fn leave_review_branch(session: &Session<'_>, resolved: &Resolved) -> ReviewResult<()> {
    checkout(&session.repo, resolved.from.checkout_target())?;
    delete_branch(&session.repo, &resolved.review_branch)
}

fn rollback(session: &Session<'_>, resolved: &Resolved) -> ReviewResult<()> {
    // `git apply` is all-or-nothing, so the tree is as the branch was created.
    leave_review_branch(session, resolved)?;
    info!(branch = %resolved.review_branch, "rolled back review branch");
    Ok(())
}
