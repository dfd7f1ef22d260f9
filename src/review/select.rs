// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source/target branch selection.
//!
//! ```text
//!            flag given?   interactive?     otherwise
//! from       --from        Select(HEAD)     current branch
//! to         --to          Select(main..)   first default target present,
//!                                           else first branch
//! ```
//!
//! Existence is not checked here; preflight does that.

use tracing::debug;

use super::Session;
use crate::error::{GitError, ReviewResult, bail_out};
use crate::git::query::current_branch;

/// The two branch names a run operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedBranches {
    pub from: String,
    pub to: String,
}

/// Index to pre-select for `from`: the checked-out branch, else the first entry.
#[must_use]
pub fn default_from_index(branches: &[String], current: Option<&str>) -> usize {
    current
        .and_then(|name| branches.iter().position(|b| b == name))
        .unwrap_or(0)
}

/// Index to pre-select for `to`: the first preferred name present, else the
/// first entry (branches are sorted, so the first alphabetically).
#[must_use]
pub fn default_to_index(branches: &[String], preferred: &[String]) -> usize {
    preferred
        .iter()
        .find_map(|want| branches.iter().position(|b| b == want))
        .unwrap_or(0)
}

/// Resolve `from` and `to` from options, prompts, or suggestions.
///
/// # Errors
///
/// Returns `GitError::DetachedHead` when HEAD is detached, `--from` is absent
/// and prompting is disabled, or a prompt error when the terminal fails.
pub fn select_branches(
    session: &mut Session<'_>,
    branches: &[String],
) -> ReviewResult<SelectedBranches> {
    let interactive = session.options.interactive();

    let from = match session.options.from() {
        Some(from) => from.to_string(),
        None => {
            let current = current_branch(&session.repo)?;
            if interactive {
                let default = default_from_index(branches, current.as_deref());
                pick(session, "Branch with the changes to review (from)", branches, default)?
            } else {
                current.ok_or(GitError::DetachedHead)?
            }
        }
    };

    let to = match session.options.to() {
        Some(to) => to.to_string(),
        None => {
            let default = default_to_index(branches, &session.settings.default_targets);
            if interactive {
                pick(session, "Branch to review against (to)", branches, default)?
            } else if let Some(suggested) = branches.get(default) {
                suggested.clone()
            } else {
                session
                    .settings
                    .default_targets
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "main".to_string())
            }
        }
    };

    debug!(%from, %to, "selected");
    Ok(SelectedBranches { from, to })
}

fn pick(
    session: &mut Session<'_>,
    prompt: &str,
    branches: &[String],
    default: usize,
) -> ReviewResult<String> {
    if branches.is_empty() {
        return Err(bail_out("no branches found to choose from"));
    }
    let index = session.prompter.select(prompt, branches, default)?;
    branches
        .get(index)
        .cloned()
        .ok_or_else(|| bail_out(format!("selection {index} out of range")))
}
