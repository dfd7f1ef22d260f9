// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch discovery and resolution.
//!
//! ```text
//! git fetch --all --prune        (best effort)
//! git for-each-ref refs/heads refs/remotes
//!   refs/heads/main                         -> main
//!   refs/remotes/origin/feat/x              -> feat/x
//!   refs/remotes/origin/HEAD (symref)       -> skipped
//! BTreeSet => deduplicated + sorted
//! ```

use crate::error::{GitError, ReviewResult};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};

use super::backend::ShellBackend;
use super::cmd::fetch_all;
use super::query::{ref_exists, remotes};

/// List branch names visible locally and on all remotes.
///
/// When `fetch` is set, remotes are fetched first. A failed fetch (offline, no
/// remote configured) only logs a warning; local refs are still listed.
///
/// # Errors
///
/// Returns a `GitError` if the refs themselves cannot be listed.
pub fn list_branches(repo_path: &Path, fetch: bool) -> ReviewResult<Vec<String>> {
    if fetch
        && let Err(e) = fetch_all(repo_path)
    {
        warn!(error = %e, "fetch failed, listing known branches only");
    }

    let output = ShellBackend::git_command(
        &[
            "for-each-ref",
            "--format=%(refname) %(symref)",
            "refs/heads",
            "refs/remotes",
        ],
        repo_path,
    )?;
    let remote_names = remotes(repo_path)?;
    let branches = parse_branch_refs(&output, &remote_names);
    debug!(count = branches.len(), "discovered branches");
    Ok(branches)
}

/// Turn `for-each-ref` output (`<refname> <symref>` per line) into branch names.
///
/// Symbolic refs and `<remote>/HEAD` are dropped; remote prefixes are stripped
/// using the longest matching remote name so remotes containing `/` work.
#[must_use]
pub fn parse_branch_refs(output: &str, remotes: &[String]) -> Vec<String> {
    let mut names = BTreeSet::new();

    for line in output.lines() {
        let (refname, symref) = line.split_once(' ').unwrap_or((line, ""));
        if !symref.trim().is_empty() {
            continue;
        }

        if let Some(local) = refname.strip_prefix("refs/heads/") {
            names.insert(local.to_string());
        } else if let Some(remote_ref) = refname.strip_prefix("refs/remotes/") {
            if let Some(name) = strip_remote(remote_ref, remotes)
                && name != "HEAD"
            {
                names.insert(name.to_string());
            }
        }
    }

    names.into_iter().collect()
}

fn strip_remote<'a>(remote_ref: &'a str, remotes: &[String]) -> Option<&'a str> {
    remotes
        .iter()
        .filter_map(|remote| {
            remote_ref
                .strip_prefix(remote.as_str())
                .and_then(|rest| rest.strip_prefix('/'))
                .map(|name| (remote.len(), name))
        })
        .max_by_key(|(len, _)| *len)
        .map(|(_, name)| name)
        .or_else(|| remote_ref.split_once('/').map(|(_, name)| name))
        .filter(|name| !name.is_empty())
}

/// A branch name and the revision that names its tip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBranch {
    /// Branch name as the operator wrote it.
    pub name: String,
    /// Fully qualified ref of the tip: `refs/heads/<name>`, or
    /// `refs/remotes/<remote>/<name>` for remote-only branches. Never a short
    /// name, which a tag of the same name would shadow.
    pub rev: String,
    /// Whether a local branch of that name exists.
    pub local: bool,
}

impl ResolvedBranch {
    /// What to check out to stand on this branch: the branch itself when
    /// local, its remote tip (detached) otherwise.
    #[must_use]
    pub fn checkout_target(&self) -> &str {
        if self.local { &self.name } else { &self.rev }
    }
}

/// Resolve a branch name to a local branch, else to the first remote carrying it.
///
/// # Errors
///
/// Returns `GitError::BranchNotFound` if no such branch exists anywhere.
pub fn resolve_branch(repo_path: &Path, name: &str) -> ReviewResult<ResolvedBranch> {
    // A name git rejects as a refname cannot exist; report it as missing.
    let exists = |refname: String| ref_exists(repo_path, &refname).unwrap_or(false);

    let local = format!("refs/heads/{name}");
    if exists(local.clone()) {
        return Ok(ResolvedBranch {
            name: name.to_string(),
            rev: local,
            local: true,
        });
    }

    for remote in remotes(repo_path)? {
        let tracking = format!("refs/remotes/{remote}/{name}");
        if exists(tracking.clone()) {
            return Ok(ResolvedBranch {
                name: name.to_string(),
                rev: tracking,
                local: false,
            });
        }
    }

    Err(GitError::BranchNotFound {
        branch: name.to_string(),
    }
    .into())
}
