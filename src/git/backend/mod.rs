// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     --> GixBackend (pure Rust gix)
//! GitMutation (write) --> ShellBackend (git CLI)
//! ```

use crate::error::{GitError, GixError, ProcessError, ReviewResult};
use std::path::Path;
use std::process::{Command, Output};
use tracing::{debug, trace};

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
///
/// Implementors provide methods to inspect repository state without modification.
pub trait GitQuery {
    /// Check if path is inside a git work tree.
    fn is_git_repo(path: &Path) -> bool;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(path: &Path) -> ReviewResult<Option<String>>;

    /// Check whether a fully qualified reference (e.g. `refs/heads/main`) exists.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or reference lookup fails.
    fn ref_exists(path: &Path, refname: &str) -> ReviewResult<bool>;
}

// --- Mutation Trait (Write operations) ---

/// Git mutation operations that modify repository state.
///
/// Every operation delegates to the git CLI so that hooks, credential helpers
/// and the user's git configuration apply exactly as on the command line.
pub trait GitMutation {
    /// Fetch all remotes, pruning deleted remote branches.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the fetch fails (no network, no remote, auth).
    fn fetch_all(repo_path: &Path) -> ReviewResult<()>;

    /// Checkout a branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the checkout operation fails.
    fn checkout(repo_path: &Path, what: &str) -> ReviewResult<()>;

    /// Create a branch at HEAD and switch to it.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the branch exists or cannot be created.
    fn create_branch(repo_path: &Path, name: &str) -> ReviewResult<()>;

    /// Force-delete a local branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the branch is checked out or does not exist.
    fn delete_branch(repo_path: &Path, name: &str) -> ReviewResult<()>;

    /// Stash working tree changes with a message.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the stash cannot be created.
    fn stash_push(repo_path: &Path, message: &str, include_untracked: bool) -> ReviewResult<()>;

    /// Apply a patch file to the working tree only (index untouched).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if any hunk does not apply; nothing is changed then.
    fn apply_patch(repo_path: &Path, patch_file: &Path) -> ReviewResult<()>;

    /// Commit the index with the given message.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit fails (empty index, hook rejection).
    fn commit(repo_path: &Path, message: &str) -> ReviewResult<()>;

    /// Move the current branch, index and working tree to `rev`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `rev` cannot be resolved.
    fn reset_hard(repo_path: &Path, rev: &str) -> ReviewResult<()>;

    /// Remove the untracked files among `paths` (tracked and ignored files
    /// are kept).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the clean operation fails.
    fn clean_untracked(repo_path: &Path, paths: &[&str]) -> ReviewResult<()>;

    /// Force push a branch, refusing if the remote tip moved since last fetch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError::PushFailed` if the push is rejected or fails.
    fn push_force_with_lease(repo_path: &Path, remote: &str, branch: &str) -> ReviewResult<()>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Provides read-only operations without spawning subprocesses.
pub struct GixBackend;

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    fn current_branch(path: &Path) -> ReviewResult<Option<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Reference(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    fn ref_exists(path: &Path, refname: &str) -> ReviewResult<bool> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;

        match repo.find_reference(refname) {
            Ok(_) => Ok(true),
            Err(gix::reference::find::existing::Error::NotFound { name: _ }) => Ok(false),
            Err(e) => Err(GitError::Gix(GixError::Reference(e)).into()),
        }
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using git CLI.
pub struct ShellBackend;

impl ShellBackend {
    fn run(args: &[&str], cwd: &Path) -> ReviewResult<Output> {
        debug!(args = ?args, cwd = %cwd.display(), "git");

        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: format!("git {}", args.join(" ")),
                source,
            })?;

        if !output.status.success() {
            let message = String::from_utf8_lossy(&output.stderr).trim().to_string();
            trace!(args = ?args, %message, "git failed");
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message,
            }
            .into());
        }
        Ok(output)
    }

    /// Execute a git command and return trimmed stdout.
    /// Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    pub(crate) fn git_command(args: &[&str], cwd: &Path) -> ReviewResult<String> {
        let output = Self::run(args, cwd)?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Execute a git command and return stdout byte-for-byte.
    ///
    /// Needed wherever leading whitespace or a trailing newline is significant
    /// (porcelain status, patches).
    pub(crate) fn git_command_raw(args: &[&str], cwd: &Path) -> ReviewResult<Vec<u8>> {
        Ok(Self::run(args, cwd)?.stdout)
    }
}

fn path_arg<'a>(path: &'a Path, command: &str) -> ReviewResult<&'a str> {
    path.to_str().ok_or_else(|| {
        GitError::CommandFailed {
            command: command.to_string(),
            message: "invalid file path".to_string(),
        }
        .into()
    })
}

impl GitMutation for ShellBackend {
    fn fetch_all(repo_path: &Path) -> ReviewResult<()> {
        Self::git_command(&["fetch", "--all", "--prune", "--quiet"], repo_path)?;
        Ok(())
    }

    fn checkout(repo_path: &Path, what: &str) -> ReviewResult<()> {
        Self::git_command(&["checkout", "-q", what, "--"], repo_path)?;
        Ok(())
    }

    fn create_branch(repo_path: &Path, name: &str) -> ReviewResult<()> {
        Self::git_command(&["checkout", "-q", "-b", name], repo_path)?;
        Ok(())
    }

    fn delete_branch(repo_path: &Path, name: &str) -> ReviewResult<()> {
        Self::git_command(&["branch", "-D", name], repo_path)?;
        Ok(())
    }

    fn stash_push(repo_path: &Path, message: &str, include_untracked: bool) -> ReviewResult<()> {
        let mut args = vec!["stash", "push", "--quiet"];
        if include_untracked {
            args.push("--include-untracked");
        }
        args.extend(["-m", message]);
        Self::git_command(&args, repo_path)?;
        Ok(())
    }

    fn apply_patch(repo_path: &Path, patch_file: &Path) -> ReviewResult<()> {
        let file = path_arg(patch_file, "git apply")?;
        Self::git_command(&["apply", "--whitespace=nowarn", file], repo_path)?;
        Ok(())
    }

    fn commit(repo_path: &Path, message: &str) -> ReviewResult<()> {
        Self::git_command(&["commit", "--quiet", "-m", message], repo_path)?;
        Ok(())
    }

    fn reset_hard(repo_path: &Path, rev: &str) -> ReviewResult<()> {
        Self::git_command(&["reset", "--quiet", "--hard", rev], repo_path)?;
        Ok(())
    }

    fn clean_untracked(repo_path: &Path, paths: &[&str]) -> ReviewResult<()> {
        let mut args = vec!["clean", "-f", "--quiet", "--"];
        args.extend_from_slice(paths);
        Self::git_command(&args, repo_path)?;
        Ok(())
    }

    fn push_force_with_lease(repo_path: &Path, remote: &str, branch: &str) -> ReviewResult<()> {
        if let Err(e) = Self::git_command(
            &["push", "--quiet", "--force-with-lease", remote, branch],
            repo_path,
        ) {
            return Err(GitError::PushFailed {
                branch: branch.to_string(),
                remote: remote.to_string(),
                message: e.command_message(),
            }
            .into());
        }
        Ok(())
    }
}
