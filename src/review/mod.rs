// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Review session orchestrator.
//!
//! ```text
//! check_environment   git on PATH, inside a work tree, find its top
//!        |
//! list_branches       fetch (best effort) + local/remote refs
//!        |
//! select_branches     --from/--to or Select prompt
//!        |
//! preflight           refs exist, stale review branch, dirty tree
//!        |  (declined -> Cancelled, exit 0)
//! materialize         to -> {from}{suffix}, apply to..from unstaged
//!        |  (empty diff -> NoDifferences, apply error -> rollback)
//! finalize            interactive only, opt-in state machine
//! ```
//!
//! Every step is a direct, synchronous delegation to git. The one explicit
//! rollback lives in `materialize`.

pub mod finalize;
pub mod materialize;
pub mod preflight;
pub mod select;


use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::info;

use crate::config::types::{DEFAULT_SUFFIX, ReviewConfig};
use crate::error::ReviewResult;
use crate::git::discovery::list_branches;
use crate::git::status::WorkingTreeStatus;
use crate::prompt::Prompter;

use finalize::{FinalizeOutcome, Finalizer};
use materialize::Materialized;
use preflight::Preflight;

/// Options for one review run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ReviewOptions {
    /// Source branch; prompted for (or taken from HEAD) when absent.
    #[builder(into)]
    from: Option<String>,
    /// Target branch; prompted for (or suggested) when absent.
    #[builder(into)]
    to: Option<String>,
    /// Appended to `from` to name the review branch.
    #[builder(into, default = DEFAULT_SUFFIX.to_string())]
    suffix: String,
    /// Ask before destructive steps and offer to finalize.
    #[builder(default = true)]
    interactive: bool,
}

impl ReviewOptions {
    #[must_use]
    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    #[must_use]
    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[must_use]
    pub const fn interactive(&self) -> bool {
        self.interactive
    }

    /// Name of the review branch derived from `from`.
    #[must_use]
    pub fn review_branch_for(&self, from: &str) -> String {
        format!("{from}{}", self.suffix)
    }
}

/// Repository-independent behaviour knobs, taken from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSettings {
    /// Target suggestions in order of preference.
    pub default_targets: Vec<String>,
    /// Remote for the lease-protected push.
    pub remote: String,
    /// Fetch all remotes before listing branches.
    pub fetch: bool,
    /// Stash untracked files too.
    pub include_untracked: bool,
}

impl Default for ReviewSettings {
    fn default() -> Self {
        Self::from(&ReviewConfig::default())
    }
}

impl From<&ReviewConfig> for ReviewSettings {
    fn from(config: &ReviewConfig) -> Self {
        Self {
            default_targets: config.default_targets.clone(),
            remote: config.remote.clone(),
            fetch: config.fetch,
            include_untracked: config.include_untracked,
        }
    }
}

/// Everything one run needs, passed explicitly to each step.
pub struct Session<'a> {
    /// Top of the work tree, whatever directory the run started in.
    pub repo: PathBuf,
    pub options: &'a ReviewOptions,
    pub settings: &'a ReviewSettings,
    pub prompter: &'a mut dyn Prompter,
}

/// Why a run stopped at the operator's request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Recreating the existing review branch was declined.
    ReviewBranchExists,
    /// Stashing the dirty working tree was declined.
    DirtyWorkingTree,
}

/// Result of a run. All variants exit 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// The review branch is checked out with the delta as uncommitted changes.
    Ready {
        review_branch: String,
        status: WorkingTreeStatus,
        finalize: FinalizeOutcome,
    },
    /// `from` and `to` have identical trees; no review branch was left behind.
    NoDifferences { from: String, to: String },
    /// The operator declined a confirmation before anything destructive ran.
    Cancelled(CancelReason),
    /// The staged result replaced `from`; the review branch is gone.
    Finalized(FinalizeOutcome),
}

/// Outcome plus anything the operator must know about afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewReport {
    pub outcome: ReviewOutcome,
    /// Message of the stash created during preflight, if any.
    pub stash: Option<String>,
}

impl ReviewReport {
    const fn new(outcome: ReviewOutcome, stash: Option<String>) -> Self {
        Self { outcome, stash }
    }
}

/// Run a complete review session against `repo`.
///
/// # Errors
///
/// Returns an error for validation failures (missing repository or branch,
/// detached HEAD without `--from`) and operational failures (patch does not
/// apply, git command fails). Declined confirmations are not errors.
pub fn run_review<'a>(
    repo: &'a Path,
    options: &'a ReviewOptions,
    settings: &'a ReviewSettings,
    prompter: &'a mut dyn Prompter,
) -> ReviewResult<ReviewReport> {
    let root = preflight::check_environment(repo)?;
    let branches = list_branches(&root, settings.fetch)?;

    let mut session = Session {
        repo: root,
        options,
        settings,
        prompter,
    };

    let selected = select::select_branches(&mut session, &branches)?;
    info!(from = %selected.from, to = %selected.to, "branches selected");

    let resolved = match preflight::run(&mut session, &selected)? {
        Preflight::Proceed(resolved) => resolved,
        Preflight::Cancelled(reason) => {
            info!(?reason, "cancelled by operator");
            return Ok(ReviewReport::new(ReviewOutcome::Cancelled(reason), None));
        }
    };
    let stash = resolved.stash.clone();

    let status = match materialize::run(&session, &resolved)? {
        Materialized::Ready(status) => status,
        Materialized::NoDifferences => {
            return Ok(ReviewReport::new(
                ReviewOutcome::NoDifferences {
                    from: resolved.from.name,
                    to: resolved.to.name,
                },
                stash,
            ));
        }
    };

    let finalize = if options.interactive() {
        Finalizer::new(&mut session, &resolved).run()?
    } else {
        FinalizeOutcome::NotRequested
    };

    let outcome = if matches!(finalize, FinalizeOutcome::Finalized { .. }) {
        ReviewOutcome::Finalized(finalize)
    } else {
        ReviewOutcome::Ready {
            review_branch: resolved.review_branch,
            status,
            finalize,
        }
    };
    Ok(ReviewReport::new(outcome, stash))
}
