// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Review command implementation.

use tracing::debug;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::prompt::{TerminalPrompter, Unattended};
use crate::review::finalize::{FinalizeOutcome, PushOutcome};
use crate::review::{
    CancelReason, ReviewOptions, ReviewOutcome, ReviewReport, ReviewSettings, run_review,
};


/// Main handler for the review command.
///
/// # Errors
///
/// Returns an error if the session fails validation or a git operation fails.
/// Declined confirmations are not errors.
pub fn run_review_command(cli: &Cli, config: &Config) -> Result<()> {
    let repo = cli.global.repo_dir();
    let options = build_options(cli, config);
    let settings = ReviewSettings::from(&config.review);
    debug!(?options, ?settings, repo = %repo.display(), "starting review");

    let report = if options.interactive() {
        run_review(&repo, &options, &settings, &mut TerminalPrompter::new())?
    } else {
        run_review(&repo, &options, &settings, &mut Unattended)?
    };
    for line in summarize(&report) {
        println!("{line}");
    }
    Ok(())
}

/// Session options from the command line; the suffix comes from the merged
/// configuration, which already carries `--suffix`.
#[must_use]
pub fn build_options(cli: &Cli, config: &Config) -> ReviewOptions {
    ReviewOptions::builder()
        .maybe_from(cli.review.from.clone())
        .maybe_to(cli.review.to.clone())
        .suffix(config.review.suffix.clone())
        .interactive(!cli.review.no_interactive)
        .build()
}

/// Operator-facing lines describing how a run ended.
#[must_use]
pub fn summarize(report: &ReviewReport) -> Vec<String> {
    let mut lines = Vec::new();

    match &report.outcome {
        ReviewOutcome::Ready {
            review_branch,
            status,
            finalize,
        } => {
            lines.push(format!(
                "Review branch '{review_branch}' is checked out: {status}."
            ));
            lines.push(
                "The changes are unstaged; stage what you accept and discard the rest."
                    .to_string(),
            );
            match finalize {
                FinalizeOutcome::NothingStaged => {
                    lines.push(format!("Nothing was staged; '{review_branch}' is left as is."));
                }
                FinalizeOutcome::Declined { staged } => {
                    lines.push(format!(
                        "Not finalized; {staged} staged file(s) remain on '{review_branch}'."
                    ));
                }
                FinalizeOutcome::NotRequested | FinalizeOutcome::Finalized { .. } => {}
            }
        }
        ReviewOutcome::NoDifferences { from, to } => {
            lines.push(format!(
                "No differences: '{from}' has nothing that '{to}' lacks. No review branch was kept."
            ));
        }
        ReviewOutcome::Cancelled(reason) => lines.push(match reason {
            CancelReason::ReviewBranchExists => {
                "Cancelled; the existing review branch was left in place.".to_string()
            }
            CancelReason::DirtyWorkingTree => {
                "Cancelled; the working tree was left untouched.".to_string()
            }
        }),
        ReviewOutcome::Finalized(FinalizeOutcome::Finalized {
            branch,
            commit,
            push,
        }) => {
            let short = commit.get(..12).unwrap_or(commit);
            lines.push(format!("'{branch}' now points at {short}; the review branch is gone."));
            match push {
                PushOutcome::Pushed { remote } => {
                    lines.push(format!("Pushed '{branch}' to '{remote}'."));
                }
                PushOutcome::Failed { message } => {
                    lines.push(format!("Push failed (local branch is finalized): {message}"));
                }
                PushOutcome::NotRequested => {}
            }
        }
        ReviewOutcome::Finalized(_) => {}
    }

    if let Some(stash) = &report.stash {
        lines.push(format!(
            "Local changes were stashed as \"{stash}\"; restore them with `git stash pop`."
        ));
    }

    lines
}
