// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Finalize sub-flow.
//!
//! ```text
//! AwaitConfirmWait --no--> Done(NotRequested)
//!    | yes
//! BlockForUserInput        operator stages hunks out of band
//!    |
//! CheckStaged ------0-----> Done(NothingStaged)
//!    | n > 0
//! AwaitConfirmFinalize --no--> Done(Declined)
//!    | yes
//! PromptCommitMessage <--+ empty message
//!    |-------------------+
//! Commit -> SwitchToFrom -> HardResetFromToReview -> DeleteReviewBranch
//!    |
//! AwaitConfirmPush --no--> Done(Finalized, push NotRequested)
//!    | yes
//! Push ------------------> Done(Finalized, Pushed | Failed)
//! ```
//!
//! Each state has exactly one transition function. The hard reset makes `from`
//! identical to the committed review branch; it is a replacement, not a merge.
//! Unstaged leftovers are dropped before leaving the review branch, but only
//! files the delta itself created are removed: untracked files the operator
//! had before the run were never stashed and must survive.

use tracing::{info, warn};

use super::Session;
use super::preflight::Resolved;
use crate::error::ReviewResult;
use crate::git::cmd::{
    checkout, commit, create_branch, delete_branch, discard_changes, push_force_with_lease,
    reset_hard,
};
use crate::git::query::{added_paths, rev_parse, staged_count};

/// Result of the lease-protected push offered at the end of a finalize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    NotRequested,
    Pushed { remote: String },
    /// Reported, never fatal: the local branch is already finalized.
    Failed { message: String },
}

/// How the finalize sub-flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalizeOutcome {
    /// Not offered (non-interactive) or declined up front.
    NotRequested,
    /// The operator staged nothing.
    NothingStaged,
    /// The operator declined to replace `from` with `staged` staged files.
    Declined { staged: usize },
    /// `branch` now points at `commit`; the review branch is gone.
    Finalized {
        branch: String,
        commit: String,
        push: PushOutcome,
    },
}

/// States of the finalize sub-flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalizeState {
    AwaitConfirmWait,
    BlockForUserInput,
    CheckStaged,
    AwaitConfirmFinalize { staged: usize },
    PromptCommitMessage,
    Commit { message: String },
    SwitchToFrom,
    HardResetFromToReview,
    DeleteReviewBranch,
    AwaitConfirmPush,
    Push,
    Done(FinalizeOutcome),
}

/// Drives [`FinalizeState`] from `AwaitConfirmWait` to `Done`.
pub struct Finalizer<'s, 'a> {
    session: &'s mut Session<'a>,
    resolved: &'s Resolved,
    commit: Option<String>,
}

impl<'s, 'a> Finalizer<'s, 'a> {
    pub fn new(session: &'s mut Session<'a>, resolved: &'s Resolved) -> Self {
        Self {
            session,
            resolved,
            commit: None,
        }
    }

    /// Run the state machine to completion.
    ///
    /// # Errors
    ///
    /// Returns prompt errors and git errors from commit, checkout, reset or
    /// branch deletion. A failed push is not an error.
    pub fn run(mut self) -> ReviewResult<FinalizeOutcome> {
        let mut state = FinalizeState::AwaitConfirmWait;
        loop {
            state = match state {
                FinalizeState::Done(outcome) => return Ok(outcome),
                other => self.step(other)?,
            };
        }
    }

    /// Perform one transition.
    ///
    /// # Errors
    ///
    /// See [`Finalizer::run`].
    pub fn step(&mut self, state: FinalizeState) -> ReviewResult<FinalizeState> {
        info!(?state, "finalize");
        match state {
            FinalizeState::AwaitConfirmWait => self.await_confirm_wait(),
            FinalizeState::BlockForUserInput => self.block_for_user_input(),
            FinalizeState::CheckStaged => self.check_staged(),
            FinalizeState::AwaitConfirmFinalize { staged } => self.await_confirm_finalize(staged),
            FinalizeState::PromptCommitMessage => self.prompt_commit_message(),
            FinalizeState::Commit { message } => self.commit(&message),
            FinalizeState::SwitchToFrom => self.switch_to_from(),
            FinalizeState::HardResetFromToReview => self.hard_reset_from_to_review(),
            FinalizeState::DeleteReviewBranch => self.delete_review_branch(),
            FinalizeState::AwaitConfirmPush => self.await_confirm_push(),
            FinalizeState::Push => Ok(self.push()),
            done @ FinalizeState::Done(_) => Ok(done),
        }
    }

    fn await_confirm_wait(&mut self) -> ReviewResult<FinalizeState> {
        let prompt = format!(
            "Stage the changes to keep on '{}' and finalize afterwards?",
            self.resolved.review_branch
        );
        Ok(if self.session.prompter.confirm(&prompt, false)? {
            FinalizeState::BlockForUserInput
        } else {
            FinalizeState::Done(FinalizeOutcome::NotRequested)
        })
    }

    fn block_for_user_input(&mut self) -> ReviewResult<FinalizeState> {
        println!(
            "Stage the hunks you accept (git add -p, or your diff tool) in {}",
            self.session.repo.display()
        );
        self.session
            .prompter
            .wait_for_enter("Press Enter when staging is done")?;
        Ok(FinalizeState::CheckStaged)
    }

    fn check_staged(&mut self) -> ReviewResult<FinalizeState> {
        let staged = staged_count(&self.session.repo)?;
        Ok(if staged == 0 {
            FinalizeState::Done(FinalizeOutcome::NothingStaged)
        } else {
            FinalizeState::AwaitConfirmFinalize { staged }
        })
    }

    fn await_confirm_finalize(&mut self, staged: usize) -> ReviewResult<FinalizeState> {
        let prompt = format!(
            "Commit {staged} staged file(s) and replace '{}' with the result?",
            self.resolved.from.name
        );
        Ok(if self.session.prompter.confirm(&prompt, false)? {
            FinalizeState::PromptCommitMessage
        } else {
            FinalizeState::Done(FinalizeOutcome::Declined { staged })
        })
    }

    fn prompt_commit_message(&mut self) -> ReviewResult<FinalizeState> {
        let message = self.session.prompter.input("Commit message")?;
        let message = message.trim();
        if message.is_empty() {
            eprintln!("Commit message must not be empty.");
            return Ok(FinalizeState::PromptCommitMessage);
        }
        Ok(FinalizeState::Commit {
            message: message.to_string(),
        })
    }

    fn commit(&mut self, message: &str) -> ReviewResult<FinalizeState> {
        commit(&self.session.repo, message)?;
        Ok(FinalizeState::SwitchToFrom)
    }

    fn switch_to_from(&mut self) -> ReviewResult<FinalizeState> {
        let repo = self.session.repo.as_path();
        let from = &self.resolved.from;
        let introduced = added_paths(repo, &self.resolved.to.rev, &from.rev)?;
        discard_changes(repo, &introduced)?;
        if from.local {
            checkout(repo, &from.name)?;
        } else {
            checkout(repo, &from.rev)?;
            create_branch(repo, &from.name)?;
        }
        Ok(FinalizeState::HardResetFromToReview)
    }

    fn hard_reset_from_to_review(&mut self) -> ReviewResult<FinalizeState> {
        let repo = self.session.repo.as_path();
        reset_hard(repo, &format!("refs/heads/{}", self.resolved.review_branch))?;
        let head = rev_parse(repo, "HEAD")?;
        info!(branch = %self.resolved.from.name, commit = %head, "branch replaced");
        self.commit = Some(head);
        Ok(FinalizeState::DeleteReviewBranch)
    }

    fn delete_review_branch(&mut self) -> ReviewResult<FinalizeState> {
        delete_branch(&self.session.repo, &self.resolved.review_branch)?;
        Ok(FinalizeState::AwaitConfirmPush)
    }

    fn await_confirm_push(&mut self) -> ReviewResult<FinalizeState> {
        let prompt = format!(
            "Force-push '{}' to '{}' (with lease)?",
            self.resolved.from.name, self.session.settings.remote
        );
        Ok(if self.session.prompter.confirm(&prompt, false)? {
            FinalizeState::Push
        } else {
            self.finished(PushOutcome::NotRequested)
        })
    }

    fn push(&mut self) -> FinalizeState {
        let remote = &self.session.settings.remote;
        let branch = &self.resolved.from.name;
        let outcome = match push_force_with_lease(&self.session.repo, remote, branch) {
            Ok(()) => PushOutcome::Pushed {
                remote: remote.clone(),
            },
            Err(e) => {
                warn!(%branch, %remote, error = %e, "push failed");
                PushOutcome::Failed {
                    message: e.to_string(),
                }
            }
        };
        self.finished(outcome)
    }

    fn finished(&mut self, push: PushOutcome) -> FinalizeState {
        FinalizeState::Done(FinalizeOutcome::Finalized {
            branch: self.resolved.from.name.clone(),
            commit: self.commit.take().unwrap_or_default(),
            push,
        })
    }
}
