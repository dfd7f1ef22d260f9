// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Review options.

use clap::Args;

/// Which branches to compare and how to name the review branch.
#[derive(Debug, Clone, Default, Args)]
pub struct ReviewArgs {
    /// Branch with the changes to review (default: prompt, or the current branch).
    #[arg(long, value_name = "BRANCH")]
    pub from: Option<String>,

    /// Branch to review against (default: prompt, or main/master).
    #[arg(long, value_name = "BRANCH")]
    pub to: Option<String>,

    /// Suffix for the review branch name [default: -review].
    #[arg(long, value_name = "TEXT")]
    pub suffix: Option<String>,

    /// Never prompt: stash and recreate without asking, skip finalizing.
    #[arg(long = "no-interactive")]
    pub no_interactive: bool,
}
