// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for git-review using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! git-review [global options] [--from B] [--to B] [--suffix S] [--no-interactive]
//! git review ...              (as a git subcommand)
//! ```

pub mod global;
pub mod review;


use crate::cli::global::GlobalOptions;
use crate::cli::review::ReviewArgs;
use clap::Parser;

/// Branch delta review tool
///
/// Puts the difference between two branches on a fresh review branch as
/// uncommitted changes, so it can be accepted hunk by hunk.
#[derive(Debug, Parser)]
#[command(
    name = "git-review",
    author,
    version,
    about = "Review the delta between two branches as uncommitted changes",
    long_about = "git-review Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Checks out the target branch, creates `<from><suffix>` from it\n\
                  and applies everything `from` adds on top of `to` as unstaged\n\
                  changes. Stage what you accept with your usual tools; in\n\
                  interactive mode git-review can then commit the staged result\n\
                  and make `from` point at it.",
    after_help = "CONFIG FILES:\n\n\
                  git-review reads `.git-review.toml` from the repository root if\n\
                  present, then every file given with --config, in order. Values\n\
                  can also be set with GIT_REVIEW_<SECTION>__<KEY> environment\n\
                  variables, e.g. GIT_REVIEW_REVIEW__SUFFIX=-wip. Command-line\n\
                  flags override everything."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Review options
    #[command(flatten)]
    pub review: ReviewArgs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
