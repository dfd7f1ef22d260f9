// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            ReviewError (~24 bytes)
//!                     |
//!   +-------+-------+-------+--------+------+
//!   |       |       |       |        |      |
//!   v       v       v       v        v      v
//! Bail     Git    Cfg    Process  Prompt  Io/Other
//!          Box    Box     Box      Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git     Gix, CommandFailed, BranchNotFound, ApplyFailed, PushFailed
//!   Config  ParseError, InvalidValue
//!   Process ExecutableNotFound, SpawnFailed
//!   Prompt  Terminal, NonInteractive
//! ```
//!
//! A declined confirmation is not an error; see `review::ReviewOutcome`.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ReviewError`].
pub type ReviewResult<T> = std::result::Result<T, ReviewError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Operator prompt error.
    #[error("prompt error: {0}")]
    Prompt(#[from] Box<PromptError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl ReviewError {
    /// Git's own message when this wraps a failed command, else the display text.
    #[must_use]
    pub fn command_message(&self) -> String {
        match self {
            Self::Git(err) => match err.as_ref() {
                GitError::CommandFailed { message, .. } => message.clone(),
                other => other.to_string(),
            },
            other => other.to_string(),
        }
    }
}

/// Create a fatal [`ReviewError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> ReviewError {
    ReviewError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ReviewError {
                fn from(err: $error) -> Self {
                    ReviewError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    ProcessError => Process,
    PromptError => Prompt,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to look up a reference (including HEAD).
    #[error("failed to find reference: {0}")]
    Reference(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// No repository at (or above) the given path.
    #[error("not a git repository: {path}")]
    RepoNotFound { path: String },

    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// Branch does not exist locally or on any remote.
    #[error("branch not found: {branch}")]
    BranchNotFound { branch: String },

    /// HEAD is not on a branch and no source branch was given.
    #[error("HEAD is detached; pass --from to choose the source branch")]
    DetachedHead,

    /// The inter-branch patch could not be applied. The review branch has
    /// already been rolled back when this is raised.
    #[error("failed to apply changes onto {branch}: {message}")]
    ApplyFailed { branch: String, message: String },

    /// Lease-protected force push was rejected or failed.
    #[error("failed to push {branch} to {remote}: {message}")]
    PushFailed {
        branch: String,
        remote: String,
        message: String,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Prompt Errors ---

/// Operator interaction errors.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The terminal could not be read from or written to.
    #[error("terminal interaction failed: {0}")]
    Terminal(#[from] dialoguer::Error),

    /// A prompt was requested while running with `--no-interactive`.
    #[error("cannot ask '{prompt}' in non-interactive mode")]
    NonInteractive { prompt: String },
}

#[cfg(test)]
mod tests;
