// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! ```text
//! Config: GlobalConfig, ReviewConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Suffix appended to the source branch name when none is configured.
pub const DEFAULT_SUFFIX: &str = "-review";

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file. No file logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Review workflow options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReviewConfig {
    /// Appended to the source branch to name the review branch.
    pub suffix: String,
    /// Target branch suggestions, in order of preference.
    pub default_targets: Vec<String>,
    /// Remote used by the lease-protected push.
    pub remote: String,
    /// Fetch all remotes before listing branches.
    pub fetch: bool,
    /// Stash untracked files along with tracked changes.
    pub include_untracked: bool,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            default_targets: vec!["main".to_string(), "master".to_string()],
            remote: "origin".to_string(),
            fetch: true,
            include_untracked: true,
        }
    }
}
