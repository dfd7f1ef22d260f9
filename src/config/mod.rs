// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <repo>/.git-review.toml (optional)
//! 3. --config FILE (repeatable, required)
//! 4. GIT_REVIEW_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GIT_REVIEW_REVIEW__SUFFIX=-wip   → review.suffix = "-wip"
//! GIT_REVIEW_REVIEW__FETCH=false   → review.fetch = false
//! GIT_REVIEW_GLOBAL__LOG_LEVEL=4   → global.log_level = 4
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GlobalConfig, ReviewConfig};

/// Name of the per-repository configuration file.
pub const REPO_CONFIG_FILE: &str = ".git-review.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "GIT_REVIEW";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Review workflow options.
    pub review: ReviewConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use git_review::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional(".git-review.toml")
    ///     .with_env_prefix("GIT_REVIEW")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check values that deserialize fine but cannot drive a review.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an empty suffix or remote.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.review.suffix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "review".to_string(),
                key: "suffix".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.review.remote.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "review".to_string(),
                key: "remote".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "global.log_level".to_string(),
            self.global.log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("review.suffix".to_string(), self.review.suffix.clone());
        options.insert(
            "review.default_targets".to_string(),
            self.review.default_targets.join(", "),
        );
        options.insert("review.remote".to_string(), self.review.remote.clone());
        options.insert("review.fetch".to_string(), self.review.fetch.to_string());
        options.insert(
            "review.include_untracked".to_string(),
            self.review.include_untracked.to_string(),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
