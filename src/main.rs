// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> run_review_command
//! ```

use std::process::ExitCode;

use git_review::cli::{self, Cli};
use git_review::cmd::review::run_review_command;
use git_review::config::loader::ConfigLoader;
use git_review::config::{Config, ENV_PREFIX, REPO_CONFIG_FILE};
use git_review::git::query::work_tree_root;
use git_review::logging::{LogConfig, init_logging};
use tracing::debug;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let (config, loaded_files) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };
    for line in loaded_files {
        debug!("config file {line}");
    }
    for line in config.format_options() {
        debug!("{line}");
    }

    match run_review_command(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn build_config_loader(cli: &Cli) -> git_review::error::Result<ConfigLoader> {
    let global = &cli.global;
    let repo_dir = global.repo_dir();
    // Outside a repository the run fails later with a proper message.
    let root = work_tree_root(&repo_dir).unwrap_or(repo_dir);
    let mut loader = ConfigLoader::new().add_toml_file_optional(root.join(REPO_CONFIG_FILE));
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }

    loader
        .with_env_prefix(ENV_PREFIX)
        .set_maybe("global.log_level", global.log_level.map(i64::from))?
        .set_maybe(
            "global.file_log_level",
            global.file_log_level.or(global.log_level).map(i64::from),
        )?
        .set_maybe(
            "global.log_file",
            global.log_file.as_ref().map(|p| p.display().to_string()),
        )?
        .set_maybe("review.suffix", cli.review.suffix.clone())
}

fn load_config(cli: &Cli) -> git_review::error::Result<(Config, Vec<String>)> {
    let loader = build_config_loader(cli)?;
    let loaded_files = loader.format_loaded_files();
    Ok((loader.build()?, loaded_files))
}
