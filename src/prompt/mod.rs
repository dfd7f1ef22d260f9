// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Operator interaction.
//!
//! ```text
//! Prompter (trait)
//!   |-- TerminalPrompter   dialoguer Select / Confirm / Input
//!   '-- Unattended         every call fails (--no-interactive)
//! ```
//!
//! The review flow only talks to `dyn Prompter`, so tests drive it with a
//! scripted implementation.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::error::{PromptError, ReviewResult};

/// Questions the review flow may ask the operator.
pub trait Prompter {
    /// Pick one of `items`; returns its index.
    ///
    /// # Errors
    ///
    /// Returns a `PromptError` if the operator cannot be asked.
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> ReviewResult<usize>;

    /// Yes/no question.
    ///
    /// # Errors
    ///
    /// Returns a `PromptError` if the operator cannot be asked.
    fn confirm(&mut self, prompt: &str, default: bool) -> ReviewResult<bool>;

    /// Block until the operator presses Enter. No timeout.
    ///
    /// # Errors
    ///
    /// Returns a `PromptError` if the terminal cannot be read.
    fn wait_for_enter(&mut self, prompt: &str) -> ReviewResult<()>;

    /// Free-form single line of text. May be empty.
    ///
    /// # Errors
    ///
    /// Returns a `PromptError` if the operator cannot be asked.
    fn input(&mut self, prompt: &str) -> ReviewResult<String>;
}

/// Interactive prompts on the controlling terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> ReviewResult<usize> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(PromptError::from)?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> ReviewResult<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(PromptError::from)?)
    }

    fn wait_for_enter(&mut self, prompt: &str) -> ReviewResult<()> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(PromptError::from)?;
        Ok(())
    }

    fn input(&mut self, prompt: &str) -> ReviewResult<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(PromptError::from)?)
    }
}

/// Prompter for `--no-interactive` runs.
///
/// Reaching it means a decision point forgot to check the interactive flag.
#[derive(Debug, Default)]
pub struct Unattended;

impl Unattended {
    fn refuse<T>(prompt: &str) -> ReviewResult<T> {
        Err(PromptError::NonInteractive {
            prompt: prompt.to_string(),
        }
        .into())
    }
}

impl Prompter for Unattended {
    fn select(&mut self, prompt: &str, _items: &[String], _default: usize) -> ReviewResult<usize> {
        Self::refuse(prompt)
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> ReviewResult<bool> {
        Self::refuse(prompt)
    }

    fn wait_for_enter(&mut self, prompt: &str) -> ReviewResult<()> {
        Self::refuse(prompt)
    }

    fn input(&mut self, prompt: &str) -> ReviewResult<String> {
        Self::refuse(prompt)
    }
}

#[cfg(test)]
pub(crate) mod scripted;
