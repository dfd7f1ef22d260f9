// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Prompter that replays canned answers, for driving the review flow in tests.

use std::collections::VecDeque;

use super::Prompter;
use crate::error::{ReviewResult, bail_out};

/// One canned answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Answer {
    Select(usize),
    Confirm(bool),
    Enter,
    Text(String),
}

/// Replays answers in order and records every prompt it was shown.
#[derive(Default)]
pub(crate) struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub(crate) asked: Vec<String>,
    /// Runs while the flow blocks on Enter, standing in for the operator.
    on_wait: Option<Box<dyn FnMut()>>,
}

impl ScriptedPrompter {
    pub(crate) fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
            on_wait: None,
        }
    }

    /// Act on the repository when the flow waits for Enter.
    pub(crate) fn on_wait(mut self, action: impl FnMut() + 'static) -> Self {
        self.on_wait = Some(Box::new(action));
        self
    }

    /// Answers not consumed by the flow.
    pub(crate) fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> ReviewResult<Answer> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| bail_out(format!("no scripted answer for '{prompt}'")))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, _items: &[String], _default: usize) -> ReviewResult<usize> {
        match self.next(prompt)? {
            Answer::Select(index) => Ok(index),
            other => Err(bail_out(format!("expected select for '{prompt}', got {other:?}"))),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> ReviewResult<bool> {
        match self.next(prompt)? {
            Answer::Confirm(yes) => Ok(yes),
            other => Err(bail_out(format!("expected confirm for '{prompt}', got {other:?}"))),
        }
    }

    fn wait_for_enter(&mut self, prompt: &str) -> ReviewResult<()> {
        match self.next(prompt)? {
            Answer::Enter => {
                if let Some(action) = self.on_wait.as_mut() {
                    action();
                }
                Ok(())
            }
            other => Err(bail_out(format!("expected enter for '{prompt}', got {other:?}"))),
        }
    }

    fn input(&mut self, prompt: &str) -> ReviewResult<String> {
        match self.next(prompt)? {
            Answer::Text(text) => Ok(text),
            other => Err(bail_out(format!("expected text for '{prompt}', got {other:?}"))),
        }
    }
}
