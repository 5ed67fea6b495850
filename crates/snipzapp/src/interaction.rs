//! # User Interaction Capability
//!
//! Some operations need a decision only the user can make, most notably whether
//! an imported snippet should replace one that already exists. The core never
//! talks to a terminal itself; the client injects an [`Interaction`] and the core
//! asks through it, one question at a time.
//!
//! Every call is a suspension point: the operation does not continue until the
//! answer is back. Declining is a regular outcome, not an error.
//!
//! [`ScriptedInteraction`] answers from a queue and records every question, which
//! makes flows with several conflicts deterministic to test.

use std::collections::VecDeque;

pub trait Interaction {
    /// Ask a yes/no question. `false` also covers "no answer".
    fn confirm(&mut self, message: &str) -> bool;

    /// Ask for a line of text, pre-filled with `default`. `None` means cancelled.
    fn prompt(&mut self, title: &str, message: &str, default: &str) -> Option<String>;
}

/// Answers every confirmation the same way and declines every prompt.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Interaction for FixedAnswer {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }

    fn prompt(&mut self, _title: &str, _message: &str, _default: &str) -> Option<String> {
        None
    }
}

/// Replays queued answers; falls back to `default_confirm` / `None` once empty.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    confirms: VecDeque<bool>,
    prompts: VecDeque<Option<String>>,
    default_confirm: bool,
    asked: Vec<String>,
}

impl ScriptedInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confirms(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.confirms.extend(answers);
        self
    }

    pub fn with_prompts(mut self, answers: impl IntoIterator<Item = Option<String>>) -> Self {
        self.prompts.extend(answers);
        self
    }

    pub fn with_default_confirm(mut self, answer: bool) -> Self {
        self.default_confirm = answer;
        self
    }

    /// Every message asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Interaction for ScriptedInteraction {
    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.confirms.pop_front().unwrap_or(self.default_confirm)
    }

    fn prompt(&mut self, _title: &str, message: &str, _default: &str) -> Option<String> {
        self.asked.push(message.to_string());
        self.prompts.pop_front().flatten()
    }
}
