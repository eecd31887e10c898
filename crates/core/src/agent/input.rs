//! Input providers answer interactive agents' prompts.

use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

/// The provider can no longer answer (for example, stdin reached end of file).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("input provider closed")
    }
}

impl Error for InputClosed {}

pub trait InputProvider {
    /// Blocks until an answer is available. Callers re-ask when the answer is not one of `options`.
    fn request(&mut self, prompt: &str, options: &[&str]) -> Result<String, InputClosed>;
}

impl<F> InputProvider for F
where
    F: FnMut(&str, &[&str]) -> Result<String, InputClosed>,
{
    fn request(&mut self, prompt: &str, options: &[&str]) -> Result<String, InputClosed> {
        self(prompt, options)
    }
}

/// Provider for runs with no one at the keyboard.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unattended;

impl InputProvider for Unattended {
    fn request(&mut self, _prompt: &str, _options: &[&str]) -> Result<String, InputClosed> {
        Err(InputClosed)
    }
}

/// Answers prompts from a fixed queue and records what it was asked.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { answers: answers.into_iter().map(Into::into).collect(), prompts: Vec::new() }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputProvider for ScriptedInput {
    fn request(&mut self, prompt: &str, _options: &[&str]) -> Result<String, InputClosed> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(InputClosed)
    }
}
