//! Prompter port
//!
//! The lifecycle workflows ask questions through this trait so they can run
//! against a live terminal or a scripted answer list.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::{BloggerError, BloggerResult};

/// Interactive input and confirmation.
pub trait Prompter {
    /// Print an informational line.
    fn show(&self, message: &str);

    /// Ask for a line of free text. An empty answer is allowed.
    fn input(&self, prompt: &str) -> BloggerResult<String>;

    /// Ask a yes/no question.
    fn confirm(&self, question: &str) -> BloggerResult<bool>;
}

/// Prompter that replays a fixed list of answers.
///
/// `confirm` consumes answers until one reads as yes or no, the same way a
/// terminal user gets re-asked after typing something else. Running out of
/// answers is an error rather than a hang.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    transcript: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            transcript: RefCell::new(Vec::new()),
        }
    }

    /// Everything shown or asked so far, in order.
    pub fn transcript(&self) -> Vec<String> {
        self.transcript.borrow().clone()
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next_answer(&self, prompt: &str) -> BloggerResult<String> {
        self.transcript.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| BloggerError::Prompt {
                message: format!("no scripted answer left for '{}'", prompt),
            })
    }
}

impl Prompter for ScriptedPrompter {
    fn show(&self, message: &str) {
        self.transcript.borrow_mut().push(message.to_string());
    }

    fn input(&self, prompt: &str) -> BloggerResult<String> {
        self.next_answer(prompt)
    }

    fn confirm(&self, question: &str) -> BloggerResult<bool> {
        loop {
            let answer = self.next_answer(question)?;
            match answer.trim() {
                "y" | "Y" | "yes" => return Ok(true),
                "n" | "N" | "no" => return Ok(false),
                _ => continue,
            }
        }
    }
}
