//! Interactive Prompter
//!
//! Asks questions on the terminal via dialoguer. Everything goes to stderr so
//! stdout stays clean for `--json` output.

use dialoguer::theme::{ColorfulTheme, Theme};
use dialoguer::{Confirm, Input};

use crate::domain::ports::Prompter;
use crate::error::{BloggerError, BloggerResult};

/// Terminal prompter using dialoguer widgets.
pub struct DialoguerPrompter {
    theme: Box<dyn Theme>,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self::with_theme(Box::new(ColorfulTheme::default()))
    }

    pub fn with_theme(theme: Box<dyn Theme>) -> Self {
        Self { theme }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn show(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn input(&self, prompt: &str) -> BloggerResult<String> {
        Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn confirm(&self, question: &str) -> BloggerResult<bool> {
        Confirm::with_theme(self.theme.as_ref())
            .with_prompt(question)
            .interact()
            .map_err(prompt_error)
    }
}

fn prompt_error(err: dialoguer::Error) -> BloggerError {
    BloggerError::Prompt {
        message: err.to_string(),
    }
}
