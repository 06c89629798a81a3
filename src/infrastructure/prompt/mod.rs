//! Prompter Implementations

mod terminal;

pub use terminal::DialoguerPrompter;
