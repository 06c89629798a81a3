//! Repository Implementations
//!
//! Loading content and templates from the project tree.

mod content;

pub use content::{ContentRepository, ContentSet};
