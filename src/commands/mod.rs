//! Subcommand implementations
//!
//! Each command resolves the project, builds its use case through the
//! presentation factory, and renders the outcome through `ui`.

pub mod compile;
pub mod draft;
pub mod post;
pub mod project;
pub mod run;
