//! Common test utilities for Blogger integration and CLI tests.
//!
//! - `TestBlog`: an isolated blog project in a temp directory
//! - Fixtures: reusable template and post content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
