//! Terminal rendering for the `blogger` binary
//!
//! Layered the same way throughout: `theme` holds the design tokens,
//! `primitives` turn tokens into styled strings, `blocks` compose primitives,
//! and `views` render one command's output.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
