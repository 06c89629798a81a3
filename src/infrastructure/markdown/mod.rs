//! Markdown conversion
//!
//! The pipeline only sees the [`MarkdownConverter`](crate::domain::ports::MarkdownConverter)
//! port; this module provides the pulldown-cmark implementation.

mod pulldown;

pub use pulldown::{heading_slug, PulldownConverter};
