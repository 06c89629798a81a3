//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod ignore_patterns;
mod post_date;
mod slug;

pub use hash::ContentHash;
pub use ignore_patterns::{IgnoreError, IgnorePatterns};
pub use post_date::{parse_date_answer, DATE_FORMAT};
pub use slug::{draft_file_name, publish_file_name, slugify, DEFAULT_DRAFT_TITLE};
