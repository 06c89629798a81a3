//! Domain Services
//!
//! Pure transformations with no I/O dependencies.

mod front_matter;

pub use front_matter::{parse_metadata, parse_post, split_front_matter, FRONT_MATTER_DELIMITER};
