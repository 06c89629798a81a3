//! Domain Entities
//!
//! - `Post` - One content item (published post or draft), mutated in place
//!   by the render pipeline and discarded at the end of a compile cycle
//! - `TemplateItem` - A layout template rendered in the aggregate phase

mod post;
mod template;

pub(crate) use post::value_to_plain_string;
pub use post::{Metadata, Post};
pub use template::TemplateItem;
