//! Template environment (minijinja)

mod engine;

pub use engine::{PostValue, TemplateEngine};
