//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Walking, copying, atomic writes, app-data directory
//! - `repositories/` - Content repository scanner
//! - `markdown/` - pulldown-cmark converter
//! - `templates/` - minijinja template engine
//! - `extensions/` - Extension registry, manifest, provisioning, built-ins
//! - `prompt/` - dialoguer terminal prompter
//! - `server/` - tiny_http preview server

pub mod extensions;
pub mod fs;
pub mod markdown;
pub mod prompt;
pub mod repositories;
pub mod server;
pub mod templates;

// Re-export for convenience
pub use extensions::{ExtensionHost, ExtensionRegistry, StampProvisioner};
pub use markdown::PulldownConverter;
pub use prompt::DialoguerPrompter;
pub use repositories::ContentRepository;
pub use server::PreviewServer;
pub use templates::TemplateEngine;
