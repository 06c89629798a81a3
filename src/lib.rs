//! Blogger - static blog compiler
//!
//! Blogger renders a directory of markdown posts and jinja-style templates
//! into a finished site, keeps that site up to date while you write, serves
//! it locally for preview, and moves posts from `drafts/` to `posts/`.
//!
//! ## Architecture
//!
//! - `domain` - Posts, templates, value objects, and the ports everything talks through
//! - `application` - Use cases: compile, watch, publish, draft
//! - `infrastructure` - File system, minijinja, pulldown-cmark, tiny_http, dialoguer
//! - `presentation` - CLI definition and use-case wiring
//! - `config` - Project layout and `site.yaml`

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ChangeDetector, CompileResult, CompileUseCase, DraftUseCase, PublishUseCase, WatchEvent,
    WatchUseCase,
};
pub use config::{CompileOptions, ProjectLayout, SiteConfig, WatchOptions};
pub use domain::entities::{Post, TemplateItem};
pub use domain::ports::{Extension, ExtensionContext, Prompter};
pub use error::{BloggerError, BloggerResult};
pub use infrastructure::extensions::{factory, ExtensionRegistry};
