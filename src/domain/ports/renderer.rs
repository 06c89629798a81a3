//! TemplateRenderer port - access to the resolved template environment
//!
//! Handed to extensions so they can render templates they claimed via
//! `should_skip_template`.

use serde_yaml_ng::Value;

use crate::config::SiteConfig;
use crate::domain::entities::Post;
use crate::error::BloggerResult;

/// Variables available to a template render.
///
/// `site` and `posts` are always bound; `vars` are added at top level after
/// them, so a var named `site` or `posts` replaces the built-in binding.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub site: &'a SiteConfig,
    pub posts: &'a [Post],
    pub vars: &'a [(String, Value)],
}

impl<'a> RenderContext<'a> {
    pub fn new(site: &'a SiteConfig, posts: &'a [Post]) -> Self {
        Self {
            site,
            posts,
            vars: &[],
        }
    }

    pub fn with_vars(mut self, vars: &'a [(String, Value)]) -> Self {
        self.vars = vars;
        self
    }
}

/// Renders named templates resolved across the project's template roots.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, name: &str, context: RenderContext<'_>) -> BloggerResult<String>;
}
