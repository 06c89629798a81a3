//! Extension port - the capability contract for compile-time plugins
//!
//! Extensions are registered as named factories and instantiated fresh at the
//! start of every compile cycle, so instance fields never survive a cycle.
//! Hooks run in registration order and only observe or mutate; none of them
//! can stop the per-post phase.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::domain::entities::{Post, TemplateItem};
use crate::domain::ports::renderer::TemplateRenderer;

/// Read-only view of the cycle an extension is constructed for.
#[derive(Clone)]
pub struct ExtensionContext {
    /// Span scoping this extension's log output
    pub span: tracing::Span,
    /// Project root
    pub working_dir: PathBuf,
    /// Output directory of this compile
    pub out_dir: PathBuf,
    /// Site configuration as loaded for this cycle
    pub site: Arc<SiteConfig>,
    /// Template environment of this cycle
    pub templates: Arc<dyn TemplateRenderer>,
}

impl std::fmt::Debug for ExtensionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionContext")
            .field("working_dir", &self.working_dir)
            .field("out_dir", &self.out_dir)
            .finish_non_exhaustive()
    }
}

/// Hooks invoked by the render pipeline.
///
/// Every hook has a no-op default. Returning an error aborts the compile
/// cycle like any other failure.
pub trait Extension: Send {
    /// Called before a post's body is template-expanded.
    fn pre_render_post(&mut self, _name: &str, _post: &mut Post) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called after a post has been converted and its metadata projected.
    fn post_render_post(&mut self, _name: &str, _post: &mut Post) -> anyhow::Result<()> {
        Ok(())
    }

    /// Return `true` to take over a template: the pipeline will neither
    /// render nor write it. Any one extension answering `true` is enough.
    fn should_skip_template(
        &mut self,
        _name: &str,
        _template: &TemplateItem,
        _posts: &[Post],
    ) -> anyhow::Result<bool> {
        Ok(false)
    }

    /// Called once after templates are written and copy paths are mirrored.
    fn finalize(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Builds one extension instance for a compile cycle.
pub type ExtensionFactory = Arc<dyn Fn(&ExtensionContext) -> Box<dyn Extension> + Send + Sync>;
