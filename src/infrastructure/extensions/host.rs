//! Extension resolution and per-cycle instantiation

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{ProjectLayout, SiteConfig};
use crate::domain::entities::{Post, TemplateItem};
use crate::domain::ports::{
    Extension, ExtensionContext, ExtensionFactory, Provisioner, TemplateRenderer,
};
use crate::error::{BloggerError, BloggerResult};

use super::manifest::ExtensionManifest;
use super::registry::ExtensionRegistry;

/// The extensions a project enabled, resolved to factories.
#[derive(Clone, Default)]
pub struct ExtensionHost {
    enabled: Vec<(String, ExtensionFactory)>,
}

impl ExtensionHost {
    /// A host with no extensions.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read the project's manifest, provision its requirements, and resolve
    /// every enabled name against `registry`.
    ///
    /// No manifest means no extensions. Provisioning runs before anything is
    /// compiled, and its failure is fatal.
    pub fn load(
        layout: &ProjectLayout,
        registry: &ExtensionRegistry,
        provisioner: &dyn Provisioner,
    ) -> BloggerResult<Self> {
        let Some(path) = layout.extension_manifest() else {
            tracing::debug!("no extension manifest, running without extensions");
            return Ok(Self::empty());
        };
        tracing::debug!(path = %path.display(), "found extension manifest");

        let manifest = ExtensionManifest::load(&path)?;
        if provisioner.ensure(&manifest.requirements(&layout.root))? {
            tracing::info!("installed extension requirements");
        }
        Self::resolve(&manifest, registry)
    }

    /// Resolve the manifest's enabled names. Unknown names are fatal.
    pub fn resolve(manifest: &ExtensionManifest, registry: &ExtensionRegistry) -> BloggerResult<Self> {
        let enabled = manifest
            .enabled
            .iter()
            .map(|name| {
                registry
                    .get(name)
                    .map(|f| (name.clone(), f))
                    .ok_or_else(|| BloggerError::UnknownExtension { name: name.clone() })
            })
            .collect::<BloggerResult<Vec<_>>>()?;
        Ok(Self { enabled })
    }

    /// Enabled extension names, in invocation order.
    pub fn names(&self) -> Vec<&str> {
        self.enabled.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Build fresh instances for one compile cycle.
    pub fn instantiate(
        &self,
        working_dir: PathBuf,
        out_dir: PathBuf,
        site: Arc<SiteConfig>,
        templates: Arc<dyn TemplateRenderer>,
    ) -> ExtensionSet {
        let loaded = self
            .enabled
            .iter()
            .map(|(name, build)| {
                let ctx = ExtensionContext {
                    span: tracing::info_span!("extension", name = %name),
                    working_dir: working_dir.clone(),
                    out_dir: out_dir.clone(),
                    site: Arc::clone(&site),
                    templates: Arc::clone(&templates),
                };
                let inner = {
                    let _entered = ctx.span.enter();
                    build(&ctx)
                };
                LoadedExtension {
                    name: name.clone(),
                    span: ctx.span.clone(),
                    inner,
                }
            })
            .collect();
        ExtensionSet { loaded }
    }
}

impl std::fmt::Debug for ExtensionHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionHost")
            .field("enabled", &self.names())
            .finish()
    }
}

/// One extension instance with its log span.
pub struct LoadedExtension {
    name: String,
    span: tracing::Span,
    inner: Box<dyn Extension>,
}

impl LoadedExtension {
    /// Wrap an instance directly, bypassing the registry.
    pub fn new(name: impl Into<String>, inner: Box<dyn Extension>) -> Self {
        let name = name.into();
        Self {
            span: tracing::info_span!("extension", name = %name),
            name,
            inner,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn failed(&self, err: anyhow::Error) -> BloggerError {
        BloggerError::Extension {
            name: self.name.clone(),
            message: format!("{:#}", err),
        }
    }
}

/// The extension instances of one compile cycle, in invocation order.
#[derive(Default)]
pub struct ExtensionSet {
    loaded: Vec<LoadedExtension>,
}

impl ExtensionSet {
    pub fn new(loaded: Vec<LoadedExtension>) -> Self {
        Self { loaded }
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    pub fn pre_render_post(&mut self, name: &str, post: &mut Post) -> BloggerResult<()> {
        for ext in &mut self.loaded {
            let _entered = ext.span.clone().entered();
            ext.inner
                .pre_render_post(name, post)
                .map_err(|e| ext.failed(e))?;
        }
        Ok(())
    }

    pub fn post_render_post(&mut self, name: &str, post: &mut Post) -> BloggerResult<()> {
        for ext in &mut self.loaded {
            let _entered = ext.span.clone().entered();
            ext.inner
                .post_render_post(name, post)
                .map_err(|e| ext.failed(e))?;
        }
        Ok(())
    }

    /// Ask every extension; `true` if any of them claims the template.
    ///
    /// Every extension is asked even after one has claimed it, so each sees
    /// the full template list.
    pub fn should_skip_template(
        &mut self,
        name: &str,
        template: &TemplateItem,
        posts: &[Post],
    ) -> BloggerResult<bool> {
        let mut skip = false;
        for ext in &mut self.loaded {
            let _entered = ext.span.clone().entered();
            let claimed = ext
                .inner
                .should_skip_template(name, template, posts)
                .map_err(|e| ext.failed(e))?;
            if claimed {
                tracing::info!(template = %name, "extension has skipped template");
                skip = true;
            }
        }
        Ok(skip)
    }

    pub fn finalize(&mut self) -> BloggerResult<()> {
        for ext in &mut self.loaded {
            let _entered = ext.span.clone().entered();
            ext.inner.finalize().map_err(|e| ext.failed(e))?;
        }
        Ok(())
    }
}
