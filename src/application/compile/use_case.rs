//! Compile Use Case
//!
//! Orchestrates one compile cycle:
//! 1. Load `site.yaml` and compile its ignore patterns
//! 2. Scan templates, posts and (optionally) drafts
//! 3. Per post: pre hooks, template expansion, conversion, metadata
//!    projection, post hooks
//! 4. Per template: ask extensions, render with `site` and `posts`, write
//! 5. Mirror copy paths into the output root
//! 6. Finalize extensions
//!
//! Any failure aborts the cycle. Whether that ends the process is the
//! caller's call.

use std::fs;
use std::sync::Arc;

use crate::config::{load_site_config, CompileOptions, ProjectLayout, SiteConfig};
use crate::domain::entities::Post;
use crate::domain::ports::{ConverterOptions, MarkdownConverter, RenderContext, TemplateRenderer};
use crate::error::{BloggerError, BloggerResult};
use crate::infrastructure::extensions::{ExtensionHost, ExtensionSet};
use crate::infrastructure::fs::{copy_file, mirror_dir, resolve_in_project, write_atomic, TreeWalker};
use crate::infrastructure::markdown::PulldownConverter;
use crate::infrastructure::repositories::{ContentRepository, ContentSet};
use crate::infrastructure::templates::TemplateEngine;

use super::result::CompileResult;

/// Metadata key listing extra converter extensions for one post
const POST_EXTENSIONS_KEY: &str = "markdown-extensions";
/// Metadata key holding per-post converter options
const POST_CONFIGURATIONS_KEY: &str = "markdown-extensions-configurations";

/// Render pipeline over one project.
pub struct CompileUseCase {
    layout: ProjectLayout,
    extensions: ExtensionHost,
    converter: Arc<dyn MarkdownConverter>,
}

impl CompileUseCase {
    pub fn new(layout: ProjectLayout, extensions: ExtensionHost) -> Self {
        Self {
            layout,
            extensions,
            converter: Arc::new(PulldownConverter::new()),
        }
    }

    /// Use a different markdown converter.
    pub fn with_converter(mut self, converter: Arc<dyn MarkdownConverter>) -> Self {
        self.converter = converter;
        self
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Run one full compile cycle.
    pub fn execute(&self, options: &CompileOptions) -> BloggerResult<CompileResult> {
        let layout = &self.layout;
        if !layout.templates.is_dir() {
            return Err(BloggerError::TemplatesNotFound {
                path: layout.templates.clone(),
            });
        }

        let site = Arc::new(load_site_config(&layout.site_config)?);
        let ignore = site.ignore_matcher(&layout.root, &layout.site_config)?;
        let walker = TreeWalker::new(&ignore, &layout.root).exclude(&layout.out_dir);
        let repo = ContentRepository::new(walker.clone());

        let engine = Arc::new(TemplateEngine::new(vec![
            layout.templates.clone(),
            layout.posts.clone(),
            layout.root.clone(),
        ]));
        let mut extensions = self.extensions.instantiate(
            layout.root.clone(),
            layout.out_dir.clone(),
            Arc::clone(&site),
            Arc::clone(&engine) as Arc<dyn TemplateRenderer>,
        );

        let templates = repo.templates(&layout.templates)?;
        let mut posts = self.scan_posts(&repo, options)?;
        tracing::debug!(
            templates = templates.len(),
            posts = posts.len(),
            extensions = extensions.len(),
            "scanned project"
        );

        let mut result = CompileResult::new(layout.out_dir.clone());

        for (name, post) in posts.iter_mut() {
            self.render_post(name, post, &site, &engine, &mut extensions)?;
            result.posts.push(name.clone());
        }
        let posts: Vec<Post> = posts.into_values().collect();

        fs::create_dir_all(&layout.out_dir)?;
        for (name, template) in &templates {
            if extensions.should_skip_template(name, template, &posts)? {
                tracing::info!(template = %name, "skipping template");
                result.skipped.push(name.clone());
                continue;
            }

            tracing::info!(template = %name, "rendering template");
            let rendered = engine.render(name, RenderContext::new(&site, &posts))?;
            let out = layout.out_dir.join(name);
            tracing::debug!(path = %out.display(), "writing rendered template");
            write_atomic(&out, rendered.as_bytes())?;
            result.written.push(out);
        }

        self.copy_paths(&site, &walker, &mut result)?;

        extensions.finalize()?;
        Ok(result)
    }

    /// Posts, with drafts merged over them when requested.
    fn scan_posts(
        &self,
        repo: &ContentRepository<'_>,
        options: &CompileOptions,
    ) -> BloggerResult<ContentSet<Post>> {
        let layout = &self.layout;
        let mut posts = if layout.posts.is_dir() {
            repo.posts(&layout.posts)?
        } else {
            tracing::debug!(path = %layout.posts.display(), "no posts directory");
            ContentSet::new()
        };

        if options.include_drafts {
            if layout.drafts.is_dir() {
                posts.extend(repo.posts(&layout.drafts)?);
            } else {
                tracing::error!(
                    path = %layout.drafts.display(),
                    "cannot compile with drafts, directory does not exist"
                );
            }
        }
        Ok(posts)
    }

    fn render_post(
        &self,
        name: &str,
        post: &mut Post,
        site: &SiteConfig,
        engine: &TemplateEngine,
        extensions: &mut ExtensionSet,
    ) -> BloggerResult<()> {
        tracing::info!(post = %name, "rendering post");
        post.name = name.to_string();

        extensions.pre_render_post(name, post)?;

        post.rendered_text = engine.render_post(name, post, site)?;

        let converter_options = ConverterOptions::merged(
            &site.markdown_extensions,
            &site.markdown_extensions_configurations,
            &post.meta_list(POST_EXTENSIONS_KEY),
            post.meta_mapping(POST_CONFIGURATIONS_KEY),
        );
        post.html = self.converter.convert(&post.rendered_text, &converter_options);

        post.compute_toc();
        post.project_metadata();

        extensions.post_render_post(name, post)
    }

    fn copy_paths(
        &self,
        site: &SiteConfig,
        walker: &TreeWalker<'_>,
        result: &mut CompileResult,
    ) -> BloggerResult<()> {
        let layout = &self.layout;
        for path_name in &site.copy_paths {
            let src = resolve_in_project(&layout.root, path_name)?;
            let dst = layout.out_dir.join(path_name);
            let is_dir = src.is_dir();

            if walker.is_skipped(&src, is_dir) {
                tracing::info!(path = %path_name, "ignoring copy path");
                result.ignored.push(path_name.clone());
                continue;
            }

            if is_dir {
                tracing::info!(from = %src.display(), to = %dst.display(), "copying directory");
                result.copied += mirror_dir(walker, &src, &dst)?;
            } else {
                tracing::info!(from = %src.display(), to = %dst.display(), "copying file");
                copy_file(&src, &dst)?;
                result.copied += 1;
            }
        }
        Ok(())
    }
}
