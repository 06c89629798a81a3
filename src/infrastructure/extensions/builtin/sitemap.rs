//! `sitemap`: writes a site map once every page is rendered.
//!
//! If the project has a `sitemap.xml` template the extension claims it, so
//! the pipeline skips it, and renders it itself in `finalize` with `site`,
//! `posts` and `pages` (every other template whose output was written).
//! Without such a template it writes a plain `sitemap.txt`, one page URL per
//! line.

use serde_yaml_ng::Value;

use crate::domain::entities::{Post, TemplateItem};
use crate::domain::ports::{Extension, ExtensionContext, RenderContext};
use crate::infrastructure::fs::write_atomic;

pub const SITEMAP: &str = "sitemap";

/// Template the extension takes over
pub const SITEMAP_TEMPLATE: &str = "sitemap.xml";

/// Fallback output when no template exists
pub const SITEMAP_TEXT: &str = "sitemap.txt";

pub struct Sitemap {
    ctx: ExtensionContext,
    claimed: bool,
    pages: Vec<String>,
    posts: Vec<Post>,
}

impl Sitemap {
    pub fn new(ctx: &ExtensionContext) -> Self {
        Self {
            ctx: ctx.clone(),
            claimed: false,
            pages: Vec::new(),
            posts: Vec::new(),
        }
    }

    /// `url` from `site.yaml`, without a trailing slash.
    fn base_url(&self) -> String {
        self.ctx
            .site
            .extra
            .get("url")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim_end_matches('/')
            .to_string()
    }
}

impl Extension for Sitemap {
    fn should_skip_template(
        &mut self,
        name: &str,
        _template: &TemplateItem,
        posts: &[Post],
    ) -> anyhow::Result<bool> {
        if self.posts.is_empty() {
            self.posts = posts.to_vec();
        }
        if name == SITEMAP_TEMPLATE {
            self.claimed = true;
            return Ok(true);
        }
        self.pages.push(name.to_string());
        Ok(false)
    }

    fn finalize(&mut self) -> anyhow::Result<()> {
        // Another extension may have claimed a template and never written it.
        let pages: Vec<&String> = self
            .pages
            .iter()
            .filter(|page| self.ctx.out_dir.join(page.as_str()).is_file())
            .collect();

        if self.claimed {
            let pages = vec![(
                "pages".to_string(),
                Value::Sequence(pages.into_iter().cloned().map(Value::String).collect()),
            )];
            let context = RenderContext::new(&self.ctx.site, &self.posts).with_vars(&pages);
            let rendered = self.ctx.templates.render(SITEMAP_TEMPLATE, context)?;
            let out = self.ctx.out_dir.join(SITEMAP_TEMPLATE);
            write_atomic(&out, rendered.as_bytes())?;
            tracing::info!(path = %out.display(), "wrote sitemap");
            return Ok(());
        }

        let base = self.base_url();
        let mut text = String::new();
        for page in &pages {
            text.push_str(&format!("{}/{}\n", base, page));
        }
        let out = self.ctx.out_dir.join(SITEMAP_TEXT);
        write_atomic(&out, text.as_bytes())?;
        tracing::info!(path = %out.display(), pages = pages.len(), "wrote plain sitemap");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::infrastructure::templates::TemplateEngine;
    use std::fs;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn context(root: &std::path::Path, site: SiteConfig) -> ExtensionContext {
        ExtensionContext {
            span: tracing::Span::none(),
            working_dir: root.to_path_buf(),
            out_dir: root.join("out"),
            site: Arc::new(site),
            templates: Arc::new(TemplateEngine::new(vec![root.join("templates")])),
        }
    }

    /// Stand in for the pipeline having written these pages.
    fn rendered(root: &std::path::Path, pages: &[&str]) {
        for page in pages {
            let path = root.join("out").join(page);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "page").unwrap();
        }
    }

    #[test]
    fn claims_template_and_renders_it_in_finalize() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("templates")).unwrap();
        fs::write(
            dir.path().join("templates/sitemap.xml"),
            "{% for p in pages %}<url>{{ p }}</url>{% endfor %}{{ posts|length }}",
        )
        .unwrap();

        let mut sitemap = Sitemap::new(&context(dir.path(), SiteConfig::default()));
        let posts = vec![Post::default(), Post::default()];
        let item = TemplateItem::new("x", "");
        rendered(dir.path(), &["index.html"]);

        assert!(!sitemap.should_skip_template("index.html", &item, &posts).unwrap());
        assert!(sitemap.should_skip_template("sitemap.xml", &item, &posts).unwrap());
        sitemap.finalize().unwrap();

        let written = fs::read_to_string(dir.path().join("out/sitemap.xml")).unwrap();
        assert_eq!(written, "<url>index.html</url>2");
    }

    #[test]
    fn falls_back_to_plain_text() {
        let dir = tempdir().unwrap();
        let site: SiteConfig = serde_yaml_ng::from_str("url: https://example.com/").unwrap();
        let mut sitemap = Sitemap::new(&context(dir.path(), site));
        let item = TemplateItem::new("x", "");

        sitemap.should_skip_template("index.html", &item, &[]).unwrap();
        sitemap.should_skip_template("about/index.html", &item, &[]).unwrap();
        rendered(dir.path(), &["index.html", "about/index.html"]);
        sitemap.finalize().unwrap();

        let written = fs::read_to_string(dir.path().join("out/sitemap.txt")).unwrap();
        assert_eq!(
            written,
            "https://example.com/index.html\nhttps://example.com/about/index.html\n"
        );
    }

    #[test]
    fn pages_without_output_are_left_out() {
        let dir = tempdir().unwrap();
        let site: SiteConfig = serde_yaml_ng::from_str("url: https://example.com").unwrap();
        let mut sitemap = Sitemap::new(&context(dir.path(), site));
        let item = TemplateItem::new("x", "");

        sitemap.should_skip_template("index.html", &item, &[]).unwrap();
        sitemap.should_skip_template("feed.xml", &item, &[]).unwrap();
        rendered(dir.path(), &["index.html"]);
        sitemap.finalize().unwrap();

        let written = fs::read_to_string(dir.path().join("out/sitemap.txt")).unwrap();
        assert_eq!(written, "https://example.com/index.html\n");
    }
}
