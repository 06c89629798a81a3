//! minijinja-backed template environment
//!
//! One environment per compile cycle. Templates resolve `{% include %}` and
//! `{% extends %}` across the project's template roots in order, and output
//! is never auto-escaped: post HTML is spliced into layouts verbatim.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use minijinja::value::{Enumerator, Object};
use minijinja::{AutoEscape, Environment, ErrorKind, Value};

use crate::config::SiteConfig;
use crate::domain::entities::Post;
use crate::domain::ports::{RenderContext, TemplateRenderer};
use crate::error::{BloggerError, BloggerResult};

/// Template environment over an ordered list of search roots.
#[derive(Debug)]
pub struct TemplateEngine {
    env: Environment<'static>,
    roots: Vec<PathBuf>,
}

impl TemplateEngine {
    /// Build an environment that looks up template names in `roots`, first
    /// match wins.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);

        let search = roots.clone();
        env.set_loader(move |name| load_from_roots(&search, name));

        Self { env, roots }
    }

    /// Search roots, in lookup order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Expand a post body as a template.
    ///
    /// The context is `site` plus every metadata key at top level; a metadata
    /// key named `site` replaces the site binding.
    pub fn render_post(&self, name: &str, post: &Post, site: &SiteConfig) -> BloggerResult<String> {
        let mut ctx = BTreeMap::new();
        ctx.insert("site".to_string(), Value::from_serialize(site));
        for (key, value) in post.metadata.iter().flatten() {
            if let Some(key) = crate::domain::entities::value_to_plain_string(key) {
                ctx.insert(key, Value::from_serialize(value));
            }
        }

        self.env
            .render_named_str(name, &post.body_text, Value::from(ctx))
            .map_err(|source| BloggerError::Template {
                name: name.to_string(),
                source,
            })
    }
}

impl TemplateRenderer for TemplateEngine {
    fn render(&self, name: &str, context: RenderContext<'_>) -> BloggerResult<String> {
        let template_error = |source| BloggerError::Template {
            name: name.to_string(),
            source,
        };

        let mut ctx = BTreeMap::new();
        ctx.insert("site".to_string(), Value::from_serialize(context.site));
        ctx.insert("posts".to_string(), posts_value(context.posts));
        for (key, value) in context.vars {
            ctx.insert(key.clone(), Value::from_serialize(value));
        }

        let template = self.env.get_template(name).map_err(template_error)?;
        template.render(Value::from(ctx)).map_err(template_error)
    }
}

/// The ordered post list as a template value.
pub fn posts_value(posts: &[Post]) -> Value {
    Value::from(
        posts
            .iter()
            .map(|p| Value::from_object(PostValue(p.clone())))
            .collect::<Vec<_>>(),
    )
}

/// A post as seen from templates: `post.title`, `post.html`, `post.tags`...
#[derive(Debug)]
pub struct PostValue(pub Post);

impl Object for PostValue {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        self.0
            .lookup(key.as_str()?)
            .map(|v| Value::from_serialize(&v))
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        Enumerator::Values(self.0.keys().into_iter().map(Value::from).collect())
    }

    /// `{{ post }}` prints the listing fields only; everything else stays
    /// reachable as an attribute.
    fn render(self: &Arc<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for key in LISTING_KEYS {
            if let Some(serde_yaml_ng::Value::String(text)) = self.0.lookup(key) {
                map.entry(&key, &text);
            }
        }
        map.finish()
    }
}

const LISTING_KEYS: [&str; 5] = ["name", "toc", "title", "date", "html"];

fn load_from_roots(roots: &[PathBuf], name: &str) -> Result<Option<String>, minijinja::Error> {
    let Some(rel) = safe_relative(name) else {
        return Ok(None);
    };
    for root in roots {
        let path = root.join(&rel);
        if !path.is_file() {
            continue;
        }
        return match fs::read_to_string(&path) {
            Ok(source) => Ok(Some(source)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => Err(minijinja::Error::new(
                ErrorKind::InvalidOperation,
                format!("could not read template {}", path.display()),
            )
            .with_source(e)),
        };
    }
    Ok(None)
}

/// Template names are `/`-separated and may not leave their root.
fn safe_relative(name: &str) -> Option<PathBuf> {
    let mut rel = PathBuf::new();
    for segment in name.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        match Path::new(segment).components().next() {
            Some(Component::Normal(part)) => rel.push(part),
            _ => return None,
        }
    }
    (!rel.as_os_str().is_empty()).then_some(rel)
}
