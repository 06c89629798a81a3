//! Named extension factories

use std::sync::Arc;

use crate::domain::ports::{Extension, ExtensionContext, ExtensionFactory};

use super::builtin;

/// Ordered name → factory table.
#[derive(Clone, Default)]
pub struct ExtensionRegistry {
    factories: Vec<(String, ExtensionFactory)>,
}

impl ExtensionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in extensions.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(builtin::READING_TIME, factory(builtin::ReadingTime::new));
        registry.register(builtin::SITEMAP, factory(builtin::Sitemap::new));
        registry
    }

    /// Register `factory` under `name`, replacing an earlier registration.
    pub fn register(&mut self, name: impl Into<String>, factory: ExtensionFactory) {
        let name = name.into();
        match self.factories.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = factory,
            None => self.factories.push((name, factory)),
        }
    }

    pub fn get(&self, name: &str) -> Option<ExtensionFactory> {
        self.factories
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| Arc::clone(f))
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.factories.iter().map(|(n, _)| n.as_str()).collect()
    }
}

impl std::fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionRegistry")
            .field("names", &self.names())
            .finish()
    }
}

/// Wrap a constructor as an [`ExtensionFactory`].
pub fn factory<E, F>(build: F) -> ExtensionFactory
where
    E: Extension + 'static,
    F: Fn(&ExtensionContext) -> E + Send + Sync + 'static,
{
    Arc::new(move |ctx: &ExtensionContext| -> Box<dyn Extension> { Box::new(build(ctx)) })
}
