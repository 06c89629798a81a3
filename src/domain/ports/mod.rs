//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod converter;
pub mod extension;
pub mod prompt;
pub mod provisioner;
pub mod renderer;

pub use converter::{ConverterOptions, MarkdownConverter};
pub use extension::{Extension, ExtensionContext, ExtensionFactory};
pub use prompt::{Prompter, ScriptedPrompter};
pub use provisioner::{NoopProvisioner, Provisioner, Requirements};
pub use renderer::{RenderContext, TemplateRenderer};
