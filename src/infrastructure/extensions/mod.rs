//! Extension host
//!
//! Extensions are plain Rust types implementing the
//! [`Extension`](crate::domain::ports::Extension) trait, registered by name in
//! an [`ExtensionRegistry`]. A project turns them on in `extensions.toml`;
//! the [`ExtensionHost`] resolves those names once at project load, provisions
//! declared requirements, and builds a fresh [`ExtensionSet`] for every
//! compile cycle.

pub mod builtin;
mod host;
mod manifest;
mod provision;
mod registry;

pub use host::{ExtensionHost, ExtensionSet, LoadedExtension};
pub use manifest::{ExtensionManifest, ProvisionSection};
pub use provision::{StampProvisioner, STAMP_FILE};
pub use registry::{factory, ExtensionRegistry};
