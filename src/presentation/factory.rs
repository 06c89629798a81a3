//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{CompileUseCase, WatchUseCase};
use crate::config::{ProjectLayout, WatchOptions};
use crate::error::BloggerResult;
use crate::infrastructure::{ExtensionHost, ExtensionRegistry, StampProvisioner};

/// Create a compile use case with the built-in extension registry.
///
/// Reads the project's extension manifest and provisions its requirements,
/// so a bad manifest or a failed install surfaces here, before any compile.
pub fn create_compile_use_case(layout: ProjectLayout) -> BloggerResult<CompileUseCase> {
    create_compile_use_case_with_registry(layout, &ExtensionRegistry::with_builtins())
}

/// Create a compile use case resolving extensions against `registry`.
///
/// Useful for embedders that register their own extensions.
pub fn create_compile_use_case_with_registry(
    layout: ProjectLayout,
    registry: &ExtensionRegistry,
) -> BloggerResult<CompileUseCase> {
    let provisioner = StampProvisioner::new(layout.app_data());
    let extensions = ExtensionHost::load(&layout, registry, &provisioner)?;
    if !extensions.is_empty() {
        tracing::info!(extensions = ?extensions.names(), "loaded extensions");
    }
    Ok(CompileUseCase::new(layout, extensions))
}

/// Create a watch use case around a fully wired compile use case.
pub fn create_watch_use_case(
    layout: ProjectLayout,
    options: WatchOptions,
) -> BloggerResult<WatchUseCase> {
    Ok(WatchUseCase::new(create_compile_use_case(layout)?, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BloggerError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn project_without_manifest_has_no_extensions() {
        let dir = tempdir().unwrap();
        let layout = ProjectLayout::with_out_dir(dir.path(), dir.path().join("out"));

        let use_case = create_compile_use_case(layout.clone()).unwrap();
        assert_eq!(use_case.layout(), &layout);
    }

    #[test]
    fn unknown_extension_fails_before_compiling() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("extensions.toml"), "enabled = [\"nope\"]\n").unwrap();
        let layout = ProjectLayout::with_out_dir(dir.path(), dir.path().join("out"));

        let err = create_compile_use_case(layout).err().unwrap();
        assert!(matches!(err, BloggerError::UnknownExtension { name } if name == "nope"));
    }
}
