//! Provisioner port
//!
//! A project may declare requirements its extensions need (tools, packages).
//! The extension host asks a `Provisioner` whether they are already met and
//! only installs when they are not. The check is advisory: nothing locks the
//! environment against a second process provisioning at the same time.

use std::path::PathBuf;

use crate::error::BloggerResult;

/// Requirements declared by a project's extension manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements {
    /// Opaque requirement strings, compared verbatim
    pub requires: Vec<String>,
    /// Command (program plus arguments) that installs them
    pub install: Vec<String>,
    /// Directory the install command runs in
    pub working_dir: PathBuf,
}

impl Requirements {
    pub fn is_empty(&self) -> bool {
        self.requires.is_empty()
    }
}

/// Check-then-install contract for extension dependencies.
pub trait Provisioner: Send + Sync {
    /// Are the requirements already satisfied?
    fn satisfied(&self, requirements: &Requirements) -> BloggerResult<bool>;

    /// Install the requirements. Failure is fatal to the caller.
    fn install(&self, requirements: &Requirements) -> BloggerResult<()>;

    /// Install only when not yet satisfied. Returns whether an install ran.
    fn ensure(&self, requirements: &Requirements) -> BloggerResult<bool> {
        if requirements.is_empty() {
            return Ok(false);
        }
        if self.satisfied(requirements)? {
            tracing::debug!("all extension requirements satisfied, skipping installation");
            return Ok(false);
        }
        self.install(requirements)?;
        Ok(true)
    }
}

/// Provisioner that treats every requirement as already met.
pub struct NoopProvisioner;

impl Provisioner for NoopProvisioner {
    fn satisfied(&self, _requirements: &Requirements) -> BloggerResult<bool> {
        Ok(true)
    }

    fn install(&self, _requirements: &Requirements) -> BloggerResult<()> {
        Ok(())
    }
}
