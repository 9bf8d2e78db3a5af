//! Extension host port.
//!
//! The editor that loads the extension: it knows which version is installed,
//! owns the per-extension storage directory, and can install packages and
//! reload itself.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::UpdateError;

/// Operations the update flow needs from the host editor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExtensionHostPort: Send + Sync {
    /// Installed version of the extension with `extension_id`, if the host
    /// knows it.
    async fn installed_version(&self, extension_id: &str) -> Option<String>;

    /// Directory the host reserves for this extension's files.
    fn global_storage_dir(&self) -> PathBuf;

    /// Install the package at `package`.
    ///
    /// Completes once the host reports success or failure.
    async fn install_package(&self, package: &Path) -> Result<(), UpdateError>;

    /// Restart the host window so a newly installed version takes effect.
    ///
    /// Returns `Ok` only if the window was actually reloaded. A host that
    /// can merely ask the user to reload returns [`UpdateError::Reload`].
    async fn reload_window(&self) -> Result<(), UpdateError>;
}
