//! Editor host driven through the editor's command line.
//!
//! `code --list-extensions --show-versions` prints one
//! `publisher.name@version` per line; `code --install-extension <vsix>`
//! installs a package. Any VS Code compatible editor binary works.
//!
//! The command line has no way to reload a running window, so
//! `reload_window` always fails with instructions for the user.

use std::path::{Path, PathBuf};

use adamup_core::{ExtensionHostPort, UpdateError};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

/// [`ExtensionHostPort`] backed by an editor binary.
#[derive(Debug, Clone)]
pub struct EditorCliHost {
    editor: String,
    storage_dir: PathBuf,
    installed_override: Option<String>,
}

impl EditorCliHost {
    /// Host using `editor` with bundles stored under `storage_dir`.
    pub fn new(editor: impl Into<String>, storage_dir: PathBuf) -> Self {
        Self {
            editor: editor.into(),
            storage_dir,
            installed_override: None,
        }
    }

    /// Report `version` as installed instead of asking the editor.
    #[must_use]
    pub fn with_installed_version(mut self, version: Option<String>) -> Self {
        self.installed_override = version;
        self
    }
}

/// Find `extension_id` in `--show-versions` output.
///
/// Extension ids are case-insensitive.
pub fn parse_extension_listing(listing: &str, extension_id: &str) -> Option<String> {
    listing.lines().find_map(|line| {
        let (id, version) = line.trim().rsplit_once('@')?;
        (id.eq_ignore_ascii_case(extension_id) && !version.is_empty())
            .then(|| version.to_string())
    })
}

#[async_trait]
impl ExtensionHostPort for EditorCliHost {
    async fn installed_version(&self, extension_id: &str) -> Option<String> {
        if let Some(version) = &self.installed_override {
            return Some(version.clone());
        }

        let output = match Command::new(&self.editor)
            .args(["--list-extensions", "--show-versions"])
            .output()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                warn!(editor = %self.editor, error = %e, "Failed to run editor");
                return None;
            }
        };

        if !output.status.success() {
            warn!(editor = %self.editor, status = %output.status, "Listing extensions failed");
            return None;
        }

        let listing = String::from_utf8_lossy(&output.stdout);
        let version = parse_extension_listing(&listing, extension_id);
        debug!(%extension_id, ?version, "Resolved installed version");
        version
    }

    fn global_storage_dir(&self) -> PathBuf {
        self.storage_dir.clone()
    }

    async fn install_package(&self, package: &Path) -> Result<(), UpdateError> {
        debug!(editor = %self.editor, package = %package.display(), "Installing package");

        let output = Command::new(&self.editor)
            .arg("--install-extension")
            .arg(package)
            .arg("--force")
            .output()
            .await
            .map_err(|e| UpdateError::install(format!("Failed to run {}: {e}", self.editor)))?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        Err(UpdateError::install(if stderr.is_empty() {
            format!("{} exited with {}", self.editor, output.status)
        } else {
            stderr.to_string()
        }))
    }

    async fn reload_window(&self) -> Result<(), UpdateError> {
        Err(UpdateError::reload(format!(
            "{} cannot reload a running window. Run \"Developer: Reload Window\" in the editor to load the new version.",
            self.editor
        )))
    }
}
