//! Scoped temporary bundle files.
//!
//! Every update run downloads into its own file so overlapping runs (a
//! manual check during the daily one) never write to or delete each other's
//! bundle. The file is removed when the guard is dropped, on every exit path.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// File extension of installable bundles.
pub const BUNDLE_EXTENSION: &str = "vsix";

/// File name for a bundle downloaded by run `generation`.
pub fn bundle_file_name(prefix: &str, generation: u64, token: &Uuid) -> String {
    format!("{prefix}-{generation}-{}.{BUNDLE_EXTENSION}", token.simple())
}

/// RAII guard owning a temporary bundle path.
///
/// Dropping the guard deletes the file if it exists. Deletion errors are
/// ignored: a stray file in the storage directory is harmless.
#[derive(Debug)]
pub struct TempBundle {
    path: PathBuf,
}

impl TempBundle {
    /// Reserve a unique bundle path in `dir`.
    ///
    /// Nothing is created on disk until something writes to the path.
    pub fn allocate(dir: &Path, prefix: &str, generation: u64) -> Self {
        let name = bundle_file_name(prefix, generation, &Uuid::new_v4());
        Self {
            path: dir.join(name),
        }
    }

    /// Path the bundle should be written to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempBundle {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
