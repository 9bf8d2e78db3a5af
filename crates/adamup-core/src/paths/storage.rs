//! Per-extension storage directory.

use std::path::{Path, PathBuf};

use super::error::PathError;

/// Application folder under the platform data directory.
const APP_DIR: &str = "adamup";

/// Default storage directory for `extension_id`.
///
/// `<data dir>/adamup/globalStorage/<extension id, lowercased>`, mirroring the
/// layout editors use for their own per-extension storage.
pub fn default_storage_dir(extension_id: &str) -> Result<PathBuf, PathError> {
    let data_dir = dirs::data_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir
        .join(APP_DIR)
        .join("globalStorage")
        .join(extension_id.to_lowercase()))
}

/// Create `dir` (and parents) if it does not exist yet.
pub fn ensure_storage_dir(dir: &Path) -> Result<(), PathError> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(PathError::NotADirectory(dir.to_path_buf()));
        }
        return Ok(());
    }

    std::fs::create_dir_all(dir).map_err(|e| PathError::CreateFailed {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })
}
