//! Update source port.
//!
//! Abstracts the two fixed remote resources: the plaintext version file and
//! the installable bundle.

use std::path::Path;

use async_trait::async_trait;

use super::UpdateError;

/// Where published versions and bundles come from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpdateSourcePort: Send + Sync {
    /// Fetch the raw body of the version file.
    ///
    /// Callers trim the body; implementations return it untouched.
    async fn fetch_latest_version(&self) -> Result<String, UpdateError>;

    /// Stream the bundle into `dest`.
    ///
    /// On failure implementations remove whatever part of `dest` they wrote.
    async fn download_bundle(&self, dest: &Path) -> Result<(), UpdateError>;
}
