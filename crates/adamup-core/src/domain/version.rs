//! Version check result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Strip incidental whitespace from a fetched version body.
///
/// The remote version file is plain text and usually ends with a newline.
/// Nothing else is normalised: `v3.2.0` and `3.2.0` are different versions.
pub fn normalize_version(body: &str) -> &str {
    body.trim()
}

/// Result of comparing the installed version with the published one.
///
/// Created fresh for every check and dropped once the resulting prompt or
/// install has finished.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateCheckResult {
    /// Version reported by the host for the installed extension.
    pub current_version: String,
    /// Trimmed body of the remote version file.
    pub latest_version: String,
    /// `true` whenever the two strings differ.
    pub needs_update: bool,
    /// When the comparison was made.
    pub checked_at: DateTime<Utc>,
}

impl UpdateCheckResult {
    /// Compare an installed version with a raw fetched body.
    ///
    /// Comparison is exact string equality after trimming the body. A remote
    /// version that sorts lower than the installed one still counts as an
    /// update, so rolling back a bad release only needs a new version file.
    pub fn compare(current_version: impl Into<String>, fetched_body: &str) -> Self {
        let current_version = current_version.into();
        let latest_version = normalize_version(fetched_body).to_string();
        let needs_update = latest_version != current_version;

        Self {
            current_version,
            latest_version,
            needs_update,
            checked_at: Utc::now(),
        }
    }
}
