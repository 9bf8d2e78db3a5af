//! Updater configuration and validation.
//!
//! Defaults reproduce the published extension's endpoints. Every field can
//! be overridden from the environment (see [`UpdaterConfig::apply_env`]).

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// Plaintext file holding the latest published version.
pub const DEFAULT_VERSION_URL: &str =
    "https://adamagi.blob.core.windows.net/vscode-extension/version.txt";

/// Installable bundle for the latest published version.
pub const DEFAULT_BUNDLE_URL: &str =
    "https://adamagi.blob.core.windows.net/vscode-extension/adam-vscode.vsix";

/// Marketplace id of the extension being kept current.
pub const DEFAULT_EXTENSION_ID: &str = "AdamAI.adam-vscode";

/// Name used in user-facing messages.
pub const DEFAULT_DISPLAY_NAME: &str = "Adam VS Code Extension";

/// Once a day.
pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 24 * 60 * 60;

/// Prefix of downloaded bundle files.
pub const DEFAULT_TEMP_FILE_PREFIX: &str = "adam-vscode-temp";

const ENV_VERSION_URL: &str = "ADAMUP_VERSION_URL";
const ENV_BUNDLE_URL: &str = "ADAMUP_BUNDLE_URL";
const ENV_EXTENSION_ID: &str = "ADAMUP_EXTENSION_ID";
const ENV_DISPLAY_NAME: &str = "ADAMUP_DISPLAY_NAME";
const ENV_CHECK_INTERVAL_SECS: &str = "ADAMUP_CHECK_INTERVAL_SECS";
const ENV_STORAGE_DIR: &str = "ADAMUP_STORAGE_DIR";

/// Updater configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UpdaterConfig {
    /// URL of the plaintext version file.
    pub version_url: String,
    /// URL of the installable bundle.
    pub bundle_url: String,
    /// Id of the installed extension to compare against.
    pub extension_id: String,
    /// Human-readable name for notifications.
    pub display_name: String,
    /// Seconds between scheduled checks.
    pub check_interval_secs: u64,
    /// Prefix for temporary bundle files.
    pub temp_file_prefix: String,
    /// Storage directory override. `None` lets the host decide.
    pub storage_dir: Option<PathBuf>,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            version_url: DEFAULT_VERSION_URL.to_string(),
            bundle_url: DEFAULT_BUNDLE_URL.to_string(),
            extension_id: DEFAULT_EXTENSION_ID.to_string(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            check_interval_secs: DEFAULT_CHECK_INTERVAL_SECS,
            temp_file_prefix: DEFAULT_TEMP_FILE_PREFIX.to_string(),
            storage_dir: None,
        }
    }
}

impl UpdaterConfig {
    /// Interval between scheduled checks.
    pub const fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }

    /// Apply overrides from a key lookup, then validate.
    ///
    /// `lookup` is usually `std::env::var(..).ok()`; tests pass a map.
    /// Empty values are treated as unset.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_VERSION_URL) {
            self.version_url = url;
        }
        if let Some(url) = get(ENV_BUNDLE_URL) {
            self.bundle_url = url;
        }
        if let Some(id) = get(ENV_EXTENSION_ID) {
            self.extension_id = id;
        }
        if let Some(name) = get(ENV_DISPLAY_NAME) {
            self.display_name = name;
        }
        if let Some(secs) = get(ENV_CHECK_INTERVAL_SECS) {
            self.check_interval_secs = secs
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidInterval(secs.clone()))?;
        }
        if let Some(dir) = get(ENV_STORAGE_DIR) {
            self.storage_dir = Some(PathBuf::from(dir));
        }

        validate_config(&self)?;
        Ok(self)
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env(|key| std::env::var(key).ok())
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} is not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("{field} must use https, got '{scheme}'")]
    InsecureUrl {
        field: &'static str,
        scheme: String,
    },

    #[error("Extension id must not be empty")]
    EmptyExtensionId,

    #[error("Temp file prefix must be a plain file name, got '{0}'")]
    InvalidTempPrefix(String),

    #[error("Check interval must be a positive number of seconds, got '{0}'")]
    InvalidInterval(String),
}

/// Validate a configuration.
pub fn validate_config(config: &UpdaterConfig) -> Result<(), ConfigError> {
    validate_https("version_url", &config.version_url)?;
    validate_https("bundle_url", &config.bundle_url)?;

    if config.extension_id.trim().is_empty() {
        return Err(ConfigError::EmptyExtensionId);
    }

    let prefix = &config.temp_file_prefix;
    if prefix.is_empty() || prefix.contains(['/', '\\']) || prefix.starts_with('.') {
        return Err(ConfigError::InvalidTempPrefix(prefix.clone()));
    }

    if config.check_interval_secs == 0 {
        return Err(ConfigError::InvalidInterval("0".to_string()));
    }

    Ok(())
}

fn validate_https(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        field,
        reason: e.to_string(),
    })?;

    if url.scheme() != "https" {
        return Err(ConfigError::InsecureUrl {
            field,
            scheme: url.scheme().to_string(),
        });
    }

    Ok(())
}
