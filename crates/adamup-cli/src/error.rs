//! CLI-specific error types and mappings.
//!
//! Maps layer errors to exit codes and user-facing messages.

use adamup_core::{ConfigError, PathError, UpdateError};
use adamup_http::SourceError;
use adamup_runtime::ActivationError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or input error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The update flow failed. The user has already seen the message.
    #[error("{message}")]
    Update { message: String, exit_code: i32 },
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Update { exit_code, .. } => *exit_code,
        }
    }

    /// Whether the message was already shown by the update flow.
    pub const fn already_reported(&self) -> bool {
        matches!(self, Self::Update { .. })
    }
}

impl From<UpdateError> for CliError {
    fn from(err: UpdateError) -> Self {
        let exit_code = match &err {
            UpdateError::ExtensionNotFound { .. } => 78, // EX_CONFIG
            UpdateError::Network { .. } => 69,           // EX_UNAVAILABLE
            UpdateError::Filesystem { .. } => 74,        // EX_IOERR
            UpdateError::Install(_) | UpdateError::Reload(_) => 71, // EX_OSERR
        };
        Self::Update {
            message: err.to_string(),
            exit_code,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<ActivationError> for CliError {
    fn from(err: ActivationError) -> Self {
        Self::Arguments(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Arguments("x".into()).exit_code(), 2);
        assert_eq!(CliError::Io("x".into()).exit_code(), 74);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
    }

    #[test]
    fn test_update_errors_keep_message_and_are_reported() {
        let err = CliError::from(UpdateError::http_status(404, "Not Found"));
        assert_eq!(err.exit_code(), 69);
        assert_eq!(err.to_string(), "Not Found");
        assert!(err.already_reported());

        let err = CliError::from(UpdateError::install("bad package"));
        assert_eq!(err.exit_code(), 71);

        let err = CliError::from(UpdateError::ExtensionNotFound {
            id: "a.b".to_string(),
        });
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_config_error_is_not_reported() {
        let err = CliError::from(ConfigError::EmptyExtensionId);
        assert!(!err.already_reported());
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
