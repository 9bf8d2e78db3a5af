//! Internal error types for the HTTP source.
//!
//! These errors stay inside `adamup-http` and are mapped to
//! [`UpdateError`] at the port boundary.

use std::path::PathBuf;

use adamup_core::UpdateError;
use thiserror::Error;

/// Result type alias for HTTP source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors raised while talking to the update server.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Request to {url} failed with status {status}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Connection, timeout or body read failure.
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// Local file could not be written.
    #[error("Failed to {operation} {}: {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<SourceError> for UpdateError {
    fn from(err: SourceError) -> Self {
        match &err {
            SourceError::RequestFailed { status, .. } => Self::http_status(*status, err.to_string()),
            SourceError::Io {
                operation,
                path,
                source,
            } => Self::filesystem(format!("{operation} {}", path.display()), source),
            SourceError::Client(_) | SourceError::Network(_) => Self::network(err.to_string()),
        }
    }
}
