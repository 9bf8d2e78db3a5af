//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the update flow expects from the host
//! editor, the update server and the user. They contain no implementation
//! details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or process types in any signature
//! - Host operations are intent-based (`install_package`, not "run a command")
//! - Notifications never block; only `ask` waits for the user

pub mod extension_host;
pub mod notifier;
pub mod output_channel;
pub mod sidebar;
pub mod update_source;

use thiserror::Error;

pub use extension_host::ExtensionHostPort;
pub use notifier::{PromptRequest, SilentNotifier, UserNotifierPort};
pub use output_channel::{MemoryOutputChannel, NoopOutputChannel, OutputChannelPort};
pub use sidebar::SidebarPort;
pub use update_source::UpdateSourcePort;

#[cfg(test)]
pub use extension_host::MockExtensionHostPort;
#[cfg(test)]
pub use notifier::MockUserNotifierPort;
#[cfg(test)]
pub use update_source::MockUpdateSourcePort;

/// Errors raised anywhere in the update flow.
///
/// The `Display` text is what the user sees after the `Error ...:` prefix, so
/// variants render the underlying message without decoration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpdateError {
    /// The host has no metadata for the extension.
    #[error("Cannot find extension with ID {id}")]
    ExtensionNotFound { id: String },

    /// Transport failure or non-success HTTP status.
    #[error("{message}")]
    Network {
        message: String,
        status_code: Option<u16>,
    },

    /// Temporary file could not be created or written.
    #[error("Failed to {operation}: {message}")]
    Filesystem { operation: String, message: String },

    /// The host rejected the package.
    #[error("{0}")]
    Install(String),

    /// The host did not reload its window. The update is installed but
    /// takes effect only after a manual reload.
    #[error("{0}")]
    Reload(String),
}

impl UpdateError {
    /// Transport-level failure without an HTTP status.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            status_code: None,
        }
    }

    /// Server answered with a non-success status.
    pub fn http_status(status_code: u16, message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Filesystem failure during `operation` (e.g. "create temp file").
    pub fn filesystem(operation: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Filesystem {
            operation: operation.into(),
            message: err.to_string(),
        }
    }

    /// Host install failure.
    pub fn install(err: impl std::fmt::Display) -> Self {
        Self::Install(err.to_string())
    }

    /// Host reload failure.
    pub fn reload(err: impl std::fmt::Display) -> Self {
        Self::Reload(err.to_string())
    }
}
