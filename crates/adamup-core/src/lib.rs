//! Core domain types, ports and services for adamup.
//!
//! adamup keeps an editor extension current by polling a remote version file
//! and reinstalling a packaged bundle when the published version differs from
//! the installed one. This crate holds everything that does not touch the
//! network, a process, or a terminal:
//!
//! - `domain` - check results, outcomes, command ids, callback URIs
//! - `ports` - traits the host, the update source and the UI implement
//! - `services` - the update flow itself
//! - `paths` - storage directory resolution and scoped temporary bundles
//! - `settings` - updater configuration and validation

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    CallbackUri, DIFF_URI_SCHEME, DiffContentError, ExtensionCommand, InstallOutcome, UpdateCheckResult,
    UpdateOutcome, UriError, UriRoute, WebviewAction, WebviewMessage, provide_diff_content,
};
pub use paths::{PathError, TempBundle, default_storage_dir, ensure_storage_dir};
pub use ports::{
    ExtensionHostPort, MemoryOutputChannel, NoopOutputChannel, OutputChannelPort, PromptRequest,
    SidebarPort, SilentNotifier, UpdateError, UpdateSourcePort, UserNotifierPort,
};
pub use services::{ACTION_NO, ACTION_RELOAD, ACTION_YES, UpdateService, UpdateServiceDeps};
pub use settings::{
    ConfigError, DEFAULT_BUNDLE_URL, DEFAULT_CHECK_INTERVAL_SECS, DEFAULT_DISPLAY_NAME,
    DEFAULT_EXTENSION_ID, DEFAULT_TEMP_FILE_PREFIX, DEFAULT_VERSION_URL, UpdaterConfig,
    validate_config,
};
