//! Domain types for the update flow and the extension surface.
//!
//! These are plain data types with no I/O. Adapters translate them to and
//! from whatever the host speaks.

mod command;
mod diff;
mod outcome;
mod uri;
mod version;
mod webview;

pub use command::{ExtensionCommand, UnknownCommand};
pub use diff::{DIFF_URI_SCHEME, DiffContentError, diff_content_from_query, provide_diff_content};
pub use outcome::{InstallOutcome, UpdateOutcome};
pub use uri::{CallbackUri, UriError, UriRoute};
pub use version::{UpdateCheckResult, normalize_version};
pub use webview::{WebviewAction, WebviewMessage};
