//! Terminal host for adamup.
//!
//! Plays the editor's part from a shell: the installed version and the
//! install step go through the editor's own command line, prompts are read
//! from stdin and notifications are printed.

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod executor;
pub mod handlers;
pub mod host;
pub mod notifier;
pub mod parser;
pub mod progress;
pub mod sidebar;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
