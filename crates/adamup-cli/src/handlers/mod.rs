//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that call the service or runtime and format the result
//!   for the terminal

pub mod check;
pub mod command;
pub mod config;
pub mod diff;
pub mod uri;
pub mod watch;
