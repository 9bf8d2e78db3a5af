//! Activation lifecycle for adamup.
//!
//! Owns everything with a lifetime: the periodic update task, the command
//! table, the callback URI handler and the diff content provider. Hosts call
//! [`activate`] once and [`ExtensionRuntime::deactivate`] when they shut down.

mod activation;
mod commands;
mod output;
mod scheduler;

#[cfg(test)]
mod test_support;

pub use activation::{ActivationDeps, ActivationError, ExtensionRuntime, activate, attach};
pub use commands::CommandOutcome;
pub use output::{OUTPUT_TARGET, TracingOutputChannel};
pub use scheduler::UpdateScheduler;
