//! `adamup check`: one update check.

use adamup_core::{InstallOutcome, UpdateError, UpdateOutcome};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Run one update check.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let outcome = ctx.service.check_for_updates().await;
    outcome_result(outcome, &ctx.config.updater.extension_id)
}

/// Turn an outcome into the process result.
///
/// Declining is a success; every failure branch carries its error.
pub fn outcome_result(outcome: UpdateOutcome, extension_id: &str) -> Result<(), CliError> {
    match outcome {
        UpdateOutcome::UpToDate(_)
        | UpdateOutcome::Declined(_)
        | UpdateOutcome::Accepted {
            install: InstallOutcome::Installed { .. },
            ..
        } => Ok(()),
        UpdateOutcome::ExtensionNotFound => Err(UpdateError::ExtensionNotFound {
            id: extension_id.to_string(),
        }
        .into()),
        UpdateOutcome::CheckFailed(err)
        | UpdateOutcome::Accepted {
            install: InstallOutcome::DownloadFailed(err) | InstallOutcome::InstallFailed(err),
            ..
        } => Err(err.into()),
    }
}
