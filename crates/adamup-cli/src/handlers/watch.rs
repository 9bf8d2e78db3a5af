//! `adamup watch`: stay activated until Ctrl-C.

use adamup_runtime::activate;
use tracing::info;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Activate, keep checking on the configured interval, deactivate on Ctrl-C.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let runtime = activate(ctx.activation_deps());
    info!(
        interval_secs = ctx.config.updater.check_interval_secs,
        "Watching for updates, press Ctrl-C to stop"
    );

    let signal = tokio::signal::ctrl_c().await;
    runtime.deactivate().await;
    signal?;
    Ok(())
}
