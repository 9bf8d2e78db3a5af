//! `adamup command <id>`: run one extension command.

use adamup_runtime::{CommandOutcome, attach};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::check::outcome_result;

pub async fn execute(ctx: &CliContext, id: &str) -> Result<(), CliError> {
    let runtime = attach(ctx.activation_deps());

    match runtime.execute_command(id).await? {
        CommandOutcome::UpdateCheck(outcome) => {
            outcome_result(outcome, &ctx.config.updater.extension_id)
        }
        CommandOutcome::Forwarded(_) => Ok(()),
    }
}
