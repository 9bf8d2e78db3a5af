//! `adamup config`: show the effective configuration.

use crate::bootstrap::CliContext;
use crate::error::CliError;

pub fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let report = serde_json::json!({
        "updater": serde_json::to_value(&ctx.config.updater)?,
        "editor": ctx.config.editor,
        "installed_version_override": ctx.config.installed_version,
        "storage_dir": ctx.storage_dir,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
