//! `adamup diff <uri>`: print diff document text.

use std::io::Write;

use adamup_runtime::attach;

use crate::bootstrap::CliContext;
use crate::error::CliError;

pub fn execute(ctx: &CliContext, uri: &str) -> Result<(), CliError> {
    let text = attach(ctx.activation_deps()).provide_diff_content(uri)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
