//! `adamup uri <uri>`: route a callback URI.

use adamup_core::UriRoute;
use adamup_runtime::attach;

use crate::bootstrap::CliContext;
use crate::error::CliError;

pub async fn execute(ctx: &CliContext, uri: &str) -> Result<(), CliError> {
    let runtime = attach(ctx.activation_deps());

    match runtime.handle_uri(uri).await? {
        UriRoute::OpenRouter { .. } => println!("OpenRouter callback forwarded to the sidebar"),
        UriRoute::Ignored => println!("Ignored {uri}"),
    }
    Ok(())
}
