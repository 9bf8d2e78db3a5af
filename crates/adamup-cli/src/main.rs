//! CLI entry point.
//!
//! Parses arguments, installs logging, bootstraps the context and dispatches
//! to a handler. Failed handlers exit with the error's exit code. The
//! runtime is shut down with a grace period so an unanswered prompt cannot
//! keep the process alive.

use adamup_cli::executor::{build_runtime, run_to_completion};
use adamup_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};
use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::try_new("debug")
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))
    }
    .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(CliConfig::from_cli(&cli)?)?;

    match command {
        Commands::Check => handlers::check::execute(&ctx).await,
        Commands::Watch => handlers::watch::execute(&ctx).await,
        Commands::Command { id } => handlers::command::execute(&ctx, id).await,
        Commands::Uri { uri } => handlers::uri::execute(&ctx, uri).await,
        Commands::Diff { uri } => handlers::diff::execute(&ctx, uri),
        Commands::Config => handlers::config::execute(&ctx),
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let runtime = build_runtime().context("Failed to start async runtime")?;
    if let Err(err) = run_to_completion(runtime, run(cli)) {
        if !err.already_reported() {
            eprintln!("Error: {err}");
        }
        std::process::exit(err.exit_code());
    }
    Ok(())
}
