//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where concrete adapters are wired together:
//! - Update source (via adamup-http)
//! - Editor host, notifier and sidebar (terminal adapters in this crate)
//! - Update service (via adamup-core)
//!
//! Command handlers receive the composed [`CliContext`].

use std::path::PathBuf;
use std::sync::Arc;

use adamup_core::{
    OutputChannelPort, UpdateService, UpdateServiceDeps, UpdaterConfig, default_storage_dir,
};
use adamup_http::{HttpSourceConfig, HttpUpdateSource};
use adamup_runtime::{ActivationDeps, TracingOutputChannel};
use tracing::debug;

use crate::error::CliError;
use crate::host::EditorCliHost;
use crate::notifier::TerminalNotifier;
use crate::parser::Cli;
use crate::progress::terminal_progress;
use crate::sidebar::LoggingSidebar;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Updater settings after environment overrides.
    pub updater: UpdaterConfig,
    /// Editor binary used as the extension host.
    pub editor: String,
    /// Installed version override.
    pub installed_version: Option<String>,
    /// Answer every prompt with its first action.
    pub assume_yes: bool,
}

impl CliConfig {
    /// Build from parsed arguments and the process environment.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        Ok(Self {
            updater: UpdaterConfig::from_env()?,
            editor: cli.editor.clone(),
            installed_version: cli.installed_version.clone(),
            assume_yes: cli.yes,
        })
    }

    /// Directory temporary bundles are written to.
    pub fn storage_dir(&self) -> Result<PathBuf, CliError> {
        match &self.updater.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(default_storage_dir(&self.updater.extension_id)?),
        }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Configuration the context was built from.
    pub config: CliConfig,
    /// Resolved storage directory.
    pub storage_dir: PathBuf,
    /// The update service.
    pub service: Arc<UpdateService>,
    /// Sidebar stand-in.
    pub sidebar: Arc<LoggingSidebar>,
    /// Output channel.
    pub output: Arc<dyn OutputChannelPort>,
}

impl CliContext {
    /// Collaborators for activating the runtime.
    pub fn activation_deps(&self) -> ActivationDeps {
        ActivationDeps {
            service: Arc::clone(&self.service),
            sidebar: self.sidebar.clone(),
            output: Arc::clone(&self.output),
        }
    }
}

/// Wire the adapters together.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let storage_dir = config.storage_dir()?;
    debug!(storage_dir = %storage_dir.display(), editor = %config.editor, "Bootstrapping");

    let host = EditorCliHost::new(&config.editor, storage_dir.clone())
        .with_installed_version(config.installed_version.clone());

    let source_config = HttpSourceConfig::from_updater_config(&config.updater)
        .with_user_agent(concat!("adamup/", env!("CARGO_PKG_VERSION")));
    let source = HttpUpdateSource::new(source_config)?.with_progress(terminal_progress());

    let output: Arc<dyn OutputChannelPort> = Arc::new(TracingOutputChannel);

    let service = Arc::new(UpdateService::new(
        config.updater.clone(),
        UpdateServiceDeps {
            host: Arc::new(host),
            source: Arc::new(source),
            notifier: Arc::new(TerminalNotifier::new().assume_yes(config.assume_yes)),
            output: Arc::clone(&output),
        },
    ));

    Ok(CliContext {
        config,
        storage_dir,
        service,
        sidebar: Arc::new(LoggingSidebar::new(true)),
        output,
    })
}
