//! Activation and deactivation.

use std::sync::Arc;

use adamup_core::domain::UnknownCommand;
use adamup_core::{
    CallbackUri, DiffContentError, ExtensionCommand, OutputChannelPort, SidebarPort, UpdateService,
    UriError, UriRoute,
};
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::commands::{CommandContext, CommandOutcome, dispatch};
use crate::scheduler::UpdateScheduler;

/// Errors surfaced by the runtime entry points.
#[derive(Debug, Error)]
pub enum ActivationError {
    #[error(transparent)]
    UnknownCommand(#[from] UnknownCommand),

    #[error(transparent)]
    InvalidUri(#[from] UriError),

    #[error(transparent)]
    DiffContent(#[from] DiffContentError),
}

/// Collaborators handed to [`activate`].
#[derive(Clone)]
pub struct ActivationDeps {
    pub service: Arc<UpdateService>,
    pub sidebar: Arc<dyn SidebarPort>,
    pub output: Arc<dyn OutputChannelPort>,
}

/// A live activation.
///
/// Dropping it without calling [`ExtensionRuntime::deactivate`] still stops
/// the scheduler, but does not wait for it.
pub struct ExtensionRuntime {
    service: Arc<UpdateService>,
    sidebar: Arc<dyn SidebarPort>,
    output: Arc<dyn OutputChannelPort>,
    cancel_token: CancellationToken,
    scheduler: Option<JoinHandle<()>>,
}

/// Activate: register commands and start periodic update checks.
///
/// The first check starts right away on the scheduler task. Must be called
/// from within a tokio runtime.
pub fn activate(deps: ActivationDeps) -> ExtensionRuntime {
    let ActivationDeps {
        service,
        sidebar,
        output,
    } = deps;

    output.append_line("Adam Dev extension activated");
    info!(
        extension_id = %service.config().extension_id,
        commands = ExtensionCommand::ALL.len(),
        "Extension activated"
    );

    let cancel_token = CancellationToken::new();
    let scheduler = UpdateScheduler::new(
        Arc::clone(&service),
        service.config().check_interval(),
        cancel_token.clone(),
    )
    .spawn();

    ExtensionRuntime {
        service,
        sidebar,
        output,
        cancel_token,
        scheduler: Some(scheduler),
    }
}

/// Build a runtime without periodic checks.
///
/// For one-shot hosts that run a single command or URI and exit.
pub fn attach(deps: ActivationDeps) -> ExtensionRuntime {
    let ActivationDeps {
        service,
        sidebar,
        output,
    } = deps;

    ExtensionRuntime {
        service,
        sidebar,
        output,
        cancel_token: CancellationToken::new(),
        scheduler: None,
    }
}

impl ExtensionRuntime {
    /// Command ids this activation answers to.
    pub fn registered_commands(&self) -> impl Iterator<Item = &'static str> {
        ExtensionCommand::ALL.iter().map(|c| c.id())
    }

    /// Run a command by id.
    pub async fn execute_command(&self, id: &str) -> Result<CommandOutcome, ActivationError> {
        let command: ExtensionCommand = id.parse()?;
        Ok(self.run_command(command).await)
    }

    /// Run an already parsed command.
    pub async fn run_command(&self, command: ExtensionCommand) -> CommandOutcome {
        dispatch(
            command,
            CommandContext {
                service: &self.service,
                sidebar: self.sidebar.as_ref(),
                output: self.output.as_ref(),
            },
        )
        .await
    }

    /// Route a callback URI opened for this extension.
    ///
    /// Returns the route actually taken: an OpenRouter callback with no
    /// visible sidebar is [`UriRoute::Ignored`].
    pub async fn handle_uri(&self, uri: &str) -> Result<UriRoute, ActivationError> {
        let parsed = CallbackUri::parse(uri)?;

        match parsed.route() {
            UriRoute::OpenRouter { code } => {
                if !self.sidebar.is_visible() {
                    debug!(path = %parsed.path, "No visible sidebar for callback");
                    return Ok(UriRoute::Ignored);
                }
                self.sidebar.handle_openrouter_callback(&code).await;
                Ok(UriRoute::OpenRouter { code })
            }
            UriRoute::Ignored => {
                debug!(path = %parsed.path, "Ignoring callback URI");
                Ok(UriRoute::Ignored)
            }
        }
    }

    /// Document text for a `claude-dev-diff:` URI.
    pub fn provide_diff_content(&self, uri: &str) -> Result<String, ActivationError> {
        Ok(adamup_core::provide_diff_content(uri)?)
    }

    /// Stop periodic checks and wait for the scheduler to finish.
    pub async fn deactivate(mut self) {
        self.cancel_token.cancel();

        if let Some(handle) = self.scheduler.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "Update scheduler ended abnormally");
            }
        }

        self.output.append_line("Adam Dev extension deactivated");
        info!("Extension deactivated");
    }
}

impl Drop for ExtensionRuntime {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}
