//! Command table.

use adamup_core::{
    ExtensionCommand, OutputChannelPort, SidebarPort, UpdateOutcome, UpdateService, WebviewAction,
};
use tracing::debug;

/// What running a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// `extension.checkForUpdates` ran a full check.
    UpdateCheck(UpdateOutcome),
    /// The command was handed to the sidebar.
    Forwarded(ExtensionCommand),
}

/// Everything a command handler may touch.
pub(crate) struct CommandContext<'a> {
    pub service: &'a UpdateService,
    pub sidebar: &'a dyn SidebarPort,
    pub output: &'a dyn OutputChannelPort,
}

pub(crate) async fn dispatch(command: ExtensionCommand, ctx: CommandContext<'_>) -> CommandOutcome {
    debug!(command = %command, "Executing command");

    match command {
        ExtensionCommand::CheckForUpdates => {
            return CommandOutcome::UpdateCheck(ctx.service.check_for_updates().await);
        }
        ExtensionCommand::PlusButtonTapped => {
            ctx.output.append_line("Plus button tapped");
            ctx.sidebar.clear_task().await;
            ctx.sidebar.post_state_to_webview().await;
            ctx.sidebar
                .post_action(WebviewAction::ChatButtonTapped)
                .await;
        }
        ExtensionCommand::PopoutButtonTapped | ExtensionCommand::OpenInNewTab => {
            ctx.output.append_line("Opening AdamAGI in new tab");
            ctx.sidebar.open_in_new_tab().await;
        }
        ExtensionCommand::SettingsButtonTapped => {
            ctx.sidebar
                .post_action(WebviewAction::SettingsButtonTapped)
                .await;
        }
        ExtensionCommand::HistoryButtonTapped => {
            ctx.sidebar
                .post_action(WebviewAction::HistoryButtonTapped)
                .await;
        }
    }

    CommandOutcome::Forwarded(command)
}
