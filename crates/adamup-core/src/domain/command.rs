//! Command ids the extension registers with the host.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A command the host can invoke on the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionCommand {
    /// Run an update check now.
    CheckForUpdates,
    /// Start a new task in the sidebar.
    PlusButtonTapped,
    /// Pop the sidebar out into an editor tab.
    PopoutButtonTapped,
    /// Open the webview in a new editor tab.
    OpenInNewTab,
    /// Show the settings panel.
    SettingsButtonTapped,
    /// Show the task history panel.
    HistoryButtonTapped,
}

impl ExtensionCommand {
    /// Every registered command, in registration order.
    pub const ALL: [Self; 6] = [
        Self::PlusButtonTapped,
        Self::PopoutButtonTapped,
        Self::OpenInNewTab,
        Self::SettingsButtonTapped,
        Self::HistoryButtonTapped,
        Self::CheckForUpdates,
    ];

    /// The id the host knows this command by.
    pub const fn id(self) -> &'static str {
        match self {
            Self::CheckForUpdates => "extension.checkForUpdates",
            Self::PlusButtonTapped => "claude-dev.plusButtonTapped",
            Self::PopoutButtonTapped => "claude-dev.popoutButtonTapped",
            Self::OpenInNewTab => "claude-dev.openInNewTab",
            Self::SettingsButtonTapped => "claude-dev.settingsButtonTapped",
            Self::HistoryButtonTapped => "claude-dev.historyButtonTapped",
        }
    }
}

impl fmt::Display for ExtensionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The host asked for a command id that was never registered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for ExtensionCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.id() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}
