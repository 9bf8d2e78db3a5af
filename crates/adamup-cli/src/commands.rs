//! Subcommands.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run one update check and exit
    Check,

    /// Activate, check now and then on the configured interval until Ctrl-C
    Watch,

    /// Run an extension command by id (e.g. "extension.checkForUpdates")
    Command {
        /// Command id
        id: String,
    },

    /// Route a callback URI opened for the extension
    Uri {
        /// Full URI, e.g. "vscode://adamai.adam-vscode/openrouter?code=..."
        uri: String,
    },

    /// Print the document text of a claude-dev-diff URI
    Diff {
        /// Full URI, e.g. "claude-dev-diff:src/main.rs?<base64>"
        uri: String,
    },

    /// Show the effective configuration
    Config,
}
