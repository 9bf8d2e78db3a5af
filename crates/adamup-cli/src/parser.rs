//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Keep the Adam editor extension up to date.
#[derive(Parser)]
#[command(name = "adamup")]
#[command(about = "Check for, download and install Adam extension updates")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Editor command used to query and install extensions
    #[arg(long, global = true, env = "ADAMUP_EDITOR", default_value = "code")]
    pub editor: String,

    /// Treat this as the installed version instead of asking the editor
    #[arg(long = "installed-version", global = true)]
    pub installed_version: Option<String>,

    /// Answer the first option to every prompt
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "adamup",
            "--verbose",
            "--editor",
            "codium",
            "--installed-version",
            "3.1.0",
            "check",
            "--yes",
        ]);
        assert!(cli.verbose);
        assert!(cli.yes);
        assert_eq!(cli.editor, "codium");
        assert_eq!(cli.installed_version.as_deref(), Some("3.1.0"));
        assert!(matches!(cli.command, Some(Commands::Check)));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["adamup", "watch"]);
        assert!(!cli.verbose);
        assert!(!cli.yes);
        assert!(cli.installed_version.is_none());
        assert!(matches!(cli.command, Some(Commands::Watch)));
    }

    #[test]
    fn test_positional_subcommands() {
        let cli = Cli::parse_from(["adamup", "command", "claude-dev.plusButtonTapped"]);
        match cli.command {
            Some(Commands::Command { id }) => assert_eq!(id, "claude-dev.plusButtonTapped"),
            _ => panic!("expected command subcommand"),
        }

        let cli = Cli::parse_from(["adamup", "uri", "vscode://adamai.adam-vscode/openrouter?code=x"]);
        assert!(matches!(cli.command, Some(Commands::Uri { .. })));

        let cli = Cli::parse_from(["adamup", "diff", "claude-dev-diff:a.rs?aGk="]);
        assert!(matches!(cli.command, Some(Commands::Diff { .. })));

        let cli = Cli::parse_from(["adamup", "config"]);
        assert!(matches!(cli.command, Some(Commands::Config)));
    }

    #[test]
    fn test_command_requires_id() {
        assert!(Cli::try_parse_from(["adamup", "command"]).is_err());
    }
}
