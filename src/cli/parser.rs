//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

/// Send notifications described by service URLs
#[derive(Parser, Debug)]
#[command(name = "shout")]
#[command(about = "Send notifications described by service URLs")]
#[command(long_about = "
shout delivers a text message to the destinations encoded in a service URL.
The URL scheme picks the notification service; the rest of the URL carries
the credentials and recipients.

SUPPORTED SERVICES:
    telegram://<bot-token>/<chat-id>[/<chat-id>...][?notification=no&preview=no&parsemode=html]

EXAMPLES:
    # Send a message to two Telegram chats
    shout send --url telegram://12345:secret/@alerts/-1001234567890 --message \"Deploy finished\"

    # Read the URL from the environment and the message from stdin
    SHOUT_URL=telegram://12345:secret/@alerts echo \"Backup done\" | shout send --message -

    # Check a URL without sending anything
    shout verify --url telegram://12345:secret/@alerts

    # Use a custom configuration file with verbose logging
    shout --config /etc/shout/shout.toml --verbose send --url ... --message ...
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// Specify a configuration file to use instead of config/default.toml.
    /// The file must be TOML, exist and be readable.
    ///
    /// Example: --config /etc/shout/shout.toml
    #[arg(short, long, value_name = "FILE", global = true, value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    ///
    /// Raises log output to debug level, including one line per request.
    /// Cannot be used with --quiet.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Lowers log output to error level only.
    /// Cannot be used with --verbose.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a message
    ///
    /// Parses the service URL, then delivers the message to every destination
    /// it names. Exits non-zero if any destination fails.
    ///
    /// Examples:
    ///   shout send --url telegram://12345:secret/@alerts --message "hello"
    ///   echo "hello" | shout send --url telegram://12345:secret/@alerts --message -
    Send {
        /// Service URL (falls back to the SHOUT_URL environment variable)
        #[arg(short, long, env = "SHOUT_URL", value_name = "URL", hide_env_values = true, value_parser = super::validation::validate_service_url)]
        url: String,

        /// Message text, or '-' to read it from stdin
        #[arg(short, long, value_name = "TEXT", value_parser = super::validation::validate_message)]
        message: String,
    },
    /// Check a service URL without sending anything
    ///
    /// Prints a summary of the parsed configuration with secrets masked.
    ///
    /// Examples:
    ///   shout verify --url telegram://12345:secret/@alerts
    Verify {
        /// Service URL (falls back to the SHOUT_URL environment variable)
        #[arg(short, long, env = "SHOUT_URL", value_name = "URL", hide_env_values = true, value_parser = super::validation::validate_service_url)]
        url: String,
    },
}

impl Cli {
    /// Log level forced by --verbose / --quiet, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_flag() {
        let result = Cli::try_parse_from(["shout", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["shout", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_send_command() {
        let cli = Cli::try_parse_from([
            "shout",
            "send",
            "--url",
            "telegram://12345:mock-token/channel-1",
            "--message",
            "hello",
        ])
        .unwrap();

        match &cli.command {
            Commands::Send { url, message } => {
                assert_eq!(url, "telegram://12345:mock-token/channel-1");
                assert_eq!(message, "hello");
            }
            other => panic!("Expected Send command, got {:?}", other),
        }
        assert_eq!(cli.log_level_override(), None);
    }

    #[test]
    fn test_verify_command_with_global_flag_after_subcommand() {
        let cli = Cli::try_parse_from([
            "shout",
            "verify",
            "--url",
            "telegram://12345:mock-token/channel-1",
            "--verbose",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Verify { .. }));
        assert_eq!(cli.log_level_override(), Some("debug"));
    }

    #[test]
    fn test_quiet_flag() {
        let cli = Cli::try_parse_from([
            "shout",
            "-q",
            "verify",
            "--url",
            "telegram://12345:mock-token/channel-1",
        ])
        .unwrap();
        assert_eq!(cli.log_level_override(), Some("error"));
    }

    #[test]
    fn test_url_without_scheme_is_rejected() {
        let result = Cli::try_parse_from(["shout", "verify", "--url", "12345:mock-token/channel"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ValueValidation
        );
    }

    #[test]
    fn test_empty_message_is_rejected() {
        let result = Cli::try_parse_from([
            "shout",
            "send",
            "--url",
            "telegram://12345:mock-token/channel-1",
            "--message",
            "",
        ]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ValueValidation
        );
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let result = Cli::try_parse_from([
            "shout",
            "--verbose",
            "--quiet",
            "verify",
            "--url",
            "telegram://12345:mock-token/channel-1",
        ]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
