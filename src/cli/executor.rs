//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{SendCommandHandler, VerifyCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::AppResult;
use crate::services::NotificationService;

/// Execute a CLI command with the given settings
///
/// Builds the notification service from `settings` and dispatches to the
/// handler for the parsed subcommand.
///
/// # Errors
/// Returns errors from service construction or from the command handler
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    let service = NotificationService::from_settings(&settings)?;

    tracing::debug!(schemes = ?service.schemes(), "Notification service ready");

    match &cli.command {
        Commands::Send { url, message } => {
            SendCommandHandler::new(service).execute(url, message).await
        }
        Commands::Verify { url } => VerifyCommandHandler::new(service).execute(url),
    }
}
