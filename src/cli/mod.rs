//! CLI module for shout
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration loading with CLI overrides
//! - Command handlers for send and verify operations

pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

// Re-export public types for convenience
pub use executor::execute_command;
pub use parser::{Cli, Commands};

use crate::config::{ConfigLoader, Settings};
use crate::error::AppResult;
use crate::logger::init_logger;

/// Load configuration and apply CLI overrides
///
/// Sources, lowest precedence first: built-in defaults, the configuration
/// file, `SHOUT_*` environment variables, then `--verbose` / `--quiet`.
///
/// # Errors
/// Returns error if the configuration cannot be read or fails validation
pub fn load_and_merge_config(cli: &Cli) -> AppResult<Settings> {
    let mut settings = ConfigLoader::new(cli.config.clone()).load()?;

    if let Some(level) = cli.log_level_override() {
        settings.logger.level = level.to_string();
    }

    Ok(settings)
}

/// Initialize logger from settings
///
/// # Errors
/// Returns error if the logger settings are invalid or a subscriber is
/// already installed
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    let logger_config = settings.logger.clone().into_logger_config()?;
    init_logger(logger_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_verbose_overrides_configured_level() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[logger]\nlevel = \"warn\"").unwrap();

        let cli = Cli::try_parse_from([
            "shout",
            "--config",
            file.path().to_str().unwrap(),
            "--verbose",
            "verify",
            "--url",
            "telegram://12345:mock-token/channel-1",
        ])
        .unwrap();

        let settings = load_and_merge_config(&cli).unwrap();
        assert_eq!(settings.logger.level, "debug");
    }

    #[test]
    fn test_config_file_level_is_kept_without_flags() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[logger]\nlevel = \"warn\"").unwrap();

        let cli = Cli::try_parse_from([
            "shout",
            "--config",
            file.path().to_str().unwrap(),
            "verify",
            "--url",
            "telegram://12345:mock-token/channel-1",
        ])
        .unwrap();

        let settings = load_and_merge_config(&cli).unwrap();
        assert_eq!(settings.logger.level, "warn");
    }
}
