//! Configuration loader for shout-rs
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for a specific configuration file
const CONFIG_FILE_ENV: &str = "SHOUT_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "SHOUT";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

/// Configuration loader that handles layered configuration loading
///
/// Sources, lowest priority first:
/// 1. Built-in defaults
/// 2. An explicit file (`--config` or `SHOUT_CONFIG_FILE`, must exist),
///    otherwise `config/default.toml` when present
/// 3. `SHOUT_*` environment variables
#[derive(Debug)]
pub struct ConfigLoader {
    /// Directory searched for `default.toml`
    config_dir: PathBuf,
    /// Specific configuration file path (if set, the directory is ignored)
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader for an optional explicit configuration file
    ///
    /// When `config_file` is `None`, `SHOUT_CONFIG_FILE` is consulted.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        let config_file =
            config_file.or_else(|| std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from));

        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file,
        }
    }

    /// Use a different directory for `default.toml`
    pub fn with_config_dir(mut self, config_dir: impl Into<PathBuf>) -> Self {
        self.config_dir = config_dir.into();
        self
    }

    /// Get the explicit configuration file, if any
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Load configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - an explicit configuration file does not exist
    /// - configuration parsing fails
    /// - configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match self.config_file {
            Some(ref config_file) => Self::add_file_source(builder, config_file, true)?,
            None => {
                let default_path = self.config_dir.join("default.toml");
                Self::add_file_source(builder, &default_path, false)?
            }
        };

        // Environment variables are always highest priority.
        // SHOUT_HTTP__TIMEOUT_SECONDS -> http.timeout_seconds
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    /// Add a file source to the config builder
    fn add_file_source(builder: Builder, path: &Path, required: bool) -> Result<Builder, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        Ok(builder.add_source(
            File::new(path.to_str().unwrap_or_default(), FileFormat::Toml).required(required),
        ))
    }

    /// Add environment variable source to the config builder
    ///
    /// Examples:
    /// - `SHOUT_HTTP__TIMEOUT_SECONDS` -> `http.timeout_seconds`
    /// - `SHOUT_TELEGRAM__API_BASE_URL` -> `telegram.api_base_url`
    fn add_env_source(builder: Builder) -> Builder {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(None)
    }
}
