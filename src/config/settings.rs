//! Settings structures deserialized from TOML files and environment variables

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_log_path() -> String {
    "logs/shout.log".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_connect_timeout_seconds() -> u64 {
    10
}

fn default_max_concurrency() -> usize {
    1
}

fn default_user_agent() -> String {
    format!("shout-rs/{}", env!("CARGO_PKG_VERSION"))
}

fn default_api_base_url() -> String {
    "https://api.telegram.org".to_string()
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// Outbound HTTP client settings shared by all providers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,

    /// Maximum number of destinations contacted at once (1 = sequential)
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
            max_concurrency: default_max_concurrency(),
            user_agent: default_user_agent(),
        }
    }
}

// ============================================================================
// Telegram Settings
// ============================================================================

/// Telegram provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramSettings {
    /// Bot API base URL, without the `/bot<token>` suffix
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for TelegramSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
        }
    }
}

// ============================================================================
// Logger Settings (compatible with LoggerConfig)
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Path to the log file
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to existing file
    #[serde(default = "default_true")]
    pub append: bool,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to LoggerConfig
    ///
    /// This method transforms the configuration file representation into
    /// the runtime LoggerConfig used by the logger module.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::validation("logger.format".to_string(), e.to_string()))?;

        let console = ConsoleConfig::new(self.console.enabled, self.console.colored);
        let file = FileConfig::new(
            self.file.enabled,
            PathBuf::from(self.file.path),
            self.file.append,
        );

        LoggerConfig::new(console, file, format, self.level)
            .map_err(|e| ConfigError::validation("logger".to_string(), e.to_string()))
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from TOML files and environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,

    /// Outbound HTTP configuration
    #[serde(default)]
    pub http: HttpSettings,

    /// Telegram provider configuration
    #[serde(default)]
    pub telegram: TelegramSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.http.timeout_seconds, 30);
        assert_eq!(settings.http.connect_timeout_seconds, 10);
        assert_eq!(settings.http.max_concurrency, 1);
        assert!(settings.http.user_agent.starts_with("shout-rs/"));
        assert_eq!(settings.telegram.api_base_url, "https://api.telegram.org");
        assert_eq!(settings.logger.level, "info");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_into_logger_config() {
        let mut logger = LoggerSettings::default();
        logger.format = "json".to_string();
        logger.file.enabled = true;

        let config = logger.into_logger_config().unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.file.enabled);
        assert_eq!(config.file.path, PathBuf::from("logs/shout.log"));
    }

    #[test]
    fn test_into_logger_config_rejects_bad_format() {
        let mut logger = LoggerSettings::default();
        logger.format = "xml".to_string();

        match logger.into_logger_config() {
            Err(ConfigError::ValidationError { field, .. }) => assert_eq!(field, "logger.format"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    fn arb_http_settings() -> impl Strategy<Value = HttpSettings> {
        (1u64..600)
            .prop_flat_map(|timeout_seconds| {
                (
                    Just(timeout_seconds),
                    1u64..=timeout_seconds,
                    1usize..64,
                    "[a-z]{1,10}/[0-9]\\.[0-9]",
                )
            })
            .prop_map(
                |(timeout_seconds, connect_timeout_seconds, max_concurrency, user_agent)| {
                    HttpSettings {
                        timeout_seconds,
                        connect_timeout_seconds,
                        max_concurrency,
                        user_agent,
                    }
                },
            )
    }

    fn arb_logger_settings() -> impl Strategy<Value = LoggerSettings> {
        (
            prop::sample::select(vec!["trace", "debug", "info", "warn", "error"]),
            prop::sample::select(vec!["full", "compact", "json"]),
            any::<bool>(),
        )
            .prop_map(|(level, format, colored)| LoggerSettings {
                level: level.to_string(),
                format: format.to_string(),
                console: ConsoleSettings {
                    enabled: true,
                    colored,
                },
                file: FileSettings::default(),
            })
    }

    fn arb_settings() -> impl Strategy<Value = Settings> {
        (arb_http_settings(), arb_logger_settings()).prop_map(|(http, logger)| Settings {
            logger,
            http,
            telegram: TelegramSettings::default(),
        })
    }

    proptest! {
        #[test]
        fn prop_generated_settings_are_valid(settings in arb_settings()) {
            prop_assert!(settings.validate().is_ok());
        }

        #[test]
        fn prop_connect_timeout_above_request_timeout_is_rejected(
            timeout_seconds in 1u64..600,
            extra in 1u64..60,
        ) {
            let mut settings = Settings::default();
            settings.http.timeout_seconds = timeout_seconds;
            settings.http.connect_timeout_seconds = timeout_seconds + extra;
            prop_assert!(settings.validate().is_err());
        }

        #[test]
        fn prop_settings_survive_json_round_trip(settings in arb_settings()) {
            let json = serde_json::to_string(&settings).unwrap();
            let parsed: Settings = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, settings);
        }
    }
}
