//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use url::Url;

use crate::config::error::ConfigError;
use crate::config::settings::{HttpSettings, LoggerSettings, Settings, TelegramSettings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl HttpSettings {
    /// Validate HTTP configuration
    ///
    /// # Validation Rules
    /// - Timeouts must be greater than 0
    /// - Connect timeout must not exceed the request timeout
    /// - Max concurrency must be at least 1
    /// - User agent must not be empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "http.timeout_seconds",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "http.connect_timeout_seconds",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout_seconds > self.timeout_seconds {
            return Err(ConfigError::validation(
                "http.connect_timeout_seconds",
                "Connect timeout cannot exceed the request timeout.",
            ));
        }

        if self.max_concurrency == 0 {
            return Err(ConfigError::validation(
                "http.max_concurrency",
                "Max concurrency must be at least 1.",
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::validation(
                "http.user_agent",
                "User agent cannot be empty.",
            ));
        }

        Ok(())
    }
}

impl TelegramSettings {
    /// Validate Telegram configuration
    ///
    /// # Validation Rules
    /// - API base URL must be an absolute http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_base_url).map_err(|e| {
            ConfigError::validation(
                "telegram.api_base_url".to_string(),
                format!("Invalid URL '{}': {}", self.api_base_url, e),
            )
        })?;

        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(ConfigError::validation(
                "telegram.api_base_url",
                "API base URL must use http or https protocol.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger configuration
    ///
    /// # Validation Rules
    /// - Level must be one of: trace, debug, info, warn, error
    /// - Format must be one of: full, compact, json
    /// - At least one output must be enabled
    /// - File path must not be empty when file output is enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level".to_string(),
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.format".to_string(),
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        if self.file.enabled && self.file.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path cannot be empty when file output is enabled.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate every settings section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logger.validate()?;
        self.http.validate()?;
        self.telegram.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid_field(result: Result<(), ConfigError>, expected: &str) {
        match result {
            Err(ConfigError::ValidationError { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected validation error for {}, got {:?}", expected, other),
        }
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut http = HttpSettings::default();
        http.timeout_seconds = 0;
        assert_invalid_field(http.validate(), "http.timeout_seconds");
    }

    #[test]
    fn test_connect_timeout_cannot_exceed_request_timeout() {
        let mut http = HttpSettings::default();
        http.timeout_seconds = 5;
        http.connect_timeout_seconds = 10;
        assert_invalid_field(http.validate(), "http.connect_timeout_seconds");
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        let mut http = HttpSettings::default();
        http.max_concurrency = 0;
        assert_invalid_field(http.validate(), "http.max_concurrency");
    }

    #[test]
    fn test_empty_user_agent_is_rejected() {
        let mut http = HttpSettings::default();
        http.user_agent = "  ".to_string();
        assert_invalid_field(http.validate(), "http.user_agent");
    }

    #[test]
    fn test_api_base_url_must_be_http() {
        let telegram = TelegramSettings {
            api_base_url: "ftp://api.telegram.org".to_string(),
        };
        assert_invalid_field(telegram.validate(), "telegram.api_base_url");

        let telegram = TelegramSettings {
            api_base_url: "not a url".to_string(),
        };
        assert_invalid_field(telegram.validate(), "telegram.api_base_url");

        let telegram = TelegramSettings {
            api_base_url: "http://127.0.0.1:8081".to_string(),
        };
        assert!(telegram.validate().is_ok());
    }

    #[test]
    fn test_logger_level_and_format() {
        let mut logger = LoggerSettings::default();
        logger.level = "verbose".to_string();
        assert_invalid_field(logger.validate(), "logger.level");

        let mut logger = LoggerSettings::default();
        logger.format = "pretty".to_string();
        assert_invalid_field(logger.validate(), "logger.format");
    }

    #[test]
    fn test_logger_requires_an_output() {
        let mut logger = LoggerSettings::default();
        logger.console.enabled = false;
        assert_invalid_field(logger.validate(), "logger");

        logger.file.enabled = true;
        logger.file.path = String::new();
        assert_invalid_field(logger.validate(), "logger.file.path");
    }
}
