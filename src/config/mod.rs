//! Configuration management module for shout-rs
//!
//! This module provides layered configuration loading with support for:
//! - TOML configuration files
//! - Environment variable overrides
//!
//! # Configuration Priority (lowest to highest)
//! 1. Built-in defaults
//! 2. `--config <FILE>` / `SHOUT_CONFIG_FILE`, or `config/default.toml`
//! 3. `SHOUT_*` environment variables

pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

// Re-export public types
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{HttpSettings, LoggerSettings, Settings, TelegramSettings};
