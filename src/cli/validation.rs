//! CLI argument validation functions
//!
//! These run inside clap so that obviously malformed arguments are rejected
//! with a usage error before any configuration is loaded.

use std::fs;
use std::path::PathBuf;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!(
            "Cannot read configuration file '{}': {}",
            path_str, e
        )),
    }
}

/// Validate that a service URL has a `<scheme>://` prefix
///
/// Provider-specific checks happen later so their errors keep full detail.
pub fn validate_service_url(url_str: &str) -> Result<String, String> {
    let url = url_str.trim();

    match url.split_once("://") {
        Some((scheme, _)) if !scheme.is_empty() => Ok(url.to_string()),
        _ => Err(format!(
            "Service URL must look like <service>://..., got: '{}'",
            url
        )),
    }
}

/// Validate that a message is not empty
pub fn validate_message(message: &str) -> Result<String, String> {
    if message.trim().is_empty() {
        return Err("Message cannot be empty".to_string());
    }
    Ok(message.to_string())
}
