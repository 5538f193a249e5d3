use crate::config::error::ConfigError;
use crate::error::NotifyError;
use thiserror::Error;

/// Application-wide error type used by the CLI and the configuration layer.
///
/// Notification failures keep their structured `NotifyError` so that
/// [`AppError::exit_code`] can tell rejected input apart from failed delivery.
#[derive(Error, Debug)]
pub enum AppError {
    /// Notification parsing or delivery failed
    #[error(transparent)]
    Notification(#[from] NotifyError),

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let key = match &error {
            ConfigError::ValidationError { field, .. } => field.clone(),
            _ => "settings".to_string(),
        };
        AppError::Configuration {
            key,
            source: error.into(),
        }
    }
}

impl AppError {
    /// Process exit code for this error
    ///
    /// `2` when the input or configuration was rejected before anything was
    /// sent, `1` when delivery was attempted and failed or on internal errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Notification(error) if error.is_validation() => 2,
            AppError::Validation { .. } | AppError::Configuration { .. } => 2,
            AppError::Notification(_) | AppError::Internal { .. } => 1,
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
