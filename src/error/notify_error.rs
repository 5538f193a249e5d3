use thiserror::Error;

/// Errors produced while parsing a service URL or delivering a notification.
///
/// Every variant carries structured data; the rendered message is built from
/// those fields so callers can either match on the variant or inspect the text
/// (API failures always render the status line, e.g. `401 Unauthorized`).
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The URL authority (bot token) is empty
    #[error("Missing bot token in service URL")]
    MissingToken,

    /// The bot token does not look like `<numeric-id>:<secret>`
    #[error("Invalid bot token format, expected <numeric-id>:<secret>")]
    InvalidTokenFormat,

    /// The URL has a token but no destination path segments
    #[error("Missing channels: at least one chat id is required after the token")]
    MissingChannels,

    /// A destination is empty or contains a character reserved by the URL form
    #[error("Invalid channel '{channel}': {reason}")]
    InvalidChannel { channel: String, reason: String },

    /// The message is longer than the provider accepts
    #[error("Message too long: {length} characters exceeds the limit of {limit}")]
    MessageTooLong { length: usize, limit: usize },

    /// The request never produced an HTTP response
    #[error("Transport error while sending to {channel}: {source}")]
    Transport {
        channel: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status
    #[error("API error for {channel}: {status} {reason}: {description}")]
    Api {
        channel: String,
        status: u16,
        reason: String,
        description: String,
    },

    /// More than one destination failed; failures are kept in channel order
    #[error(
        "Failed to deliver to {} of {total} channels: {}",
        .failures.len(),
        join_failures(.failures)
    )]
    Delivery {
        total: usize,
        failures: Vec<NotifyError>,
    },

    /// The URL could not be split into scheme and body
    #[error("Invalid service URL: {reason}")]
    InvalidUrl { reason: String },

    /// No provider is registered for the URL scheme
    #[error("Unknown notification service: {scheme}")]
    UnknownService { scheme: String },

    /// A query parameter was unknown or had a bad value
    #[error("Invalid option {key}: {reason}")]
    InvalidOption { key: String, reason: String },
}

impl NotifyError {
    /// Create an invalid URL error
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        NotifyError::InvalidUrl {
            reason: reason.into(),
        }
    }

    /// Create an invalid option error
    pub fn invalid_option(key: impl Into<String>, reason: impl Into<String>) -> Self {
        NotifyError::InvalidOption {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status of an API failure, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            NotifyError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error was raised before any network call was attempted
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            NotifyError::MissingToken
                | NotifyError::InvalidTokenFormat
                | NotifyError::MissingChannels
                | NotifyError::InvalidChannel { .. }
                | NotifyError::MessageTooLong { .. }
                | NotifyError::InvalidUrl { .. }
                | NotifyError::UnknownService { .. }
                | NotifyError::InvalidOption { .. }
        )
    }
}

fn join_failures(failures: &[NotifyError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Type alias for Result with NotifyError
pub type NotifyResult<T> = Result<T, NotifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(channel: &str, status: u16, reason: &str) -> NotifyError {
        NotifyError::Api {
            channel: channel.to_string(),
            status,
            reason: reason.to_string(),
            description: "Unauthorized".to_string(),
        }
    }

    #[test]
    fn test_api_error_renders_status_line() {
        let err = api_error("channel-id", 401, "Unauthorized");
        assert!(err.to_string().contains("401 Unauthorized"));
        assert_eq!(err.status(), Some(401));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_delivery_error_lists_every_failure() {
        let err = NotifyError::Delivery {
            total: 3,
            failures: vec![
                api_error("channel-1", 400, "Bad Request"),
                api_error("channel-3", 403, "Forbidden"),
            ],
        };
        let text = err.to_string();
        assert!(text.starts_with("Failed to deliver to 2 of 3 channels"));
        assert!(text.contains("channel-1: 400 Bad Request"));
        assert!(text.contains("channel-3: 403 Forbidden"));
    }

    #[test]
    fn test_validation_errors_are_flagged() {
        assert!(NotifyError::MissingToken.is_validation());
        assert!(NotifyError::InvalidTokenFormat.is_validation());
        assert!(NotifyError::MissingChannels.is_validation());
        assert!(
            NotifyError::InvalidChannel {
                channel: "a/b".to_string(),
                reason: "contains '/'".to_string(),
            }
            .is_validation()
        );
        assert!(
            NotifyError::MessageTooLong {
                length: 4200,
                limit: 4096
            }
            .is_validation()
        );
    }
}
