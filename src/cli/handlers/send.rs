//! Send command handler
//!
//! Resolves the message text (argument or stdin) and hands it to the
//! notification service.

use crate::error::{AppError, AppResult};
use crate::services::NotificationService;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Message argument meaning "read the message from stdin"
pub const STDIN_MARKER: &str = "-";

/// Handler for the send command
pub struct SendCommandHandler {
    service: NotificationService,
}

impl SendCommandHandler {
    /// Create a new send command handler
    pub fn new(service: NotificationService) -> Self {
        Self { service }
    }

    /// Execute the send command
    ///
    /// # Arguments
    /// * `url` - Service URL selecting provider and destinations
    /// * `message` - Message text, or `-` to read it from stdin
    ///
    /// # Errors
    /// - Validation errors for an empty message read from stdin
    /// - Notification errors from URL parsing or delivery
    pub async fn execute(&self, url: &str, message: &str) -> AppResult<()> {
        let message = if message == STDIN_MARKER {
            read_message(tokio::io::stdin()).await?
        } else {
            message.to_string()
        };

        self.service.send(url, &message).await?;

        tracing::info!("Notification sent");
        Ok(())
    }
}

/// Reads a message from `input`
///
/// One trailing newline is stripped so that `echo` output does not end up in
/// the delivered text.
pub async fn read_message(mut input: impl AsyncRead + Unpin) -> AppResult<String> {
    let mut buffer = String::new();
    input
        .read_to_string(&mut buffer)
        .await
        .map_err(|e| AppError::Internal { source: e.into() })?;

    let text = buffer
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(&buffer);

    if text.trim().is_empty() {
        return Err(AppError::Validation {
            field: "message".to_string(),
            reason: "Message read from stdin is empty".to_string(),
        });
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotifyError;
    use crate::services::notifications::{NotificationProvider, TelegramProvider};
    use std::sync::Arc;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_stdin_message_strips_one_newline() {
        let message = read_message("line one\nline two\n\n".as_bytes()).await.unwrap();
        assert_eq!(message, "line one\nline two\n");

        let message = read_message("windows\r\n".as_bytes()).await.unwrap();
        assert_eq!(message, "windows");
    }

    #[tokio::test]
    async fn test_empty_stdin_is_rejected() {
        let result = read_message("\n".as_bytes()).await;
        assert!(matches!(
            result,
            Err(AppError::Validation { ref field, .. }) if field == "message"
        ));
    }

    #[tokio::test]
    async fn test_literal_message_does_not_touch_stdin() {
        // A literal message is sent as-is, even when it looks like stdin content
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot12345:mock-token/sendMessage"))
            .and(body_partial_json(serde_json::json!({ "text": "--" })))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let provider: Arc<dyn NotificationProvider> = Arc::new(TelegramProvider::with_client(
            reqwest::Client::new(),
            &server.uri(),
        ));
        let handler = SendCommandHandler::new(NotificationService::new(vec![provider]));

        tokio::time::timeout(
            std::time::Duration::from_secs(5),
            handler.execute("telegram://12345:mock-token/channel-1", "--"),
        )
        .await
        .expect("literal message must not wait on stdin")
        .unwrap();
    }

    #[tokio::test]
    async fn test_execute_sends_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot12345:mock-token/sendMessage"))
            .and(body_partial_json(serde_json::json!({
                "chat_id": "channel-1",
                "text": "hello"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let provider: Arc<dyn NotificationProvider> = Arc::new(TelegramProvider::with_client(
            reqwest::Client::new(),
            &server.uri(),
        ));
        let handler = SendCommandHandler::new(NotificationService::new(vec![provider]));

        handler
            .execute("telegram://12345:mock-token/channel-1", "hello")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_execute_surfaces_notification_errors() {
        let handler = SendCommandHandler::new(NotificationService::default());

        let result = handler.execute("telegram://not-a-token/channel-1", "hello").await;
        assert!(matches!(
            result,
            Err(AppError::Notification(NotifyError::InvalidTokenFormat))
        ));
    }
}
