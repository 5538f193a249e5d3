//! Telegram notification provider implementation.
//!
//! Sends text messages through the Telegram Bot API, one `sendMessage` call
//! per destination chat in the service URL.
//!
//! Bot API Reference: https://core.telegram.org/bots/api#sendmessage

use super::provider::NotificationProvider;
use crate::error::{NotifyError, NotifyResult};
use crate::external::client::HTTP_CLIENT;
use crate::models::{TELEGRAM_SCHEME, TelegramConfig};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use serde_json::{Value, json};

/// Longest message the Bot API accepts, in characters
pub const MAX_MESSAGE_LENGTH: usize = 4096;

/// Public Bot API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";

/// Telegram notification provider
///
/// Parses `telegram://<token>/<chat>/...` URLs and posts the message to
/// every chat. Destinations are attempted in URL order; with
/// `max_concurrency > 1` up to that many requests are in flight at once,
/// but failures are still reported in channel order.
///
/// # Example
/// ```ignore
/// let provider = TelegramProvider::new();
/// provider
///     .send("telegram://12345:token/@my_channel", "Deploy finished")
///     .await?;
/// ```
#[derive(Clone)]
pub struct TelegramProvider {
    client: reqwest::Client,
    api_base_url: String,
    max_concurrency: usize,
}

impl TelegramProvider {
    /// Creates a provider using the global HTTP client and the public API
    pub fn new() -> Self {
        Self::with_client(HTTP_CLIENT.clone(), DEFAULT_API_BASE_URL)
    }

    /// Creates a provider with an explicit client and API base URL
    ///
    /// # Arguments
    /// * `client` - HTTP client used for every request
    /// * `api_base_url` - Bot API root, e.g. `https://api.telegram.org`
    pub fn with_client(client: reqwest::Client, api_base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            max_concurrency: 1,
        }
    }

    /// Allows up to `max_concurrency` destinations to be contacted at once
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Parses a service URL into a Telegram configuration
    ///
    /// # Errors
    /// `MissingToken`, `InvalidTokenFormat`, `MissingChannels`, `InvalidChannel`, or
    /// `InvalidUrl`/`InvalidOption` for structurally bad URLs
    pub fn create_config_from_url(&self, url: &str) -> NotifyResult<TelegramConfig> {
        TelegramConfig::from_url(url)
    }

    /// Sends `message` to every channel of an already parsed configuration
    ///
    /// The length limit is checked before any request is made.
    pub async fn send_with_config(
        &self,
        config: &TelegramConfig,
        message: &str,
    ) -> NotifyResult<()> {
        let length = message.chars().count();
        if length > MAX_MESSAGE_LENGTH {
            return Err(NotifyError::MessageTooLong {
                length,
                limit: MAX_MESSAGE_LENGTH,
            });
        }

        // Futures are built up front; a lazily mapped stream is not `Send`
        // inside the `async_trait` future.
        let requests: Vec<_> = config
            .channels()
            .iter()
            .map(|channel| self.send_to_channel(config, channel, message))
            .collect();

        let results: Vec<NotifyResult<()>> = stream::iter(requests)
            .buffered(self.max_concurrency)
            .collect()
            .await;

        let total = results.len();
        let mut failures: Vec<NotifyError> = results.into_iter().filter_map(Result::err).collect();

        match failures.len() {
            0 => {
                tracing::info!(channels = total, "Telegram notification delivered");
                Ok(())
            }
            1 => Err(failures.remove(0)),
            _ => Err(NotifyError::Delivery { total, failures }),
        }
    }

    /// Builds the `sendMessage` endpoint for a bot token
    fn endpoint(&self, token: &str) -> String {
        format!("{}/bot{}/sendMessage", self.api_base_url, token)
    }

    /// Builds the request body for the `sendMessage` call
    ///
    /// Optional flags are only included when they differ from the API defaults.
    fn build_request_body(config: &TelegramConfig, channel: &str, message: &str) -> Value {
        let options = config.options();
        let mut body = json!({
            "chat_id": channel,
            "text": message,
        });

        if !options.notification {
            body["disable_notification"] = json!(true);
        }

        if !options.preview {
            body["disable_web_page_preview"] = json!(true);
        }

        if let Some(parse_mode) = options.parse_mode.api_value() {
            body["parse_mode"] = json!(parse_mode);
        }

        body
    }

    async fn send_to_channel(
        &self,
        config: &TelegramConfig,
        channel: &str,
        message: &str,
    ) -> NotifyResult<()> {
        let body = Self::build_request_body(config, channel, message);

        tracing::debug!(
            bot = %config.redacted_token(),
            channel,
            "Sending Telegram message"
        );

        // The request URL embeds the token, so it is stripped from transport errors
        let response = self
            .client
            .post(self.endpoint(config.token()))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let source = e.without_url();
                tracing::warn!(channel, error = %source, "Telegram request failed");
                NotifyError::Transport {
                    channel: channel.to_string(),
                    source,
                }
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(channel, status = status.as_u16(), "Telegram accepted message");
            return Ok(());
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(channel, error = %e.without_url(), "Failed to read error response body");
                String::new()
            }
        };
        let description = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|v| v.get("description").and_then(Value::as_str).map(str::to_string))
            .unwrap_or(text);

        tracing::warn!(
            channel,
            status = status.as_u16(),
            description = %description,
            "Telegram rejected message"
        );

        Err(NotifyError::Api {
            channel: channel.to_string(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            description,
        })
    }
}

impl Default for TelegramProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationProvider for TelegramProvider {
    fn name(&self) -> &'static str {
        TELEGRAM_SCHEME
    }

    fn verify(&self, url: &str) -> NotifyResult<()> {
        self.create_config_from_url(url).map(|_| ())
    }

    /// Sends a notification via Telegram
    ///
    /// Parses the URL, checks the message length, then posts to each chat.
    async fn send(&self, url: &str, message: &str) -> NotifyResult<()> {
        let config = self.create_config_from_url(url)?;
        self.send_with_config(&config, message).await
    }
}
