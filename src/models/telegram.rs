//! Telegram service configuration.
//!
//! A `TelegramConfig` is the validated form of a
//! `telegram://<token>/<channel>/...` URL. It is immutable once built.

use super::service_url::ServiceUrl;
use crate::error::{NotifyError, NotifyResult};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use url::form_urlencoded;

/// URL scheme handled by the Telegram provider
pub const TELEGRAM_SCHEME: &str = "telegram";

/// Bot tokens are `<numeric-id>:<secret>`; the secret must fit in a URL authority
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+:[^/?#\s]+$").expect("Token pattern must compile"));

/// Text formatting mode understood by the Bot API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Plain text, no `parse_mode` field is sent
    #[default]
    None,
    Markdown,
    MarkdownV2,
    Html,
}

impl ParseMode {
    /// Value for the `parse_mode` request field
    pub fn api_value(&self) -> Option<&'static str> {
        match self {
            ParseMode::None => None,
            ParseMode::Markdown => Some("Markdown"),
            ParseMode::MarkdownV2 => Some("MarkdownV2"),
            ParseMode::Html => Some("HTML"),
        }
    }

    /// Value for the `parsemode` URL query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::None => "none",
            ParseMode::Markdown => "markdown",
            ParseMode::MarkdownV2 => "markdownv2",
            ParseMode::Html => "html",
        }
    }
}

impl FromStr for ParseMode {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "" => Ok(ParseMode::None),
            "markdown" => Ok(ParseMode::Markdown),
            "markdownv2" => Ok(ParseMode::MarkdownV2),
            "html" => Ok(ParseMode::Html),
            _ => Err(NotifyError::invalid_option(
                "parsemode",
                format!("'{}' is not one of: none, markdown, markdownv2, html", s),
            )),
        }
    }
}

/// Optional delivery settings carried in the URL query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelegramOptions {
    /// Play a notification sound on the recipient side
    pub notification: bool,
    /// Let Telegram render link previews
    pub preview: bool,
    pub parse_mode: ParseMode,
}

impl Default for TelegramOptions {
    fn default() -> Self {
        Self {
            notification: true,
            preview: true,
            parse_mode: ParseMode::None,
        }
    }
}

impl TelegramOptions {
    /// Builds options from URL query pairs
    ///
    /// Keys are case-insensitive. Unknown keys are rejected rather than ignored
    /// so that typos do not silently change delivery behaviour.
    pub fn from_query(pairs: &[(String, String)]) -> NotifyResult<Self> {
        let mut options = Self::default();

        for (key, value) in pairs {
            match key.to_lowercase().as_str() {
                "notification" => options.notification = parse_flag(key, value)?,
                "preview" => options.preview = parse_flag(key, value)?,
                "parsemode" => options.parse_mode = value.parse()?,
                _ => {
                    return Err(NotifyError::invalid_option(
                        key.as_str(),
                        "unknown option, expected one of: notification, preview, parsemode",
                    ));
                }
            }
        }

        Ok(options)
    }

    /// Query pairs for every option that differs from its default
    fn to_query(self) -> Vec<(&'static str, &'static str)> {
        let defaults = Self::default();
        let mut pairs = Vec::new();

        if self.notification != defaults.notification {
            pairs.push(("notification", flag_str(self.notification)));
        }
        if self.preview != defaults.preview {
            pairs.push(("preview", flag_str(self.preview)));
        }
        if self.parse_mode != defaults.parse_mode {
            pairs.push(("parsemode", self.parse_mode.as_str()));
        }

        pairs
    }
}

fn parse_flag(key: &str, value: &str) -> NotifyResult<bool> {
    match value.to_lowercase().as_str() {
        "yes" | "true" | "1" | "on" => Ok(true),
        "no" | "false" | "0" | "off" => Ok(false),
        _ => Err(NotifyError::invalid_option(
            key,
            format!("'{}' is not a boolean (use yes or no)", value),
        )),
    }
}

fn flag_str(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Validated Telegram configuration
///
/// Holds the bot token and the ordered list of destination chat ids.
/// Construct it with [`TelegramConfig::from_url`] or [`TelegramConfig::new`];
/// both guarantee a well-formed token and at least one channel.
#[derive(Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    token: String,
    channels: Vec<String>,
    options: TelegramOptions,
}

impl TelegramConfig {
    /// Creates a configuration from its parts
    ///
    /// # Errors
    /// - `MissingToken` if `token` is empty
    /// - `InvalidTokenFormat` if `token` is not `<numeric-id>:<secret>`
    /// - `MissingChannels` if `channels` is empty
    /// - `InvalidChannel` if a channel is empty or contains `/`, `?`, `#` or
    ///   whitespace, none of which survive [`TelegramConfig::to_url`]
    pub fn new(
        token: impl Into<String>,
        channels: Vec<String>,
        options: TelegramOptions,
    ) -> NotifyResult<Self> {
        let token = token.into();

        if token.is_empty() {
            return Err(NotifyError::MissingToken);
        }
        if !TOKEN_PATTERN.is_match(&token) {
            return Err(NotifyError::InvalidTokenFormat);
        }
        if channels.is_empty() {
            return Err(NotifyError::MissingChannels);
        }
        for channel in &channels {
            validate_channel(channel)?;
        }

        Ok(Self {
            token,
            channels,
            options,
        })
    }

    /// Parses a `telegram://<token>/<channel>/...` URL
    ///
    /// Token problems are reported before channel problems, so
    /// `telegram://invalid-token` is `InvalidTokenFormat` while
    /// `telegram://12345:token` is `MissingChannels`.
    pub fn from_url(raw: &str) -> NotifyResult<Self> {
        let url = ServiceUrl::parse(raw)?;

        if url.scheme() != TELEGRAM_SCHEME {
            return Err(NotifyError::invalid_url(format!(
                "expected scheme '{}', got '{}'",
                TELEGRAM_SCHEME,
                url.scheme()
            )));
        }

        let mut config = Self::new(
            url.authority(),
            url.segments().to_vec(),
            TelegramOptions::default(),
        )?;
        config.options = TelegramOptions::from_query(url.query())?;
        Ok(config)
    }

    /// Renders the configuration back into a service URL
    pub fn to_url(&self) -> String {
        let mut url = format!(
            "{}://{}/{}",
            TELEGRAM_SCHEME,
            self.token,
            self.channels.join("/")
        );

        let pairs = self.options.to_query();
        if !pairs.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs)
                .finish();
            url.push('?');
            url.push_str(&query);
        }

        url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    pub fn options(&self) -> TelegramOptions {
        self.options
    }

    /// Token with the secret part masked, safe for logs and terminal output
    pub fn redacted_token(&self) -> String {
        match self.token.split_once(':') {
            Some((bot_id, _)) => format!("{}:***", bot_id),
            None => "***".to_string(),
        }
    }
}

fn validate_channel(channel: &str) -> NotifyResult<()> {
    let reason = if channel.is_empty() {
        "channel id is empty".to_string()
    } else if let Some(c) = channel
        .chars()
        .find(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace())
    {
        format!("contains reserved character '{}'", c.escape_default())
    } else {
        return Ok(());
    };

    Err(NotifyError::InvalidChannel {
        channel: channel.to_string(),
        reason,
    })
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &self.redacted_token())
            .field("channels", &self.channels)
            .field("options", &self.options)
            .finish()
    }
}

impl FromStr for TelegramConfig {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_url(s)
    }
}
