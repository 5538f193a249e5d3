use std::sync::LazyLock;
use std::time::Duration;

use crate::config::HttpSettings;

/// Builds an HTTP client from the outbound HTTP settings
///
/// # Features
/// - **Timeouts**: whole-request and connect timeouts from settings
/// - **Compression**: gzip responses are decoded transparently
/// - **Security**: Rustls for TLS (no OpenSSL dependency)
///
/// # Errors
/// Returns the underlying `reqwest::Error` if the TLS backend cannot be set up
pub fn build_http_client(settings: &HttpSettings) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(settings.timeout_seconds))
        .connect_timeout(Duration::from_secs(settings.connect_timeout_seconds))
        // Connection pooling
        .pool_idle_timeout(Duration::from_secs(90))
        .gzip(true)
        .user_agent(settings.user_agent.as_str())
        .build()
}

/// Global HTTP client with default settings
///
/// Used by providers constructed without explicit settings so that repeated
/// sends reuse connections.
///
/// # Example
/// ```ignore
/// use shout_rs::external::client::HTTP_CLIENT;
///
/// let response = HTTP_CLIENT
///     .post("https://api.telegram.org/bot<token>/sendMessage")
///     .json(&body)
///     .send()
///     .await?;
/// ```
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    build_http_client(&HttpSettings::default()).expect("Failed to build HTTP client")
});
