//! Core notification provider trait.
//!
//! A provider owns one URL scheme: it knows how to turn a service URL of that
//! scheme into its own configuration and how to deliver a message with it.

use crate::error::NotifyResult;
use async_trait::async_trait;

/// Trait for notification providers (telegram, ...)
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// All providers must be Send + Sync so one instance can serve concurrent sends.
///
/// # Example Implementation
/// ```ignore
/// use async_trait::async_trait;
///
/// pub struct PushoverProvider;
///
/// #[async_trait]
/// impl NotificationProvider for PushoverProvider {
///     fn name(&self) -> &'static str {
///         "pushover"
///     }
///
///     fn verify(&self, url: &str) -> NotifyResult<()> {
///         PushoverConfig::from_url(url).map(|_| ())
///     }
///
///     async fn send(&self, url: &str, message: &str) -> NotifyResult<()> {
///         // Implementation here
///     }
/// }
/// ```
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Returns the URL scheme this provider handles (e.g., "telegram")
    fn name(&self) -> &'static str;

    /// Parses `url` without sending anything
    ///
    /// # Returns
    /// Ok(()) if the URL is a valid configuration for this provider
    fn verify(&self, url: &str) -> NotifyResult<()>;

    /// Sends `message` to every destination encoded in `url`
    ///
    /// # Returns
    /// Ok(()) only if every destination accepted the message
    async fn send(&self, url: &str, message: &str) -> NotifyResult<()>;
}
