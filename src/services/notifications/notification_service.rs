//! Notification service routing service URLs to providers.
//!
//! The scheme of a service URL (`telegram://...`) selects the provider. The
//! scheme → provider map is fixed when the service is built.

use super::provider::NotificationProvider;
use super::telegram_provider::TelegramProvider;
use crate::config::Settings;
use crate::error::{AppError, AppResult, NotifyError, NotifyResult};
use crate::external::client::build_http_client;
use crate::models::ServiceUrl;
use std::collections::HashMap;
use std::sync::Arc;

/// Notification service dispatching to the provider registered for a URL scheme
#[derive(Clone)]
pub struct NotificationService {
    providers: Arc<HashMap<&'static str, Arc<dyn NotificationProvider>>>,
}

impl NotificationService {
    /// Creates a service from a set of providers
    ///
    /// Providers are keyed by [`NotificationProvider::name`]; if two share a
    /// scheme the later one wins.
    pub fn new(providers: Vec<Arc<dyn NotificationProvider>>) -> Self {
        let providers = providers
            .into_iter()
            .map(|provider| (provider.name(), provider))
            .collect();

        Self {
            providers: Arc::new(providers),
        }
    }

    /// Creates a service with every built-in provider configured from settings
    ///
    /// # Errors
    /// Returns a configuration error if the HTTP client cannot be built
    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        let client = build_http_client(&settings.http).map_err(|e| AppError::Configuration {
            key: "http".to_string(),
            source: e.into(),
        })?;

        let telegram = TelegramProvider::with_client(client, &settings.telegram.api_base_url)
            .with_max_concurrency(settings.http.max_concurrency);

        let telegram: Arc<dyn NotificationProvider> = Arc::new(telegram);
        Ok(Self::new(vec![telegram]))
    }

    /// Registered schemes, sorted
    pub fn schemes(&self) -> Vec<&'static str> {
        let mut schemes: Vec<&'static str> = self.providers.keys().copied().collect();
        schemes.sort_unstable();
        schemes
    }

    /// Looks up the provider responsible for `url`
    ///
    /// # Errors
    /// - `InvalidUrl` if the URL has no `<scheme>://` prefix
    /// - `UnknownService` if no provider handles the scheme
    pub fn provider_for(&self, url: &str) -> NotifyResult<Arc<dyn NotificationProvider>> {
        let parsed = ServiceUrl::parse(url)?;

        self.providers
            .get(parsed.scheme())
            .cloned()
            .ok_or_else(|| NotifyError::UnknownService {
                scheme: parsed.scheme().to_string(),
            })
    }

    /// Checks that `url` is valid for its provider without sending anything
    pub fn verify(&self, url: &str) -> NotifyResult<()> {
        self.provider_for(url)?.verify(url)
    }

    /// Sends `message` through the provider selected by `url`
    pub async fn send(&self, url: &str, message: &str) -> NotifyResult<()> {
        let provider = self.provider_for(url)?;

        tracing::debug!(service = provider.name(), "Dispatching notification");

        provider.send(url, message).await
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        let telegram: Arc<dyn NotificationProvider> = Arc::new(TelegramProvider::new());
        Self::new(vec![telegram])
    }
}
