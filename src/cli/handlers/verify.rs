//! Verify command handler
//!
//! Parses a service URL and prints what would be used for delivery, with the
//! credential masked. Nothing is sent.

use crate::error::AppResult;
use crate::models::{ServiceUrl, TELEGRAM_SCHEME, TelegramConfig};
use crate::services::NotificationService;

/// Handler for the verify command
pub struct VerifyCommandHandler {
    service: NotificationService,
}

impl VerifyCommandHandler {
    /// Create a new verify command handler
    pub fn new(service: NotificationService) -> Self {
        Self { service }
    }

    /// Execute the verify command, printing a summary to stdout
    ///
    /// # Errors
    /// Returns the notification error describing why the URL is invalid
    pub fn execute(&self, url: &str) -> AppResult<()> {
        for line in self.summary(url)? {
            println!("{}", line);
        }
        Ok(())
    }

    /// Validates `url` and returns the summary lines
    pub fn summary(&self, url: &str) -> AppResult<Vec<String>> {
        self.service.verify(url)?;

        let scheme = ServiceUrl::parse(url)?.scheme().to_string();
        let mut lines = vec![format!("✓ Service URL is valid ({})", scheme)];

        if scheme == TELEGRAM_SCHEME {
            let config = TelegramConfig::from_url(url)?;
            let options = config.options();

            lines.push(format!("✓ Bot token: {}", config.redacted_token()));
            lines.push(format!(
                "✓ Channels ({}): {}",
                config.channels().len(),
                config.channels().join(", ")
            ));
            lines.push(format!(
                "✓ Options: notification={}, preview={}, parsemode={}",
                yes_no(options.notification),
                yes_no(options.preview),
                options.parse_mode.as_str()
            ));
        }

        Ok(lines)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, NotifyError};

    #[test]
    fn test_summary_masks_token() {
        let handler = VerifyCommandHandler::new(NotificationService::default());

        let lines = handler
            .summary("telegram://12345:mock-token/channel-1/@alerts?preview=no&parsemode=html")
            .unwrap();

        assert_eq!(
            lines,
            [
                "✓ Service URL is valid (telegram)",
                "✓ Bot token: 12345:***",
                "✓ Channels (2): channel-1, @alerts",
                "✓ Options: notification=yes, preview=no, parsemode=html",
            ]
        );
        assert!(lines.iter().all(|line| !line.contains("mock-token")));
    }

    #[test]
    fn test_invalid_url_is_reported() {
        let handler = VerifyCommandHandler::new(NotificationService::default());

        let result = handler.execute("telegram://12345:mock-token");
        assert!(matches!(
            result,
            Err(AppError::Notification(NotifyError::MissingChannels))
        ));
    }
}
