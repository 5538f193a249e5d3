pub mod service_url;
pub mod telegram;

pub use service_url::ServiceUrl;
pub use telegram::{ParseMode, TELEGRAM_SCHEME, TelegramConfig, TelegramOptions};
