//! shout-rs Library
//!
//! Send notifications described by service URLs such as
//! `telegram://<bot-token>/<chat-id>`.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod models;
pub mod services;

pub use error::{NotifyError, NotifyResult};
pub use models::{TelegramConfig, TelegramOptions};
pub use services::NotificationService;
pub use services::notifications::{NotificationProvider, TelegramProvider};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
