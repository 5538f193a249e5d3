//! Notification system with pluggable providers.
//!
//! This module provides the notification provider abstraction and its
//! implementations. The core trait `NotificationProvider` allows each
//! service URL scheme (currently `telegram://`) to bring its own parsing and
//! delivery logic, while `NotificationService` routes URLs to providers.

mod provider;
mod telegram_provider;

pub mod notification_service;

pub use notification_service::NotificationService;
pub use provider::NotificationProvider;
pub use telegram_provider::{DEFAULT_API_BASE_URL, MAX_MESSAGE_LENGTH, TelegramProvider};
