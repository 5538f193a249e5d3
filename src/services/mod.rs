//! Service layer.
//!
//! Services encapsulate the notification logic used by the CLI and by
//! library callers.

pub mod notifications;

pub use notifications::NotificationService;
