mod app_error;
mod notify_error;

pub use app_error::{AppError, AppResult};
pub use notify_error::{NotifyError, NotifyResult};
