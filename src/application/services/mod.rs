//! Application services.

mod notification_manager;

pub use notification_manager::NotificationManager;
