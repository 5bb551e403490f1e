//! Data models for tdiary
//!
//! UI-independent data structures shared by the settings service and views.

mod notification;

pub use notification::{NOTIFICATION_TTL, Notification, NotificationKind};
