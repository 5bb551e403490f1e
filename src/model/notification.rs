//! Status notifications
//!
//! Every settings and font operation reports its outcome as a [`Notification`];
//! the UI shows it as a transient banner.

use std::fmt;
use std::time::{Duration, Instant};

/// How long a notification stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Operation completed
    Success,
    /// Nothing changed, for the user's information
    Info,
    /// Operation failed or partially failed
    Warning,
}

/// A status message produced by an operation
#[derive(Debug, Clone)]
pub struct Notification {
    /// The message to display
    pub message: String,
    /// Kind of notification
    pub kind: NotificationKind,
    /// When the notification was created
    pub created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }

    /// Check if the notification has outlived [`NOTIFICATION_TTL`]
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= NOTIFICATION_TTL
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(Notification::success("a").kind, NotificationKind::Success);
        assert_eq!(Notification::info("b").kind, NotificationKind::Info);
        assert_eq!(Notification::warning("c").kind, NotificationKind::Warning);
    }

    #[test]
    fn test_is_success() {
        assert!(Notification::success("Font successfully added: Inter").is_success());
        assert!(!Notification::warning("Invalid ZIP file").is_success());
    }

    #[test]
    fn test_not_expired_immediately() {
        assert!(!Notification::info("No fonts to delete.").is_expired());
    }

    #[test]
    fn test_display_is_message() {
        let n = Notification::warning(String::from("Font directory not found."));
        assert_eq!(n.to_string(), "Font directory not found.");
    }
}
