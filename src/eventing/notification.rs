//! Notification events consumed by the host toast subsystem.

use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationSeverity {
    /// Informational message (auto-dismiss)
    Info,
    /// Warning message (persist until dismissed)
    Warning,
    /// Error message (persist until dismissed)
    Error,
}

/// A user-facing notification emitted by the component
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    /// Identifier the host uses to dismiss or deduplicate toasts
    pub id: Uuid,
    /// Display severity
    pub severity: NotificationSeverity,
    /// Already-localized message text
    pub message: String,
    /// When the notification was emitted
    pub timestamp: DateTime<Local>,
}

impl Notification {
    /// Create a notification with the current timestamp
    pub fn new(severity: NotificationSeverity, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            severity,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Informational notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationSeverity::Info, message)
    }

    /// Warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationSeverity::Warning, message)
    }

    /// Error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationSeverity::Error, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_severity() {
        assert_eq!(Notification::info("a").severity, NotificationSeverity::Info);
        assert_eq!(
            Notification::warning("b").severity,
            NotificationSeverity::Warning
        );
        assert_eq!(Notification::error("c").severity, NotificationSeverity::Error);
    }

    #[test]
    fn notifications_get_distinct_ids() {
        let first = Notification::info("same text");
        let second = Notification::info("same text");
        assert_ne!(first.id, second.id);
    }
}
