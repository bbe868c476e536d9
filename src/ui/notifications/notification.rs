// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use std::time::{Duration, Instant};

/// How long a warning stays on screen.
pub const WARNING_DURATION: Duration = Duration::from_secs(5);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// A warning to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    /// The i18n key for the notification message, resolved at render time.
    message_key: String,
    created_at: Instant,
    dismiss_after: Duration,
}

impl Notification {
    /// Creates a warning notification.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            message_key: message_key.into(),
            created_at: Instant::now(),
            dismiss_after: WARNING_DURATION,
        }
    }

    /// Overrides the auto-dismiss duration.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.dismiss_after = duration;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.created_at.elapsed() >= self.dismiss_after
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::warning("test");
        let n2 = Notification::warning("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn fresh_warning_is_not_dismissed() {
        assert!(!Notification::warning("test").should_auto_dismiss());
    }

    #[test]
    fn zero_duration_dismisses_immediately() {
        let n = Notification::warning("test").auto_dismiss(Duration::ZERO);
        assert!(n.should_auto_dismiss());
    }
}
