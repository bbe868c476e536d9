// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` keeps the visible toasts, newest first, and dismisses them
//! when their timer runs out or the user closes them.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` on top. The oldest toast is dropped once more
    /// than `MAX_VISIBLE` are showing.
    pub fn push(&mut self, notification: Notification) {
        tracing::warn!(key = notification.message_key(), "user notification");
        self.visible.push_front(notification);
        if self.visible.len() > MAX_VISIBLE {
            if let Some(dropped) = self.visible.pop_back() {
                tracing::debug!(key = dropped.message_key(), "dropping oldest notification");
            }
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.visible.iter().position(|n| n.id() == id) {
            Some(pos) => {
                self.visible.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Dismisses any notification whose timer has expired.
    pub fn tick(&mut self) {
        self.visible.retain(|n| !n.should_auto_dismiss());
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }
}
