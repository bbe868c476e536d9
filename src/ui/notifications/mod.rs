// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Warnings (for example an unreadable `settings.toml`) appear as toasts in
//! the bottom-right corner and disappear on their own.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = notifications::Manager::new();
//! manager.push(notifications::Notification::warning("notification-config-load-error"));
//!
//! let toast_overlay =
//!     notifications::Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId};
pub use toast::Toast;
