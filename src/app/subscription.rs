// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions.

use super::Message;
use crate::config::TIME_LABEL_REFRESH_SECS;
use iced::{time, Subscription};
use std::time::Duration;

/// Frame interval for the spinner and toast timers.
const ANIMATION_INTERVAL: Duration = Duration::from_millis(33);

/// Keeps relative time labels current.
pub fn create_clock_subscription() -> Subscription<Message> {
    time::every(Duration::from_secs(TIME_LABEL_REFRESH_SECS)).map(Message::Tick)
}

/// Runs only while the feed is loading or a toast is visible.
pub fn create_animation_subscription(
    is_loading: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(ANIMATION_INTERVAL).map(Message::Animate)
    } else {
        Subscription::none()
    }
}
