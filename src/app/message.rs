// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::Config;
use crate::feed::SessionOutcome;
use crate::ui::home;
use crate::ui::notifications;
use crate::ui::remote_image;
use crate::ui::sign_in;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    SignIn(sign_in::Message),
    /// The session collaborator resolved.
    SessionLoaded(SessionOutcome),
    Image(remote_image::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic refresh of the reference time used by time labels.
    Tick(Instant),
    /// Spinner and toast timers, only while something is animating.
    Animate(Instant),
}

/// Runtime flags passed from the launcher into the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Start with an unauthenticated session regardless of `settings.toml`.
    pub signed_out: bool,
    /// Configuration loaded by the launcher.
    pub config: Config,
    /// Fluent keys of warnings raised while starting up.
    pub warnings: Vec<String>,
}
