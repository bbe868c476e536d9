// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Profile Defaults
// ==========================================================================

/// Author name stamped on posts written from the composer.
pub const DEFAULT_DISPLAY_NAME: &str = "You";

/// Avatar of the signed-in user.
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/360?img=12";

// ==========================================================================
// Session Defaults
// ==========================================================================

/// Whether the in-process session starts authenticated.
pub const DEFAULT_SIGNED_IN: bool = true;

/// Simulated latency of the session load (in milliseconds).
pub const DEFAULT_SESSION_LATENCY_MS: u64 = 600;

/// Maximum accepted session latency (in milliseconds).
pub const MAX_SESSION_LATENCY_MS: u64 = 10_000;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Refresh Defaults
// ==========================================================================

/// Interval between relative time label refreshes (in seconds).
pub const TIME_LABEL_REFRESH_SECS: u64 = 30;
