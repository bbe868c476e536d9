// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message` type, an `update` function and a `view` function,
//! and reports what the shell must react to through an `Event`.
//!
//! # Screens
//!
//! - [`home`] - Top bar, tab bar, composer, stories row and feed
//! - [`sign_in`] - Placeholder sign-in screen
//!
//! # Shared Infrastructure
//!
//! - [`remote_image`] - URL-keyed image cache with placeholders
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes
//! - [`icons`] - SVG icon glyphs
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod home;
pub mod icons;
pub mod notifications;
pub mod remote_image;
pub mod sign_in;
pub mod styles;
pub mod theming;
pub mod widgets;
