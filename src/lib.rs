// SPDX-License-Identifier: MPL-2.0
//! `iced_feed` is a social feed home screen built with the Iced GUI framework.
//!
//! It renders a top bar, section tabs, a status-update composer, a stories
//! row and a feed of posts with relative time labels. A single state holder
//! drives the screen from `Loading` to `Loaded` or `SignInRequired`, and a
//! small navigation shell swaps between the home and sign-in screens.

pub mod app;
pub mod config;
pub mod error;
pub mod feed;
pub mod i18n;
pub mod ui;
