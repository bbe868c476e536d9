// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the feed widgets.

pub mod button;
pub mod container;

pub use button::primary as button_primary;

use iced::font::{Font, Weight};

/// Default font in bold, for names and titles.
pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};
