// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Cards, bars and the composer.
pub fn surface(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.surface)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Gray area between cards.
pub fn feed_background(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.background)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Thin separator line.
pub fn divider(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::for_theme(theme).divider)),
        ..Default::default()
    }
}

/// Rounded story card frame.
pub fn story_card(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.button)),
        border: Border {
            color: scheme.divider,
            width: 1.0,
            radius: radius::LG.into(),
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Translucent band behind the friend name on a story card.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SCRIM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Brand ring around a friend avatar on a story card.
pub fn story_ring(theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: ColorScheme::for_theme(theme).brand,
            width: 3.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// "+" badge on the create-a-story card.
pub fn badge(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.brand)),
        text_color: Some(scheme.on_brand),
        border: Border {
            color: scheme.surface,
            width: 3.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Round gray disc shown in place of an image that is not available yet.
pub fn placeholder(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.button)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Rounded input field background in the composer.
pub fn input_pill(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        border: Border {
            color: scheme.divider,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}
