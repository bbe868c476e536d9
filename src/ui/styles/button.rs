// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Brand-colored pill used for the send and sign-in actions.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered => palette::BRAND_400,
        button::Status::Pressed => palette::BRAND_600,
        button::Status::Disabled => Color {
            a: opacity::INACTIVE,
            ..scheme.brand
        },
        button::Status::Active => scheme.brand,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: scheme.on_brand,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Round gray button holding a single icon (top bar search/messages).
pub fn icon_circle(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => scheme.divider,
        _ => scheme.button,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: scheme.text_primary,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Borderless button for action rows (live/photo/discuss, like/comment/share)
/// and the post overflow menu.
pub fn flat(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(scheme.button.into()),
        _ => None,
    };

    button::Style {
        background,
        text_color: scheme.text_secondary,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Tab bar entry. The selected tab gets a brand underline.
pub fn tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        let background = match status {
            button::Status::Hovered if !selected => Some(scheme.button.into()),
            _ => None,
        };

        button::Style {
            background,
            text_color: if selected {
                scheme.brand
            } else {
                scheme.text_secondary
            },
            border: Border::default(),
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Icon tint for a tab, dimmed when not selected.
#[must_use]
pub fn tab_icon_color(scheme: &ColorScheme, selected: bool) -> Color {
    if selected {
        scheme.brand
    } else {
        Color {
            a: opacity::INACTIVE,
            ..scheme.text_primary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::BRAND_500))
        );
    }

    #[test]
    fn icon_circle_is_round() {
        let style = icon_circle(&Theme::Dark, button::Status::Active);
        assert!(style.background.is_some());
        assert_eq!(style.border.radius, radius::FULL.into());
    }

    #[test]
    fn flat_button_only_filled_on_hover() {
        assert!(flat(&Theme::Light, button::Status::Active).background.is_none());
        assert!(flat(&Theme::Light, button::Status::Hovered).background.is_some());
    }

    #[test]
    fn selected_tab_uses_brand_text() {
        let theme = Theme::Light;
        let selected = tab(true)(&theme, button::Status::Active);
        let unselected = tab(false)(&theme, button::Status::Active);
        assert_eq!(selected.text_color, ColorScheme::light().brand);
        assert_ne!(selected.text_color, unselected.text_color);
    }

    #[test]
    fn unselected_tab_icon_is_dimmed() {
        let scheme = ColorScheme::light();
        assert_eq!(tab_icon_color(&scheme, true), scheme.brand);
        assert!(tab_icon_color(&scheme, false).a < 1.0);
    }
}
