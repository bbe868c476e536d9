// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Cards, bars and the composer.
    pub surface: Color,
    /// Area between cards.
    pub background: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand: Color,
    pub on_brand: Color,

    /// Round icon button background.
    pub button: Color,
    pub divider: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            background: palette::FEED_BACKGROUND,

            text_primary: palette::GRAY_900,
            text_secondary: Color {
                a: opacity::SECONDARY_TEXT,
                ..palette::GRAY_900
            },

            brand: palette::BRAND_500,
            on_brand: palette::WHITE,

            button: palette::BUTTON_GRAY,
            divider: Color {
                a: opacity::DIVIDER,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_800,
            background: palette::GRAY_900,

            text_primary: palette::WHITE,
            text_secondary: Color {
                a: opacity::SECONDARY_TEXT,
                ..palette::WHITE
            },

            brand: palette::BRAND_400,
            on_brand: palette::WHITE,

            button: palette::GRAY_700,
            divider: Color {
                a: opacity::DIVIDER,
                ..palette::WHITE
            },
        }
    }

    /// Scheme matching the active Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if matches!(theme, Theme::Light) {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Light is the feed's native look; fall back to it on detection error
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Iced theme for this mode, resolving `System` once.
    #[must_use]
    pub fn resolve(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface.r < 0.2);
    }

    #[test]
    fn both_themes_use_blue_brand() {
        assert!(ColorScheme::light().brand.b > ColorScheme::light().brand.r);
        assert!(ColorScheme::dark().brand.b > ColorScheme::dark().brand.r);
    }

    #[test]
    fn explicit_modes_resolve_directly() {
        assert_eq!(ThemeMode::Light.resolve(), Theme::Light);
        assert_eq!(ThemeMode::Dark.resolve(), Theme::Dark);
        // System mode depends on the desktop, so only check it doesn't panic
        let _ = ThemeMode::System.resolve();
    }

    #[test]
    fn for_theme_picks_matching_scheme() {
        assert!(ColorScheme::for_theme(&Theme::Light).surface.r > 0.9);
        assert!(ColorScheme::for_theme(&Theme::Dark).surface.r < 0.2);
    }
}
