// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens.

## Organization

- **Palette**: Base colors, including the feed brand blue
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes (avatars, story cards, action rows)
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use iced_feed::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::SCRIM,
    ..palette::BLACK
};

let padding = spacing::XS; // 8px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.14, 0.145, 0.15);
    pub const GRAY_700: Color = Color::from_rgb(0.23, 0.23, 0.24);
    pub const GRAY_500: Color = Color::from_rgb(0.396, 0.404, 0.42);
    pub const GRAY_300: Color = Color::from_rgb(0.8, 0.81, 0.82);
    /// Round icon button background.
    pub const BUTTON_GRAY: Color = Color::from_rgb(0.894, 0.902, 0.922);
    /// Feed background behind the cards.
    pub const FEED_BACKGROUND: Color = Color::from_rgb(0.941, 0.949, 0.961);

    // Brand
    pub const BRAND_500: Color = Color::from_rgb(0.094, 0.467, 0.949);
    pub const BRAND_400: Color = Color::from_rgb(0.259, 0.569, 0.973);
    pub const BRAND_600: Color = Color::from_rgb(0.059, 0.376, 0.82);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Bottom gradient of story cards.
    pub const SCRIM: f32 = 0.25;
    pub const DIVIDER: f32 = 0.12;
    /// Unselected tab icons.
    pub const INACTIVE: f32 = 0.44;
    /// Secondary text such as time labels.
    pub const SECONDARY_TEXT: f32 = 0.66;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 40.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    /// Composer and post header avatars.
    pub const AVATAR: f32 = 40.0;
    /// Friend avatar overlaid on a story card.
    pub const STORY_AVATAR: f32 = 36.0;
    /// "+" badge on the create-a-story card.
    pub const STORY_BADGE: f32 = 36.0;

    pub const STORY_CARD_WIDTH: f32 = 140.0;
    pub const STORY_CARD_HEIGHT: f32 = 220.0;
    /// Height of the label area at the bottom of the create-a-story card.
    pub const STORY_CREATE_FOOTER: f32 = 76.0;
    pub const STORY_SCRIM_HEIGHT: f32 = 56.0;

    /// Live/photo/discuss and like/comment/share rows.
    pub const ACTION_ROW_HEIGHT: f32 = 48.0;
    pub const TAB_HEIGHT: f32 = 48.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    /// Maximum width of the feed column on wide windows.
    pub const FEED_MAX_WIDTH: f32 = 680.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App name in the top bar.
    pub const TITLE_LG: f32 = 26.0;
    /// Sign-in heading.
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Time labels.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Circle/pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::INACTIVE < opacity::SECONDARY_TEXT);

    assert!(sizing::STORY_CARD_HEIGHT > sizing::STORY_CARD_WIDTH);
    assert!(sizing::STORY_CREATE_FOOTER < sizing::STORY_CARD_HEIGHT);
    assert!(sizing::AVATAR > sizing::STORY_AVATAR);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
