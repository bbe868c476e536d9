// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are 24×24 Material glyphs stored as SVG path data. Each icon
//! function builds its handle once and caches it in a `OnceLock`; the
//! glyph is tinted at render time so one handle serves light and dark
//! themes.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let search = icons::tinted(icons::search(), sizing::ICON_MD, scheme.text_primary);
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the glyph, not the action
//! context (e.g., `thumb_up` not `like_post`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Wraps a path in a 24×24 SVG document.
fn svg_document(path: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="black" d="{path}"/></svg>"#
    )
}

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle =
                HANDLE.get_or_init(|| Handle::from_memory(svg_document($path).into_bytes()));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Top Bar
// =============================================================================

define_icon!(
    search,
    "M15.5 14h-.79l-.28-.27C15.41 12.59 16 11.11 16 9.5 16 5.91 13.09 3 9.5 3S3 5.91 3 9.5 5.91 16 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0C7.01 14 5 11.99 5 9.5S7.01 5 9.5 5 14 7.01 14 9.5 11.99 14 9.5 14z",
    "Search icon: magnifying glass."
);
define_icon!(
    chat_bubble,
    "M20 2H4c-1.1 0-2 .9-2 2v18l4-4h14c1.1 0 2-.9 2-2V4c0-1.1-.9-2-2-2z",
    "Chat bubble icon: speech balloon."
);

// =============================================================================
// Tabs
// =============================================================================

define_icon!(
    home,
    "M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z",
    "Home icon: house."
);
define_icon!(
    tv,
    "M21 3H3c-1.1 0-2 .9-2 2v12c0 1.1.9 2 2 2h5v2h8v-2h5c1.1 0 1.99-.9 1.99-2L23 5c0-1.1-.9-2-2-2zm0 14H3V5h18v12z",
    "TV icon: screen on a stand."
);
define_icon!(
    store,
    "M20 4H4v2h16V4zm1 10v-2l-1-5H4l-1 5v2h1v6h10v-6h4v6h2v-6h1zm-9 4H6v-4h6v4z",
    "Store icon: shop front."
);
define_icon!(
    newspaper,
    "M22 3l-1.67 1.67L18.67 3 17 4.67 15.33 3l-1.66 1.67L12 3l-1.67 1.67L8.67 3 7 4.67 5.33 3 3.67 4.67 2 3v16c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V3zM11 19H4v-6h7v6zm9 0h-7v-2h7v2zm0-4h-7v-2h7v2zm0-4H4V8h16v3z",
    "Newspaper icon: folded page with columns."
);
define_icon!(
    bell,
    "M12 22c1.1 0 2-.9 2-2h-4c0 1.1.89 2 2 2zm6-6v-5c0-3.07-1.64-5.64-4.5-6.32V4c0-.83-.67-1.5-1.5-1.5s-1.5.67-1.5 1.5v.68C7.63 5.36 6 7.92 6 11v5l-2 2v1h16v-1l-2-2z",
    "Bell icon."
);
define_icon!(
    menu,
    "M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z",
    "Menu icon: three horizontal lines."
);

// =============================================================================
// Composer
// =============================================================================

define_icon!(
    video_call,
    "M17 10.5V7c0-.55-.45-1-1-1H4c-.55 0-1 .45-1 1v10c0 .55.45 1 1 1h12c.55 0 1-.45 1-1v-3.5l4 4v-11l-4 4zM14 13h-3v3H9v-3H6v-2h3V8h2v3h3v2z",
    "Video camera icon with a plus sign."
);
define_icon!(
    photo_album,
    "M18 2H6c-1.1 0-2 .9-2 2v16c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V4c0-1.1-.9-2-2-2zM6 4h5v8l-2.5-1.5L6 12V4zm0 15l3-3.86 2.14 2.58 3-3.86L18 19H6z",
    "Photo album icon."
);
define_icon!(
    forum,
    "M21 6h-2v9H6v2c0 .55.45 1 1 1h11l4 4V7c0-.55-.45-1-1-1zm-4 6V3c0-.55-.45-1-1-1H3c-.55 0-1 .45-1 1v14l4-4h10c.55 0 1-.45 1-1z",
    "Forum icon: two overlapping speech balloons."
);
define_icon!(
    send,
    "M2.01 21L23 12 2.01 3 2 10l15 2-15 2z",
    "Send icon: paper plane."
);

// =============================================================================
// Stories and Posts
// =============================================================================

define_icon!(add, "M19 13h-6v6h-2v-6H5v-2h6V5h2v6h6v2z", "Plus sign.");
define_icon!(
    more_horiz,
    "M6 10c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2zm12 0c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2zm-6 0c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2z",
    "Three horizontal dots."
);
define_icon!(
    thumb_up,
    "M1 21h4V9H1v12zm22-11c0-1.1-.9-2-2-2h-6.31l.95-4.57.03-.32c0-.41-.17-.79-.44-1.06L14.17 1 7.59 7.59C7.22 7.95 7 8.45 7 9v10c0 1.1.9 2 2 2h9c.83 0 1.54-.5 1.84-1.22l3.02-7.05c.09-.23.14-.47.14-.73v-2z",
    "Thumb up icon."
);
define_icon!(
    comment,
    "M21.99 4c0-1.1-.89-2-1.99-2H4c-1.1 0-2 .9-2 2v12c0 1.1.9 2 2 2h14l4 4-.01-18zM18 14H6v-2h12v2zm0-3H6V9h12v2zm0-3H6V6h12v2z",
    "Comment icon: speech balloon with lines."
);
define_icon!(
    share,
    "M18 16.08c-.76 0-1.44.3-1.96.77L8.91 12.7c.05-.23.09-.46.09-.7s-.04-.47-.09-.7l7.05-4.11c.54.5 1.25.81 2.04.81 1.66 0 3-1.34 3-3s-1.34-3-3-3-3 1.34-3 3c0 .24.04.47.09.7L8.04 9.81C7.5 9.31 6.79 9 6 9c-1.66 0-3 1.34-3 3s1.34 3 3 3c.79 0 1.5-.31 2.04-.81l7.12 4.16c-.05.21-.08.43-.08.65 0 1.61 1.31 2.92 2.92 2.92 1.61 0 2.92-1.31 2.92-2.92s-1.31-2.92-2.92-2.92z",
    "Share icon: three connected nodes."
);

// =============================================================================
// Placeholders and Feedback
// =============================================================================

define_icon!(
    person,
    "M12 12c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm0 2c-2.67 0-8 1.34-8 4v2h16v-2c0-2.66-5.33-4-8-4z",
    "Person silhouette, shown while an avatar loads."
);

define_icon!(
    close,
    "M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z",
    "Close icon: diagonal cross."
);
define_icon!(
    warning,
    "M1 21h22L12 2 1 21zm12-3h-2v-2h2v2zm0-4h-2v-4h2v4z",
    "Warning icon: triangle with exclamation mark."
);

// =============================================================================
// Helpers
// =============================================================================

/// Sizes an icon to a square of `size` pixels.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Sizes an icon and tints it with `color`.
pub fn tinted<'a>(icon: Svg<'a>, size: f32, color: Color) -> Svg<'a> {
    sized(icon, size).style(move |_theme, _status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_document_embeds_path() {
        let doc = svg_document("M0 0h24v24H0z");
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains(r#"d="M0 0h24v24H0z""#));
        assert!(doc.contains(r#"viewBox="0 0 24 24""#));
    }
}
