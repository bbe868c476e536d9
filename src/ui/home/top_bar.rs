// SPDX-License-Identifier: MPL-2.0
//! App title with the search and messages shortcuts.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text, tooltip, Row, Space, Svg, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Search,
    Messages,
}

/// Both shortcuts are placeholders.
pub fn update(message: Message) {
    tracing::debug!(?message, "top bar shortcut not wired");
}

pub fn view<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("app-name"))
        .size(typography::TITLE_LG)
        .font(styles::BOLD)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).brand),
        });

    let row = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(shortcut(icons::search(), i18n.tr("top-bar-search"), Message::Search))
        .push(shortcut(
            icons::chat_bubble(),
            i18n.tr("top-bar-messages"),
            Message::Messages,
        ));

    container(row)
        .width(Length::Fill)
        .style(styles::container::surface)
        .into()
}

fn shortcut<'a>(icon: Svg<'a>, label: String, message: Message) -> Element<'a, Message> {
    let glyph = icons::sized(icon, sizing::ICON_MD).style(|theme: &Theme, _status| {
        iced::widget::svg::Style {
            color: Some(ColorScheme::for_theme(theme).text_primary),
        }
    });

    tooltip(
        button(glyph)
            .on_press(message)
            .padding(spacing::XS)
            .style(styles::button::icon_circle),
        Text::new(label).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_bar_view_renders() {
        let i18n = I18n::default();
        let _element = view(&i18n);
    }
}
