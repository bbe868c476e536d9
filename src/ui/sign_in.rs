// SPDX-License-Identifier: MPL-2.0
//! Sign-in screen shown when the session is not authenticated.
//!
//! There is no credential form; the button stands in for a successful
//! sign-in and hands control back to the home screen.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, column, container, svg, text, Text};
use iced::{alignment::Horizontal, Element, Length, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SignIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Authenticated,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::SignIn => Event::Authenticated,
    }
}

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let glyph = icons::sized(icons::person(), sizing::ICON_XL * 1.5).style(
        |theme: &Theme, _status| svg::Style {
            color: Some(ColorScheme::for_theme(theme).brand),
        },
    );

    let content = column![
        glyph,
        Text::new(i18n.tr("sign-in-title"))
            .size(typography::TITLE_MD)
            .font(styles::BOLD),
        Text::new(i18n.tr("sign-in-subtitle"))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(ColorScheme::for_theme(theme).text_secondary),
            }),
        button(Text::new(i18n.tr("sign-in-button")).size(typography::BODY_LG))
            .on_press(Message::SignIn)
            .padding([spacing::XS, spacing::LG])
            .style(styles::button_primary),
    ]
    .spacing(spacing::MD)
    .align_x(Horizontal::Center);

    container(content)
        .center(Length::Fill)
        .style(styles::container::surface)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_reports_authentication() {
        assert_eq!(update(Message::SignIn), Event::Authenticated);
    }

    #[test]
    fn sign_in_view_renders() {
        let i18n = I18n::default();
        let _element = view(&i18n);
    }
}
