// SPDX-License-Identifier: MPL-2.0
//! A single feed entry: header, body and reaction row.

use super::status_bar::{action, horizontal_divider};
use crate::feed::{time_label, Post};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::remote_image::ImageCache;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::{DateTime, Utc};
use iced::widget::{button, column, container, svg, text, Row, Space, Svg, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

/// Reactions carry the index of the post in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Menu(usize),
    Like(usize),
    Comment(usize),
    Share(usize),
}

pub fn update(message: Message) {
    tracing::debug!(?message, "post reaction not wired");
}

pub fn view<'a>(
    index: usize,
    post: &'a Post,
    now: DateTime<Utc>,
    images: &ImageCache,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(images.avatar::<Message>(&post.author_avatar_url, sizing::AVATAR))
        .push(
            column![
                Text::new(post.author_name.as_str())
                    .size(typography::BODY_LG)
                    .font(styles::BOLD),
                Text::new(time_label::label(post.timestamp, now, i18n))
                    .size(typography::CAPTION)
                    .style(secondary_text),
            ]
            .spacing(2.0),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(icons::sized(icons::more_horiz(), sizing::ICON_MD).style(
                |theme: &Theme, _status| svg::Style {
                    color: Some(ColorScheme::for_theme(theme).text_secondary),
                },
            ))
            .on_press(Message::Menu(index))
            .padding(spacing::XXS)
            .style(styles::button::flat),
        );

    let body = Text::new(post.text.as_str()).size(typography::BODY_LG);

    let reactions = Row::new()
        .height(Length::Fixed(sizing::ACTION_ROW_HEIGHT))
        .align_y(Vertical::Center)
        .push(reaction(icons::thumb_up(), i18n.tr("post-like"), Message::Like(index)))
        .push(reaction(
            icons::comment(),
            i18n.tr("post-comment"),
            Message::Comment(index),
        ))
        .push(reaction(icons::share(), i18n.tr("post-share"), Message::Share(index)));

    container(
        column![
            column![header, body]
                .spacing(spacing::SM)
                .padding([spacing::SM, spacing::MD]),
            horizontal_divider(),
            reactions,
        ]
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .style(styles::container::surface)
    .into()
}

fn reaction<'a>(icon: Svg<'a>, label: String, message: Message) -> Element<'a, Message> {
    let glyph = icons::sized(icon, sizing::ICON_MD).style(|theme: &Theme, _status| svg::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    });
    action(glyph, label, message)
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}
