// SPDX-License-Identifier: MPL-2.0
//! Status-update composer.
//!
//! The input keeps its own copy of the draft and forwards every edit to the
//! [`FeedStore`]. Committing, by pressing Enter or the send button, submits
//! the store draft and then empties the input.

use crate::feed::FeedStore;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::remote_image::ImageCache;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::{DateTime, Utc};
use iced::widget::{button, column, container, svg, text_input, Row, Space, Svg, Text};
use iced::{alignment::Vertical, Color, Element, Length, Theme};

const LIVE_TINT: Color = Color::from_rgb(0.95, 0.25, 0.36);
const PHOTO_TINT: Color = Color::from_rgb(0.27, 0.74, 0.38);
const DISCUSS_TINT: Color = Color::from_rgb(0.56, 0.33, 0.85);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    draft: String,
}

impl State {
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    DraftChanged(String),
    Submit,
    Live,
    Photo,
    Discuss,
}

/// Returns `true` when a post was published.
pub fn update(
    state: &mut State,
    message: Message,
    store: &mut FeedStore,
    now: DateTime<Utc>,
) -> bool {
    match message {
        Message::DraftChanged(text) => {
            store.update_draft(text.clone());
            state.draft = text;
            false
        }
        Message::Submit => {
            let published = store.submit(now);
            if !published {
                store.update_draft(String::new());
            }
            state.draft.clear();
            published
        }
        Message::Live | Message::Photo | Message::Discuss => {
            tracing::debug!(?message, "composer action not wired");
            false
        }
    }
}

pub fn view<'a>(
    state: &State,
    avatar_url: &str,
    images: &ImageCache,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let input = container(
        text_input(&i18n.tr("status-placeholder"), &state.draft)
            .on_input(Message::DraftChanged)
            .on_submit(Message::Submit)
            .size(typography::BODY_LG)
            .padding([spacing::XS, spacing::MD])
            .style(input_style),
    )
    .width(Length::Fill)
    .style(styles::container::input_pill);

    let can_send = !state.draft.trim().is_empty();
    let send = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::send(), sizing::ICON_SM).style(
                |theme: &Theme, _status| svg::Style {
                    color: Some(ColorScheme::for_theme(theme).on_brand),
                },
            ))
            .push(Text::new(i18n.tr("status-send")).size(typography::BODY)),
    )
    .on_press_maybe(can_send.then_some(Message::Submit))
    .padding([spacing::XS, spacing::SM])
    .style(styles::button_primary);

    let composer = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(images.avatar::<Message>(avatar_url, sizing::AVATAR))
        .push(input)
        .push(send);

    let actions = Row::new()
        .height(Length::Fixed(sizing::ACTION_ROW_HEIGHT))
        .align_y(Vertical::Center)
        .push(action(
            icons::tinted(icons::video_call(), sizing::ICON_MD, LIVE_TINT),
            i18n.tr("action-live"),
            Message::Live,
        ))
        .push(separator())
        .push(action(
            icons::tinted(icons::photo_album(), sizing::ICON_MD, PHOTO_TINT),
            i18n.tr("action-photo"),
            Message::Photo,
        ))
        .push(separator())
        .push(action(
            icons::tinted(icons::forum(), sizing::ICON_MD, DISCUSS_TINT),
            i18n.tr("action-discuss"),
            Message::Discuss,
        ));

    container(column![composer, horizontal_divider(), actions])
        .width(Length::Fill)
        .style(styles::container::surface)
        .into()
}

/// Flat action with a colored glyph.
pub(super) fn action<'a, M: Clone + 'a>(
    glyph: Svg<'a>,
    label: String,
    message: M,
) -> Element<'a, M> {
    button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(glyph)
            .push(Text::new(label).size(typography::BODY)),
    )
    .on_press(message)
    .width(Length::Fill)
    .padding(spacing::XS)
    .style(styles::button::flat)
    .into()
}

pub(super) fn horizontal_divider<'a, M: 'a>() -> Element<'a, M> {
    container(Space::new().width(Length::Fill).height(1.0))
        .style(styles::container::divider)
        .into()
}

fn separator<'a, M: 'a>() -> Element<'a, M> {
    container(Space::new().width(1.0).height(Length::Fixed(spacing::LG)))
        .style(styles::container::divider)
        .into()
}

fn input_style(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let scheme = ColorScheme::for_theme(theme);
    let base = text_input::default(theme, status);

    text_input::Style {
        background: Color::TRANSPARENT.into(),
        border: iced::Border::default(),
        placeholder: scheme.text_secondary,
        value: scheme.text_primary,
        ..base
    }
}
