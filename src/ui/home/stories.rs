// SPDX-License-Identifier: MPL-2.0
//! Horizontally scrolling stories row: the "create a story" card followed
//! by the friends' stories in their fixed order.

use crate::feed::FriendStory;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::remote_image::ImageCache;
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, column, container, scrollable, stack, svg, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Create,
    Open(usize),
}

pub fn update(message: Message) {
    tracing::debug!(?message, "story viewer not wired");
}

pub fn view<'a>(
    user_avatar_url: &str,
    stories: &'a [FriendStory],
    images: &ImageCache,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::SM, spacing::MD])
        .push(create_card(user_avatar_url, images, i18n));

    for (index, story) in stories.iter().enumerate() {
        row = row.push(friend_card(index, story, images));
    }

    container(
        scrollable(row).direction(Direction::Horizontal(
            Scrollbar::new().width(0.0).scroller_width(0.0),
        )),
    )
    .width(Length::Fill)
    .style(styles::container::surface)
    .into()
}

fn create_card<'a>(
    avatar_url: &str,
    images: &ImageCache,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let photo_height = sizing::STORY_CARD_HEIGHT - sizing::STORY_CREATE_FOOTER;

    let badge = container(
        icons::sized(icons::add(), sizing::ICON_MD).style(|_theme: &Theme, _status| {
            svg::Style {
                color: Some(palette::WHITE),
            }
        }),
    )
    .center_x(Length::Fixed(sizing::STORY_BADGE))
    .center_y(Length::Fixed(sizing::STORY_BADGE))
    .style(styles::container::badge);

    let label = Text::new(i18n.tr("story-create"))
        .size(typography::BODY)
        .font(styles::BOLD);

    let footer = column![
        container(badge).center_x(Length::Fill),
        container(label).center_x(Length::Fill),
    ]
    .spacing(spacing::XXS)
    .padding([spacing::XXS, 0.0]);

    card_button(
        column![
            images.view::<Message>(avatar_url, sizing::STORY_CARD_WIDTH, photo_height),
            container(footer)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::STORY_CREATE_FOOTER))
                .style(styles::container::surface),
        ]
        .into(),
        Message::Create,
    )
}

fn friend_card<'a>(
    index: usize,
    story: &'a FriendStory,
    images: &ImageCache,
) -> Element<'a, Message> {
    let ring = container(images.avatar::<Message>(story.avatar_url, sizing::STORY_AVATAR))
        .padding(3.0)
        .style(styles::container::story_ring);

    let name = container(
        Text::new(story.friend_name)
            .size(typography::BODY)
            .font(styles::BOLD),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::STORY_SCRIM_HEIGHT))
    .padding(spacing::XS)
    .align_y(alignment::Vertical::Bottom)
    .style(styles::container::scrim);

    let overlay = column![
        container(ring).padding(spacing::XS),
        Space::new().height(Length::Fill),
        name,
    ]
    .width(Length::Fixed(sizing::STORY_CARD_WIDTH))
    .height(Length::Fixed(sizing::STORY_CARD_HEIGHT));

    card_button(
        stack![
            images.view::<Message>(
                story.background_url,
                sizing::STORY_CARD_WIDTH,
                sizing::STORY_CARD_HEIGHT
            ),
            overlay,
        ]
        .into(),
        Message::Open(index),
    )
}

fn card_button<'a>(content: Element<'a, Message>, message: Message) -> Element<'a, Message> {
    button(
        container(content)
            .width(Length::Fixed(sizing::STORY_CARD_WIDTH))
            .height(Length::Fixed(sizing::STORY_CARD_HEIGHT))
            .clip(true)
            .style(styles::container::story_card),
    )
    .on_press(message)
    .padding(0.0)
    .style(|_theme: &Theme, _status| button::Style::default())
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::sample;

    #[test]
    fn stories_view_renders() {
        let i18n = I18n::default();
        let images = ImageCache::new();
        let _element = view("https://a.test/me.png", sample::friend_stories(), &images, &i18n);
    }

    #[test]
    fn stories_view_renders_without_friends() {
        let i18n = I18n::default();
        let images = ImageCache::new();
        let _element = view("", &[], &images, &i18n);
    }
}
