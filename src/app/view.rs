// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the mounted screen with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::home::{self, HomeScreen};
use crate::ui::notifications::{self, Toast};
use crate::ui::remote_image::ImageCache;
use crate::ui::sign_in;
use crate::ui::theming::ColorScheme;
use chrono::{DateTime, Utc};
use iced::widget::{stack, Container, Space};
use iced::{Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub home: Option<&'a HomeScreen>,
    pub images: &'a ImageCache,
    pub notifications: &'a notifications::Manager,
    pub theme: &'a Theme,
    pub now: DateTime<Utc>,
    pub spinner_rotation: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match (ctx.screen, ctx.home) {
        (Screen::Home, Some(screen)) => screen
            .view(home::ViewContext {
                i18n: ctx.i18n,
                images: ctx.images,
                scheme: ColorScheme::for_theme(ctx.theme),
                now: ctx.now,
                spinner_rotation: ctx.spinner_rotation,
            })
            .map(Message::Home),
        (Screen::SignIn, _) => sign_in::view(ctx.i18n).map(Message::SignIn),
        // Navigation always mounts the home screen before showing it.
        (Screen::Home, None) => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Container::new(stack![current_view, toasts])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
