// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application shell.

use super::{Message, Navigator, Screen};
use crate::feed::{Author, SessionOutcome, SessionSource};
use crate::ui::home::{self, HomeScreen};
use crate::ui::notifications;
use crate::ui::remote_image::ImageCache;
use crate::ui::sign_in;
use crate::ui::widgets::animated_spinner;
use chrono::{DateTime, Utc};
use iced::Task;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub navigator: &'a mut Navigator,
    pub home: &'a mut Option<HomeScreen>,
    pub author: &'a Author,
    pub session: &'a mut Box<dyn SessionSource>,
    pub images: &'a mut ImageCache,
    pub notifications: &'a mut notifications::Manager,
    pub now: &'a mut DateTime<Utc>,
    pub spinner_rotation: &'a mut f32,
}

/// Mounts a fresh home screen and starts the session load.
pub fn mount_home(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mut screen = HomeScreen::new(ctx.author.clone());
    screen.subscribe(|state| {
        tracing::info!(
            state = state.kind(),
            posts = state.posts().len(),
            "feed state changed"
        );
    });

    let images = ctx.images.request(screen.image_urls()).map(Message::Image);
    *ctx.home = Some(screen);
    *ctx.spinner_rotation = 0.0;
    ctx.navigator.replace(Screen::Home);

    tracing::debug!("loading session");
    let load = Task::perform(ctx.session.load(), Message::SessionLoaded);

    Task::batch([load, images])
}

pub fn handle_session_loaded(
    ctx: &mut UpdateContext<'_>,
    outcome: SessionOutcome,
) -> Task<Message> {
    let Some(screen) = ctx.home.as_mut() else {
        tracing::debug!("session resolved after home was unmounted");
        return Task::none();
    };

    *ctx.now = Utc::now();
    match screen.seed(outcome) {
        home::Event::SignInRequired => {
            *ctx.home = None;
            ctx.navigator.replace(Screen::SignIn);
            Task::none()
        }
        home::Event::None | home::Event::Published => {
            ctx.images.request(screen.image_urls()).map(Message::Image)
        }
    }
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    let Some(screen) = ctx.home.as_mut() else {
        return Task::none();
    };

    let now = Utc::now();
    match screen.update(message, now) {
        home::Event::Published => {
            // Labels are measured against the publication instant.
            *ctx.now = now;
            tracing::info!("status update published");
            Task::none()
        }
        home::Event::SignInRequired => {
            *ctx.home = None;
            ctx.navigator.replace(Screen::SignIn);
            Task::none()
        }
        home::Event::None => Task::none(),
    }
}

pub fn handle_sign_in_message(
    ctx: &mut UpdateContext<'_>,
    message: sign_in::Message,
) -> Task<Message> {
    match sign_in::update(message) {
        sign_in::Event::Authenticated => {
            ctx.session.mark_authenticated();
            mount_home(ctx)
        }
    }
}

pub fn handle_animation_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx
        .home
        .as_ref()
        .is_some_and(|screen| screen.state().is_loading())
    {
        *ctx.spinner_rotation = animated_spinner::advance(*ctx.spinner_rotation);
    }
    ctx.notifications.tick();
    Task::none()
}
