// SPDX-License-Identifier: MPL-2.0
//! Application root state and the navigation shell.
//!
//! The `App` struct wires together the home and sign-in screens, the
//! session collaborator, the image cache and localization, and translates
//! screen events into navigation and asynchronous work.

pub mod logging;
mod message;
pub mod navigation;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use navigation::Navigator;
pub use screen::Screen;

use crate::feed::{Author, SessionSource, StaticSession};
use crate::i18n::fluent::I18n;
use crate::ui::home::HomeScreen;
use crate::ui::notifications;
use crate::ui::remote_image::ImageCache;
use chrono::{DateTime, Utc};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    navigator: Navigator,
    /// Mounted only while the navigator shows [`Screen::Home`].
    home: Option<HomeScreen>,
    author: Author,
    session: Box<dyn SessionSource>,
    images: ImageCache,
    notifications: notifications::Manager,
    theme: Theme,
    /// Reference instant for relative time labels.
    now: DateTime<Utc>,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.navigator.current())
            .field("home", &self.home.as_ref().map(|home| home.state().kind()))
            .finish()
    }
}

/// Warning shown when the CLI or `settings.toml` asks for a missing locale.
pub const UNKNOWN_LANGUAGE_WARNING: &str = "notification-unknown-language";
/// Warning shown when the launcher received arguments it does not know.
pub const UNKNOWN_ARGUMENTS_WARNING: &str = "notification-unknown-arguments";

pub const WINDOW_DEFAULT_WIDTH: f32 = 520.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the shell from launcher flags and mounts the home screen,
    /// which starts the session load.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            signed_out,
            config,
            mut warnings,
        } = flags;

        let session = StaticSession::new(
            config.session.signed_in && !signed_out,
            config.profile.avatar_url.clone(),
            config.session.latency(),
        );

        let i18n = I18n::new(lang.clone(), &config);
        let unsupported = [lang.as_deref(), config.general.language.as_deref()]
            .into_iter()
            .flatten()
            .any(|requested| !i18n.supports(requested));
        if unsupported {
            warnings.push(UNKNOWN_LANGUAGE_WARNING.to_string());
        }

        Self::with_session(
            i18n,
            config.profile.author(),
            Box::new(session),
            config.general.theme_mode.resolve(),
            warnings,
        )
    }

    /// Builds the shell around an arbitrary session collaborator.
    pub fn with_session(
        i18n: I18n,
        author: Author,
        session: Box<dyn SessionSource>,
        theme: Theme,
        warnings: Vec<String>,
    ) -> (Self, Task<Message>) {
        let mut app = App {
            i18n,
            navigator: Navigator::new(Screen::Home),
            home: None,
            author,
            session,
            images: ImageCache::new(),
            notifications: notifications::Manager::new(),
            theme,
            now: Utc::now(),
            spinner_rotation: 0.0,
        };

        for key in warnings {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = update::mount_home(&mut app.update_context());
        (app, task)
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn home(&self) -> Option<&HomeScreen> {
        self.home.as_ref()
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let is_loading = self
            .home
            .as_ref()
            .is_some_and(|home| home.state().is_loading());

        Subscription::batch([
            subscription::create_clock_subscription(),
            subscription::create_animation_subscription(
                is_loading,
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            navigator: &mut self.navigator,
            home: &mut self.home,
            author: &self.author,
            session: &mut self.session,
            images: &mut self.images,
            notifications: &mut self.notifications,
            now: &mut self.now,
            spinner_rotation: &mut self.spinner_rotation,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Home(message) => update::handle_home_message(&mut ctx, message),
            Message::SignIn(message) => update::handle_sign_in_message(&mut ctx, message),
            Message::SessionLoaded(outcome) => update::handle_session_loaded(&mut ctx, outcome),
            Message::Image(message) => {
                ctx.images.update(message);
                Task::none()
            }
            Message::Notification(message) => {
                ctx.notifications.handle_message(message);
                Task::none()
            }
            Message::Tick(_) => {
                *ctx.now = Utc::now();
                Task::none()
            }
            Message::Animate(_) => update::handle_animation_tick(&mut ctx),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.navigator.current(),
            home: self.home.as_ref(),
            images: &self.images,
            notifications: &self.notifications,
            theme: &self.theme,
            now: self.now,
            spinner_rotation: self.spinner_rotation,
        })
    }
}
