// SPDX-License-Identifier: MPL-2.0
//! Home screen: top bar, tab bar, composer, stories row and the feed.
//!
//! `HomeScreen` owns the [`FeedStore`] and the component-local state (tab
//! selection, composer input). Dropping the screen drops all of it, so a
//! remount always starts from `Loading` with the first tab selected.

pub mod post_card;
pub mod status_bar;
pub mod stories;
pub mod tab_bar;
pub mod top_bar;

use crate::feed::{sample, Author, FeedStore, ListenerId, Post, SessionOutcome, ViewState};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::remote_image::ImageCache;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use chrono::{DateTime, Utc};
use iced::widget::{column, container, scrollable, Column, Space};
use iced::{Element, Length};

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
    pub scheme: ColorScheme,
    /// Reference instant for time labels.
    pub now: DateTime<Utc>,
    pub spinner_rotation: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    TopBar(top_bar::Message),
    TabBar(tab_bar::Message),
    StatusBar(status_bar::Message),
    Stories(stories::Message),
    Post(post_card::Message),
}

/// Events propagated to the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The feed was seeded with an unauthenticated session.
    SignInRequired,
    /// A post was added to the top of the feed.
    Published,
}

#[derive(Debug)]
pub struct HomeScreen {
    store: FeedStore,
    tabs: tab_bar::State,
    composer: status_bar::State,
}

impl HomeScreen {
    #[must_use]
    pub fn new(author: Author) -> Self {
        Self {
            store: FeedStore::new(author),
            tabs: tab_bar::State::default(),
            composer: status_bar::State::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        self.store.state()
    }

    #[must_use]
    pub fn tabs(&self) -> &tab_bar::State {
        &self.tabs
    }

    #[must_use]
    pub fn composer(&self) -> &status_bar::State {
        &self.composer
    }

    /// Subscribes a listener to state changes of the owned store.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ViewState) + Send + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Feeds the session outcome to the store.
    pub fn seed(&mut self, outcome: SessionOutcome) -> Event {
        if self.store.seed(outcome) && self.store.state().is_sign_in_required() {
            Event::SignInRequired
        } else {
            Event::None
        }
    }

    /// Every image the current state can display.
    #[must_use]
    pub fn image_urls(&self) -> Vec<String> {
        let mut urls = vec![self.store.author().avatar_url.clone()];

        if let ViewState::Loaded { posts, avatar_url } = self.store.state() {
            urls.push(avatar_url.clone());
            urls.extend(posts.iter().map(|post| post.author_avatar_url.clone()));
            urls.extend(sample::image_urls().map(str::to_string));
        }

        urls
    }

    pub fn update(&mut self, message: Message, now: DateTime<Utc>) -> Event {
        match message {
            Message::TopBar(message) => top_bar::update(message),
            Message::TabBar(message) => tab_bar::update(&mut self.tabs, message),
            Message::StatusBar(message) => {
                if status_bar::update(&mut self.composer, message, &mut self.store, now) {
                    return Event::Published;
                }
            }
            Message::Stories(message) => stories::update(message),
            Message::Post(message) => post_card::update(message),
        }
        Event::None
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        match self.store.state() {
            ViewState::Loading => loading(&ctx),
            ViewState::Loaded { posts, avatar_url } => self.loaded(posts, avatar_url, ctx),
            // The shell leaves this screen as soon as it sees the event.
            ViewState::SignInRequired => Space::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        }
    }

    fn loaded<'a>(
        &'a self,
        posts: &'a [Post],
        avatar_url: &'a str,
        ctx: ViewContext<'a>,
    ) -> Element<'a, Message> {
        let ViewContext { i18n, images, now, .. } = ctx;

        let mut feed = Column::new()
            .spacing(spacing::XS)
            .padding(iced::Padding {
                bottom: spacing::XL,
                ..iced::Padding::ZERO
            })
            .push(
                status_bar::view(&self.composer, avatar_url, images, i18n)
                    .map(Message::StatusBar),
            )
            .push(Space::new().height(spacing::XS))
            .push(
                stories::view(avatar_url, sample::friend_stories(), images, i18n)
                    .map(Message::Stories),
            );

        for (index, post) in posts.iter().enumerate() {
            feed = feed.push(post_card::view(index, post, now, images, i18n).map(Message::Post));
        }

        let feed = container(container(feed).max_width(sizing::FEED_MAX_WIDTH))
            .center_x(Length::Fill)
            .padding(iced::Padding {
                top: spacing::MD,
                ..iced::Padding::ZERO
            });

        container(column![
            top_bar::view(i18n).map(Message::TopBar),
            tab_bar::view(&self.tabs, i18n).map(Message::TabBar),
            scrollable(feed).height(Length::Fill),
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::feed_background)
        .into()
    }
}

fn loading<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    container(AnimatedSpinner::new(ctx.scheme.brand, ctx.spinner_rotation).into_element())
        .center(Length::Fill)
        .style(styles::container::surface)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedSeed;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, 15, 30, 0).unwrap()
    }

    fn screen() -> HomeScreen {
        HomeScreen::new(Author::new("Me", "https://a.test/me.png"))
    }

    fn context<'a>(i18n: &'a I18n, images: &'a ImageCache) -> ViewContext<'a> {
        ViewContext {
            i18n,
            images,
            scheme: ColorScheme::light(),
            now: now(),
            spinner_rotation: 0.0,
        }
    }

    fn seed_loaded(screen: &mut HomeScreen, posts: Vec<Post>) {
        let event = screen.seed(SessionOutcome::Authenticated(FeedSeed {
            avatar_url: "u1".to_string(),
            posts,
        }));
        assert_eq!(event, Event::None);
    }

    #[test]
    fn starts_loading_with_first_tab() {
        let screen = screen();
        assert!(screen.state().is_loading());
        assert_eq!(screen.tabs().selected(), 0);
        assert_eq!(screen.composer().draft(), "");
    }

    #[test]
    fn unauthenticated_seed_raises_sign_in_event() {
        let mut screen = screen();
        assert_eq!(
            screen.seed(SessionOutcome::Unauthenticated),
            Event::SignInRequired
        );
        // A repeated seed is ignored and does not signal again.
        assert_eq!(screen.seed(SessionOutcome::Unauthenticated), Event::None);
    }

    #[test]
    fn composer_flow_prepends_post() {
        let mut screen = screen();
        seed_loaded(&mut screen, Vec::new());

        screen.update(
            Message::StatusBar(status_bar::Message::DraftChanged("Hello".into())),
            now(),
        );
        let event = screen.update(Message::StatusBar(status_bar::Message::Submit), now());

        assert_eq!(event, Event::Published);
        let posts = screen.state().posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].text, "Hello");
        assert_eq!(posts[0].author_name, "Me");
        assert_eq!(posts[0].timestamp, now());
    }

    #[test]
    fn tab_selection_leaves_feed_untouched() {
        let mut screen = screen();
        seed_loaded(&mut screen, Vec::new());
        let before = screen.state().clone();

        screen.update(Message::TabBar(tab_bar::Message::Select(3)), now());

        assert_eq!(screen.tabs().selected(), 3);
        assert_eq!(screen.state(), &before);
    }

    #[test]
    fn stub_actions_emit_no_event() {
        let mut screen = screen();
        seed_loaded(&mut screen, Vec::new());

        for message in [
            Message::TopBar(top_bar::Message::Search),
            Message::Stories(stories::Message::Open(1)),
            Message::Post(post_card::Message::Like(0)),
        ] {
            assert_eq!(screen.update(message, now()), Event::None);
        }
    }

    #[test]
    fn image_urls_cover_loaded_content() {
        let mut screen = screen();
        assert_eq!(screen.image_urls(), vec!["https://a.test/me.png".to_string()]);

        seed_loaded(
            &mut screen,
            vec![Post::new("hi", now(), "Drake", "https://a.test/drake.png")],
        );
        let urls = screen.image_urls();
        assert!(urls.contains(&"u1".to_string()));
        assert!(urls.contains(&"https://a.test/drake.png".to_string()));
        assert!(urls.len() > 3);
    }

    #[test]
    fn home_view_renders_loading() {
        let i18n = I18n::default();
        let images = ImageCache::new();
        let screen = screen();
        let _element = screen.view(context(&i18n, &images));
    }

    #[test]
    fn home_view_renders_empty_feed() {
        let i18n = I18n::default();
        let images = ImageCache::new();
        let mut screen = screen();
        seed_loaded(&mut screen, Vec::new());

        let _element = screen.view(context(&i18n, &images));
    }

    #[test]
    fn home_view_renders_posts() {
        let i18n = I18n::default();
        let mut images = ImageCache::new();
        let mut screen = screen();
        seed_loaded(
            &mut screen,
            vec![
                Post::new("hi", now(), "Drake", "https://a.test/drake.png"),
                Post::new("older", now() - chrono::Duration::days(9), "Ada", ""),
            ],
        );
        let _ = images.request(screen.image_urls());
        images.update(crate::ui::remote_image::Message::Loaded {
            url: "https://a.test/drake.png".to_string(),
            result: Ok(iced::widget::image::Handle::from_bytes(vec![0u8; 8])),
        });

        let _element = screen.view(context(&i18n, &images));
    }

    #[test]
    fn home_view_renders_sign_in_required() {
        let i18n = I18n::default();
        let images = ImageCache::new();
        let mut screen = screen();
        screen.seed(SessionOutcome::Unauthenticated);

        let _element = screen.view(context(&i18n, &images));
    }
}
