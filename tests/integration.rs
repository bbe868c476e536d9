// SPDX-License-Identifier: MPL-2.0
use chrono::{Duration, TimeZone, Utc};
use iced::Theme;
use iced_feed::app::{self, App, Flags, Message, Screen};
use iced_feed::config::{self, Config};
use iced_feed::feed::{
    time_label, Author, FeedSeed, FeedStore, Post, SessionOutcome, StaticSession, ViewState,
};
use iced_feed::i18n::fluent::I18n;
use iced_feed::ui::home::{self, status_bar, tab_bar};
use iced_feed::ui::notifications::Notification;
use iced_feed::ui::sign_in;
use iced_feed::ui::theming::ThemeMode;
use tempfile::tempdir;

fn author() -> Author {
    Author::new("You", "https://example.com/you.png")
}

fn app_with_session(signed_in: bool) -> App {
    let session = StaticSession::new(signed_in, "u1", std::time::Duration::ZERO);
    let (app, _task) = App::with_session(
        I18n::default(),
        author(),
        Box::new(session),
        Theme::Light,
        Vec::new(),
    );
    app
}

#[test]
fn seeded_empty_feed_accepts_first_post() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    let mut store = FeedStore::new(author());

    store.seed(SessionOutcome::Authenticated(FeedSeed {
        avatar_url: "u1".to_string(),
        posts: Vec::new(),
    }));
    store.update_draft("Hello");
    assert!(store.submit(now));

    assert_eq!(
        store.state(),
        &ViewState::Loaded {
            posts: vec![Post::new(
                "Hello",
                now,
                "You",
                "https://example.com/you.png"
            )],
            avatar_url: "u1".to_string(),
        }
    );
    assert_eq!(store.draft(), "");
}

#[test]
fn unauthenticated_session_mounts_sign_in() {
    let mut app = app_with_session(false);
    assert_eq!(app.screen(), Screen::Home);
    assert!(app.home().is_some_and(|home| home.state().is_loading()));

    let _ = app.update(Message::SessionLoaded(SessionOutcome::Unauthenticated));

    assert_eq!(app.screen(), Screen::SignIn);
    assert!(app.home().is_none());
    assert_eq!(app.navigator().depth(), 1);
    assert!(!app.navigator().can_go_back());
}

#[test]
fn sign_in_remounts_fresh_home() {
    let mut app = app_with_session(false);
    let _ = app.update(Message::SessionLoaded(SessionOutcome::Unauthenticated));
    let _ = app.update(Message::SignIn(sign_in::Message::SignIn));

    assert_eq!(app.screen(), Screen::Home);
    let home = app.home().expect("home is mounted after sign-in");
    assert!(home.state().is_loading());
    assert_eq!(home.tabs().selected(), 0);
    assert_eq!(app.navigator().depth(), 1);
    assert!(!app.navigator().can_go_back());
}

#[test]
fn authenticated_session_loads_feed_and_publishes() {
    let mut app = app_with_session(true);
    let _ = app.update(Message::SessionLoaded(SessionOutcome::Authenticated(
        FeedSeed {
            avatar_url: "u1".to_string(),
            posts: Vec::new(),
        },
    )));
    assert_eq!(app.screen(), Screen::Home);

    let _ = app.update(Message::Home(home::Message::StatusBar(
        status_bar::Message::DraftChanged("First!".to_string()),
    )));
    let _ = app.update(Message::Home(home::Message::StatusBar(
        status_bar::Message::Submit,
    )));

    let home = app.home().expect("home stays mounted");
    let posts = home.state().posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].text, "First!");
    assert_eq!(posts[0].author_name, "You");
    assert_eq!(home.composer().draft(), "");
}

#[test]
fn late_seed_after_sign_in_is_ignored() {
    let mut app = app_with_session(true);
    let seed = SessionOutcome::Authenticated(FeedSeed {
        avatar_url: "u1".to_string(),
        posts: Vec::new(),
    });
    let _ = app.update(Message::SessionLoaded(seed));
    let _ = app.update(Message::SessionLoaded(SessionOutcome::Unauthenticated));

    assert_eq!(app.screen(), Screen::Home);
    assert!(matches!(
        app.home().map(|home| home.state()),
        Some(ViewState::Loaded { .. })
    ));
}

#[test]
fn tab_selection_does_not_touch_view_state() {
    let mut app = app_with_session(true);
    let _ = app.update(Message::SessionLoaded(SessionOutcome::Authenticated(
        FeedSeed {
            avatar_url: "u1".to_string(),
            posts: vec![Post::new("hi", Utc::now(), "Drake", "https://a.test/d.png")],
        },
    )));
    let before = app.home().map(|home| home.state().clone());

    let _ = app.update(Message::Home(home::Message::TabBar(
        tab_bar::Message::Select(5),
    )));

    let home = app.home().expect("home is mounted");
    assert_eq!(home.tabs().selected(), 5);
    assert_eq!(Some(home.state().clone()), before);
}

#[test]
fn time_labels_switch_at_two_minutes() {
    let i18n = I18n::default();
    let now = Utc.with_ymd_and_hms(2024, 3, 14, 15, 30, 0).unwrap();

    for seconds in [0, 1, 60, 119] {
        let label = time_label::label(now - Duration::seconds(seconds), now, &i18n);
        assert_eq!(label, i18n.tr("time-just-now"), "{seconds}s ago");
    }
    for seconds in [120, 3_600, 86_400 * 3, 86_400 * 40] {
        let label = time_label::label(now - Duration::seconds(seconds), now, &i18n);
        assert!(!label.is_empty());
        assert_ne!(label, i18n.tr("time-just-now"), "{seconds}s ago");
    }
}

fn write_settings(path: &std::path::Path, config: &Config) {
    let content = toml::to_string_pretty(config).expect("Failed to serialize config");
    std::fs::write(path, content).expect("Failed to write config file");
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    write_settings(&path, &config);
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    config.general.language = Some("fr".to_string());
    write_settings(&path, &config);
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_ne!(i18n_fr.tr("status-placeholder"), i18n_en.tr("status-placeholder"));
}

#[test]
fn profile_config_sets_author_of_new_posts() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[profile]\ndisplay_name = \"Ada\"\navatar_url = \"https://example.com/ada.png\"\n",
    )
    .expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let author = loaded.profile.author();
    assert_eq!(author.name, "Ada");
    assert_eq!(author.avatar_url, "https://example.com/ada.png");
    assert!(loaded.session.signed_in);
}

fn light_config(language: Option<&str>) -> Config {
    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Light;
    config.general.language = language.map(str::to_string);
    config
}

#[test]
fn startup_warnings_are_shown_newest_first() {
    let (app, _task) = App::new(Flags {
        lang: Some("de".to_string()),
        signed_out: true,
        config: light_config(Some("en-US")),
        warnings: vec!["notification-config-load-error".to_string()],
    });

    let keys: Vec<&str> = app
        .notifications()
        .visible()
        .map(Notification::message_key)
        .collect();
    assert_eq!(
        keys,
        vec![app::UNKNOWN_LANGUAGE_WARNING, "notification-config-load-error"]
    );
    assert_eq!(
        app.i18n.tr(app::UNKNOWN_LANGUAGE_WARNING),
        "The requested language is not available."
    );
}

#[test]
fn supported_language_raises_no_warning() {
    let (app, _task) = App::new(Flags {
        lang: None,
        signed_out: true,
        config: light_config(Some("fr-CA")),
        warnings: Vec::new(),
    });

    assert!(!app.notifications().has_notifications());
    assert_eq!(app.i18n.current_locale().to_string(), "fr");
}

#[test]
fn shell_view_renders_every_screen() {
    let mut app = app_with_session(false);
    drop(app.view());

    let _ = app.update(Message::SessionLoaded(SessionOutcome::Unauthenticated));
    assert_eq!(app.screen(), Screen::SignIn);
    drop(app.view());

    let _ = app.update(Message::SignIn(sign_in::Message::SignIn));
    let _ = app.update(Message::SessionLoaded(SessionOutcome::Authenticated(
        FeedSeed {
            avatar_url: "u1".to_string(),
            posts: vec![Post::new("hi", Utc::now(), "Drake", "")],
        },
    )));
    drop(app.view());
}
