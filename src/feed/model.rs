// SPDX-License-Identifier: MPL-2.0
//! Immutable value records displayed by the home screen.

use chrono::{DateTime, Utc};

/// A single entry of the feed.
///
/// Posts carry no identity: two posts with the same text and author are
/// indistinguishable apart from their timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub author_name: String,
    pub author_avatar_url: String,
}

impl Post {
    pub fn new(
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
        author_name: impl Into<String>,
        author_avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            timestamp,
            author_name: author_name.into(),
            author_avatar_url: author_avatar_url.into(),
        }
    }
}

/// A friend's story card in the stories row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendStory {
    pub friend_name: &'static str,
    pub avatar_url: &'static str,
    pub background_url: &'static str,
}

/// Author context stamped on posts submitted from the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub avatar_url: String,
}

impl Author {
    pub fn new(name: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar_url: avatar_url.into(),
        }
    }

    /// Builds a post authored by `self`.
    #[must_use]
    pub fn compose(&self, text: impl Into<String>, timestamp: DateTime<Utc>) -> Post {
        Post::new(text, timestamp, self.name.clone(), self.avatar_url.clone())
    }
}

/// What the home screen displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Waiting for the session collaborator.
    #[default]
    Loading,
    /// Feed available. `posts` is newest first.
    Loaded {
        posts: Vec<Post>,
        avatar_url: String,
    },
    /// The session is not authenticated; the shell must leave this screen.
    SignInRequired,
}

impl ViewState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    #[must_use]
    pub fn is_sign_in_required(&self) -> bool {
        matches!(self, ViewState::SignInRequired)
    }

    /// Posts of a loaded feed, empty otherwise.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        match self {
            ViewState::Loaded { posts, .. } => posts,
            ViewState::Loading | ViewState::SignInRequired => &[],
        }
    }

    /// Short name used in traces.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::Loaded { .. } => "loaded",
            ViewState::SignInRequired => "sign-in-required",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_state_is_loading() {
        assert!(ViewState::default().is_loading());
    }

    #[test]
    fn posts_is_empty_outside_loaded() {
        assert!(ViewState::Loading.posts().is_empty());
        assert!(ViewState::SignInRequired.posts().is_empty());
    }

    #[test]
    fn author_compose_stamps_name_and_avatar() {
        let author = Author::new("Ada", "https://example.com/ada.png");
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let post = author.compose("hi", at);
        assert_eq!(post.author_name, "Ada");
        assert_eq!(post.author_avatar_url, "https://example.com/ada.png");
        assert_eq!(post.timestamp, at);
        assert_eq!(post.text, "hi");
    }
}
