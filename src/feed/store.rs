// SPDX-License-Identifier: MPL-2.0
//! View-state holder for the home screen.
//!
//! `FeedStore` is the only writer of [`ViewState`]. It turns the one-shot
//! session seed and the composer intents into state transitions and
//! broadcasts every change to its subscribed listeners.
//!
//! ```text
//! Loading ──seed(authenticated)──▶ Loaded ──submit(draft)──▶ Loaded
//!    │
//!    └──seed(unauthenticated)──▶ SignInRequired
//! ```

use super::model::{Author, ViewState};
use super::session::SessionOutcome;
use chrono::{DateTime, Utc};
use std::fmt;

/// Handle returned by [`FeedStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ViewState) + Send>;

/// Owns the current [`ViewState`] and the composer draft.
pub struct FeedStore {
    state: ViewState,
    draft: String,
    author: Author,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl fmt::Debug for FeedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedStore")
            .field("state", &self.state)
            .field("draft", &self.draft)
            .field("author", &self.author)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FeedStore {
    /// Creates a store in the `Loading` state.
    #[must_use]
    pub fn new(author: Author) -> Self {
        Self {
            state: ViewState::Loading,
            draft: String::new(),
            author,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Registers a listener called after every state change.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ViewState) + Send + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Applies the session outcome. Only the first seed received while
    /// `Loading` has any effect.
    ///
    /// Returns `true` when the state changed.
    pub fn seed(&mut self, outcome: SessionOutcome) -> bool {
        if !self.state.is_loading() {
            tracing::debug!(state = self.state.kind(), "ignoring late session seed");
            return false;
        }

        self.state = match outcome {
            SessionOutcome::Authenticated(seed) => ViewState::Loaded {
                posts: seed.posts,
                avatar_url: seed.avatar_url,
            },
            SessionOutcome::Unauthenticated => ViewState::SignInRequired,
        };
        self.notify();
        true
    }

    /// Stores the composer text. Never changes the state variant.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Publishes the draft as a new post at `now`.
    ///
    /// No-op unless the feed is loaded and the draft contains something
    /// other than whitespace. The draft is cleared after a successful
    /// submit.
    pub fn submit(&mut self, now: DateTime<Utc>) -> bool {
        if self.draft.trim().is_empty() {
            return false;
        }
        let ViewState::Loaded { posts, .. } = &mut self.state else {
            return false;
        };

        let text = std::mem::take(&mut self.draft);
        posts.insert(0, self.author.compose(text, now));
        self.notify();
        true
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::model::Post;
    use crate::feed::session::FeedSeed;
    use chrono::TimeZone;
    use std::sync::{Arc, Mutex};

    fn author() -> Author {
        Author::new("Me", "https://example.com/me.png")
    }

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 10, minute, 0).unwrap()
    }

    fn loaded_store(posts: Vec<Post>) -> FeedStore {
        let mut store = FeedStore::new(author());
        store.seed(SessionOutcome::Authenticated(FeedSeed {
            avatar_url: "u1".to_string(),
            posts,
        }));
        store
    }

    #[test]
    fn starts_loading_with_empty_draft() {
        let store = FeedStore::new(author());
        assert_eq!(store.state(), &ViewState::Loading);
        assert!(store.draft().is_empty());
    }

    #[test]
    fn authenticated_seed_loads_posts_and_avatar() {
        let existing = Post::new("old", at(0), "Friend", "f.png");
        let store = loaded_store(vec![existing.clone()]);
        assert_eq!(
            store.state(),
            &ViewState::Loaded {
                posts: vec![existing],
                avatar_url: "u1".to_string(),
            }
        );
    }

    #[test]
    fn unauthenticated_seed_requires_sign_in() {
        let mut store = FeedStore::new(author());
        assert!(store.seed(SessionOutcome::Unauthenticated));
        assert!(store.state().is_sign_in_required());
    }

    #[test]
    fn second_seed_is_ignored() {
        let mut store = loaded_store(Vec::new());
        assert!(!store.seed(SessionOutcome::Unauthenticated));
        assert!(matches!(store.state(), ViewState::Loaded { .. }));
    }

    #[test]
    fn submit_prepends_post_and_clears_draft() {
        let mut store = loaded_store(Vec::new());
        store.update_draft("Hello");
        assert!(store.submit(at(1)));
        assert_eq!(
            store.state(),
            &ViewState::Loaded {
                posts: vec![Post::new("Hello", at(1), "Me", "https://example.com/me.png")],
                avatar_url: "u1".to_string(),
            }
        );
        assert!(store.draft().is_empty());
    }

    #[test]
    fn newest_submission_comes_first() {
        let mut store = loaded_store(vec![Post::new("seeded", at(0), "Friend", "f.png")]);
        store.update_draft("first");
        store.submit(at(1));
        store.update_draft("second");
        store.submit(at(2));

        let texts: Vec<&str> = store.state().posts().iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first", "seeded"]);
    }

    #[test]
    fn blank_drafts_leave_posts_unchanged() {
        for draft in ["", " ", "\t", "  \n  "] {
            let mut store = loaded_store(Vec::new());
            store.update_draft(draft);
            assert!(!store.submit(at(1)), "draft {draft:?} should be rejected");
            assert!(store.state().posts().is_empty());
        }
    }

    #[test]
    fn submitted_text_is_kept_verbatim() {
        let mut store = loaded_store(Vec::new());
        store.update_draft("  padded  ");
        store.submit(at(1));
        assert_eq!(store.state().posts()[0].text, "  padded  ");
    }

    #[test]
    fn duplicate_texts_are_both_kept() {
        let mut store = loaded_store(Vec::new());
        for minute in [1, 2] {
            store.update_draft("same");
            store.submit(at(minute));
        }
        assert_eq!(store.state().posts().len(), 2);
    }

    #[test]
    fn submit_while_loading_is_noop() {
        let mut store = FeedStore::new(author());
        store.update_draft("too early");
        assert!(!store.submit(at(1)));
        assert_eq!(store.state(), &ViewState::Loading);
        assert_eq!(store.draft(), "too early");
    }

    #[test]
    fn listeners_observe_every_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = FeedStore::new(author());
        let sink = Arc::clone(&seen);
        store.subscribe(move |state| sink.lock().unwrap().push(state.kind()));

        store.seed(SessionOutcome::Authenticated(FeedSeed {
            avatar_url: "u1".to_string(),
            posts: Vec::new(),
        }));
        store.update_draft("x");
        store.submit(at(1));

        assert_eq!(*seen.lock().unwrap(), vec!["loaded", "loaded"]);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let seen = Arc::new(Mutex::new(0));
        let mut store = FeedStore::new(author());
        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.seed(SessionOutcome::Unauthenticated);
        assert_eq!(*seen.lock().unwrap(), 0);
    }
}
