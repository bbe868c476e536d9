// SPDX-License-Identifier: MPL-2.0
//! Session collaborator consulted once when the home screen mounts.
//!
//! The home screen does not know where its data comes from. It asks a
//! [`SessionSource`] for a [`SessionOutcome`] and hands that to
//! [`FeedStore::seed`](super::FeedStore::seed).

use super::model::Post;
use super::sample;
use chrono::Utc;
use futures_util::future::BoxFuture;
use std::time::Duration;

/// Initial data for an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSeed {
    /// Avatar of the signed-in user.
    pub avatar_url: String,
    /// Existing posts, newest first.
    pub posts: Vec<Post>,
}

/// Result of a session load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Authenticated(FeedSeed),
    Unauthenticated,
}

/// Source of the one-shot session seed.
pub trait SessionSource: Send + Sync {
    /// Resolves the current session. Never fails: an unreachable backend
    /// simply never resolves.
    fn load(&self) -> BoxFuture<'static, SessionOutcome>;

    /// Records a successful sign-in so the next [`load`](Self::load)
    /// reports an authenticated session.
    fn mark_authenticated(&mut self);
}

/// In-process session backed by the sample feed.
#[derive(Debug, Clone)]
pub struct StaticSession {
    signed_in: bool,
    avatar_url: String,
    latency: Duration,
}

impl StaticSession {
    #[must_use]
    pub fn new(signed_in: bool, avatar_url: impl Into<String>, latency: Duration) -> Self {
        Self {
            signed_in,
            avatar_url: avatar_url.into(),
            latency,
        }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }
}

impl SessionSource for StaticSession {
    fn load(&self) -> BoxFuture<'static, SessionOutcome> {
        let signed_in = self.signed_in;
        let avatar_url = self.avatar_url.clone();
        let latency = self.latency;

        Box::pin(async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            if signed_in {
                SessionOutcome::Authenticated(FeedSeed {
                    avatar_url,
                    posts: sample::seed_posts(Utc::now()),
                })
            } else {
                SessionOutcome::Unauthenticated
            }
        })
    }

    fn mark_authenticated(&mut self) {
        self.signed_in = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn signed_in_session_yields_sample_feed() {
        let session = StaticSession::new(true, "https://example.com/me.png", Duration::ZERO);
        match session.load().await {
            SessionOutcome::Authenticated(seed) => {
                assert_eq!(seed.avatar_url, "https://example.com/me.png");
                assert!(!seed.posts.is_empty());
            }
            SessionOutcome::Unauthenticated => panic!("expected an authenticated session"),
        }
    }

    #[tokio::test]
    async fn signed_out_session_reports_unauthenticated() {
        let session = StaticSession::new(false, "", Duration::ZERO);
        assert_eq!(session.load().await, SessionOutcome::Unauthenticated);
    }

    #[tokio::test]
    async fn mark_authenticated_affects_next_load() {
        let mut session = StaticSession::new(false, "u1", Duration::ZERO);
        session.mark_authenticated();
        assert!(session.is_signed_in());
        assert!(matches!(
            session.load().await,
            SessionOutcome::Authenticated(_)
        ));
    }
}
