// SPDX-License-Identifier: MPL-2.0
//! Feed domain: value records, the view-state holder and its collaborators.
//!
//! Nothing in this module depends on Iced. The UI layer reads a
//! [`ViewState`] by reference and forwards user intents to [`FeedStore`].
//!
//! # Components
//!
//! - [`model`] - `Post`, `FriendStory`, `Author` and the `ViewState` variants
//! - [`store`] - `FeedStore`, the single writer of the home screen state
//! - [`session`] - the session collaborator that seeds the store once
//! - [`sample`] - static sample stories and posts
//! - [`time_label`] - relative time labels for post headers

pub mod model;
pub mod sample;
pub mod session;
pub mod store;
pub mod time_label;

pub use model::{Author, FriendStory, Post, ViewState};
pub use session::{FeedSeed, SessionOutcome, SessionSource, StaticSession};
pub use store::{FeedStore, ListenerId};
pub use time_label::TimeLabel;
