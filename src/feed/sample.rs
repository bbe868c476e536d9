// SPDX-License-Identifier: MPL-2.0
//! Static sample data shown by the home screen.

use super::model::{FriendStory, Post};
use chrono::{DateTime, Duration, Utc};

const RABIER_URL: &str =
    "https://lh3.googleusercontent.com/a/AGNmyxaAY1ochXh7teQCSn97nUODi5XfMj14m-k6BNHWhw=s360";
const DRAKE_URL: &str =
    "https://thatgrapejuice.net/2022/06/stream-drakes-honestly-nevermind-album/drake-thatgrapejuice-2022/";
const MEGAN_URL: &str =
    "https://hips.hearstapps.com/hmg-prod/images/gettyimages-1189841420.jpg?resize=1200:*";
const CARDI_URL: &str =
    "https://www.billboard.com/wp-content/uploads/2023/03/cardi-b-ama-2022-billboard-1548.jpg?w=942&h=623&crop=1";

static FRIEND_STORIES: [FriendStory; 4] = [
    FriendStory {
        friend_name: "Rabier",
        avatar_url: RABIER_URL,
        background_url: RABIER_URL,
    },
    FriendStory {
        friend_name: "Drake",
        avatar_url: DRAKE_URL,
        background_url: DRAKE_URL,
    },
    FriendStory {
        friend_name: "Megan",
        avatar_url: MEGAN_URL,
        background_url: MEGAN_URL,
    },
    FriendStory {
        friend_name: "Cardi",
        avatar_url: CARDI_URL,
        background_url: CARDI_URL,
    },
];

/// Friends' stories in display order.
#[must_use]
pub fn friend_stories() -> &'static [FriendStory] {
    &FRIEND_STORIES
}

/// Posts served by the in-process session, newest first, with timestamps
/// relative to `now` so every kind of time label shows up.
#[must_use]
pub fn seed_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        Post::new(
            "Studio session tonight, new verse coming soon.",
            now - Duration::minutes(45),
            "Drake",
            DRAKE_URL,
        ),
        Post::new(
            "Thank you all for the love at the show!",
            now - Duration::hours(5),
            "Cardi",
            CARDI_URL,
        ),
        Post::new(
            "Hot girl summer never ends.",
            now - Duration::days(3),
            "Megan",
            MEGAN_URL,
        ),
        Post::new(
            "First post from the new profile.",
            now - Duration::days(12),
            "Rabier",
            RABIER_URL,
        ),
    ]
}

/// Every remote URL referenced by the sample data.
pub fn image_urls() -> impl Iterator<Item = &'static str> {
    FRIEND_STORIES
        .iter()
        .flat_map(|story| [story.avatar_url, story.background_url])
}
