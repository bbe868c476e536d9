// SPDX-License-Identifier: MPL-2.0
//! Remote image loading for avatars and story backgrounds.
//!
//! Every URL is fetched at most once per run. Until the bytes arrive, or when
//! the fetch fails, views show a gray placeholder of the same size.

use crate::error::{Error, Result};
use crate::ui::design_tokens::sizing;
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{image, svg, Container};
use iced::{ContentFit, Element, Length, Task, Theme};
use std::collections::HashMap;
use std::time::Duration;

const USER_AGENT: &str = concat!("IcedFeed/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        url: String,
        result: Result<image::Handle>,
    },
}

#[derive(Debug, Clone)]
enum Entry {
    Pending,
    Ready(image::Handle),
    Failed,
}

/// URL-keyed cache of decoded image handles.
#[derive(Debug, Default)]
pub struct ImageCache {
    entries: HashMap<String, Entry>,
}

impl ImageCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts fetching every URL not seen before. Blank URLs are ignored.
    pub fn request<I, S>(&mut self, urls: I) -> Task<Message>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tasks: Vec<Task<Message>> = urls
            .into_iter()
            .map(Into::<String>::into)
            .filter(|url| !url.trim().is_empty())
            .filter_map(|url| self.mark_pending(url))
            .map(|url| {
                let key = url.clone();
                Task::perform(fetch(url), move |result| Message::Loaded {
                    url: key,
                    result,
                })
            })
            .collect();

        Task::batch(tasks)
    }

    /// Records a URL as in flight; returns it only if it was new.
    fn mark_pending(&mut self, url: String) -> Option<String> {
        if self.entries.contains_key(&url) {
            return None;
        }
        self.entries.insert(url.clone(), Entry::Pending);
        Some(url)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Loaded { url, result } => {
                let entry = match result {
                    Ok(handle) => Entry::Ready(handle),
                    Err(err) => {
                        tracing::warn!(
                            %url,
                            error = %err,
                            "image unavailable, keeping placeholder"
                        );
                        Entry::Failed
                    }
                };
                self.entries.insert(url, entry);
            }
        }
    }

    #[must_use]
    pub fn handle(&self, url: &str) -> Option<&image::Handle> {
        match self.entries.get(url) {
            Some(Entry::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self, url: &str) -> bool {
        matches!(self.entries.get(url), Some(Entry::Pending))
    }

    #[must_use]
    pub fn has_failed(&self, url: &str) -> bool {
        matches!(self.entries.get(url), Some(Entry::Failed))
    }

    /// Image cropped to `width` x `height`, or a placeholder.
    pub fn view<'a, M: 'a>(&self, url: &str, width: f32, height: f32) -> Element<'a, M> {
        match self.handle(url) {
            Some(handle) => image(handle.clone())
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Cover)
                .into(),
            None => placeholder(width, height),
        }
    }

    /// Square avatar of `size` pixels.
    pub fn avatar<'a, M: 'a>(&self, url: &str, size: f32) -> Element<'a, M> {
        self.view(url, size, size)
    }
}

fn placeholder<'a, M: 'a>(width: f32, height: f32) -> Element<'a, M> {
    let glyph_size = width.min(height).min(sizing::ICON_XL) * 0.6;

    Container::new(icons::sized(icons::person(), glyph_size).style(
        |theme: &Theme, _status| svg::Style {
            color: Some(ColorScheme::for_theme(theme).text_secondary),
        },
    ))
    .center_x(Length::Fixed(width))
    .center_y(Length::Fixed(height))
    .style(styles::container::placeholder)
    .into()
}

/// Downloads `url` and checks the payload is a known image format.
async fn fetch(url: String) -> Result<image::Handle> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Network(format!("HTTP status: {}", response.status())));
    }

    let bytes = response.bytes().await?;
    validate(&bytes)?;
    Ok(image::Handle::from_bytes(bytes.to_vec()))
}

/// Rejects payloads that are not images (for example an HTML page).
fn validate(bytes: &[u8]) -> Result<()> {
    image_rs::guess_format(bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn each_url_is_requested_once() {
        let mut cache = ImageCache::new();
        let _ = cache.request(["https://a.test/1.png", "https://a.test/1.png"]);
        let _ = cache.request(["https://a.test/1.png"]);

        assert!(cache.is_pending("https://a.test/1.png"));
        assert_eq!(cache.entries.len(), 1);
    }

    #[test]
    fn blank_urls_are_ignored() {
        let mut cache = ImageCache::new();
        let _ = cache.request(["", "   "]);
        assert!(cache.entries.is_empty());
    }

    #[test]
    fn failed_load_keeps_placeholder() {
        let mut cache = ImageCache::new();
        let _ = cache.request(["https://a.test/page.html"]);
        cache.update(Message::Loaded {
            url: "https://a.test/page.html".to_string(),
            result: Err(Error::Image("not an image".to_string())),
        });

        assert!(cache.has_failed("https://a.test/page.html"));
        assert!(cache.handle("https://a.test/page.html").is_none());
    }

    #[test]
    fn successful_load_stores_handle() {
        let mut cache = ImageCache::new();
        cache.update(Message::Loaded {
            url: "https://a.test/ok.png".to_string(),
            result: Ok(image::Handle::from_bytes(PNG_SIGNATURE.to_vec())),
        });

        assert!(cache.handle("https://a.test/ok.png").is_some());
        assert!(!cache.is_pending("https://a.test/ok.png"));
    }

    #[test]
    fn html_payload_is_rejected() {
        assert!(validate(b"<!DOCTYPE html><html></html>").is_err());
        assert!(validate(&PNG_SIGNATURE).is_ok());
    }

    #[test]
    fn view_renders_placeholder_and_ready_image() {
        let mut cache = ImageCache::new();
        let _ = cache.request(["https://a.test/ok.png"]);
        let _placeholder: Element<'_, ()> = cache.avatar("https://a.test/ok.png", 40.0);

        cache.update(Message::Loaded {
            url: "https://a.test/ok.png".to_string(),
            result: Ok(image::Handle::from_bytes(PNG_SIGNATURE.to_vec())),
        });
        let _image: Element<'_, ()> = cache.view("https://a.test/ok.png", 140.0, 220.0);
    }
}
