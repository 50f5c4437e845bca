//! Reddit listing source.
//!
//! Fetches `/r/{subreddit}/{sort}.json` pages over HTTPS. Only the first
//! page is requested.

use listing::{Result, SortMode, Thing, TimeWindow, WallpaperError};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::traits::FeedSource;

pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

const USER_AGENT: &str = concat!("wallfetch/", env!("CARGO_PKG_VERSION"));

/// HTTP client for Reddit listings
#[derive(Clone)]
pub struct RedditSource {
    client: Client,
    base_url: String,
}

impl RedditSource {
    /// Create a source talking to reddit.com.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| WallpaperError::configuration(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the source at another host (mirrors, local fixtures).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// `raw_json=1` keeps `&` in URLs unescaped.
    pub fn listing_url(&self, subreddit: &str, sort: SortMode, window: TimeWindow) -> String {
        format!(
            "{}/r/{}/{}.json?t={}&raw_json=1",
            self.base_url, subreddit, sort, window
        )
    }
}

impl FeedSource for RedditSource {
    fn name(&self) -> &str {
        "RedditSource"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, subreddit: &str, sort: SortMode, window: TimeWindow) -> Result<Thing> {
        let url = self.listing_url(subreddit, sort, window);
        debug!("Fetching listing {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WallpaperError::fetch(subreddit, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WallpaperError::fetch(subreddit, format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WallpaperError::fetch(subreddit, e))?;

        Thing::from_json(&body)
            .map_err(|e| WallpaperError::fetch(subreddit, format!("invalid listing: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url() {
        let source = RedditSource::new().unwrap();
        assert_eq!(
            source.listing_url("wallpapers", SortMode::Top, TimeWindow::Week),
            "https://www.reddit.com/r/wallpapers/top.json?t=week&raw_json=1"
        );
    }

    #[test]
    fn test_base_url_override_strips_slash() {
        let source = RedditSource::new()
            .unwrap()
            .with_base_url("http://127.0.0.1:8080/");
        assert_eq!(
            source.listing_url("earthporn", SortMode::New, TimeWindow::All),
            "http://127.0.0.1:8080/r/earthporn/new.json?t=all&raw_json=1"
        );
    }
}
