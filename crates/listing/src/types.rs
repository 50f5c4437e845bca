//! Core domain types for wallpaper selection.
//!
//! A `Candidate` is built once from a listing link and never changes
//! afterwards. Derived fields (`domain`, `file_type`, `resolution`) are
//! computed at construction so every later comparison sees normalized data.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::envelope::LinkData;
use crate::parser::{parse_file_type, parse_resolution};

/// Unix timestamp in seconds
pub type Timestamp = i64;

/// Width and height in pixels, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when both dimensions reach the given minimum.
    pub fn covers(&self, minimum: &Resolution) -> bool {
        self.width >= minimum.width && self.height >= minimum.height
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One discovered image, normalized for scoring.
///
/// `upvotes`/`downvotes` are negative when the feed did not report them.
/// The all-zero `Default` value is the fold seed (see [`Candidate::is_sentinel`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub url: String,
    pub source_id: String,
    pub permalink: String,
    pub title: String,
    pub author: String,

    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
    pub created_at: Timestamp,

    /// Lower-cased host supplying the image
    pub domain: String,
    /// Lower-cased extension taken from the URL, empty when there is none
    pub file_type: String,
    /// Declared resolution parsed from the title
    pub resolution: Option<Resolution>,
}

impl Candidate {
    /// Create a candidate for `url` found in `source_id`.
    ///
    /// Vote counts start as unknown (-1); use the `with_*` methods to fill in
    /// the rest.
    pub fn new(url: impl Into<String>, source_id: impl Into<String>) -> Self {
        let url = url.into();
        let file_type = parse_file_type(&url);
        Self {
            url,
            source_id: source_id.into(),
            upvotes: -1,
            downvotes: -1,
            file_type,
            ..Self::default()
        }
    }

    /// Build a candidate from a decoded listing link.
    ///
    /// `fallback_source` names the requested feed and is used when the link
    /// does not carry its own subreddit name.
    pub fn from_link(link: LinkData, fallback_source: &str) -> Self {
        let source_id = if link.subreddit.is_empty() {
            fallback_source.to_string()
        } else {
            link.subreddit
        };

        Candidate::new(link.url, source_id)
            .with_title(link.title)
            .with_permalink(absolute_permalink(&link.permalink))
            .with_author(link.author)
            .with_domain(link.domain)
            .with_score(link.score)
            .with_votes(link.ups, link.downs)
            .with_created_at(link.created_utc as Timestamp)
    }

    /// Set the title and re-derive the declared resolution from it.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self.resolution = parse_resolution(&self.title);
        self
    }

    pub fn with_permalink(mut self, permalink: impl Into<String>) -> Self {
        self.permalink = permalink.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_domain(mut self, domain: impl AsRef<str>) -> Self {
        self.domain = domain.as_ref().to_lowercase();
        self
    }

    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    pub fn with_votes(mut self, upvotes: i64, downvotes: i64) -> Self {
        self.upvotes = upvotes;
        self.downvotes = downvotes;
        self
    }

    pub fn with_created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = created_at;
        self
    }

    /// True for the all-zero fold seed, i.e. "no selection made".
    pub fn is_sentinel(&self) -> bool {
        self.url.is_empty()
            && self.score == 0
            && self.created_at == 0
            && self.upvotes == 0
            && self.downvotes == 0
    }
}

const REDDIT_ORIGIN: &str = "https://www.reddit.com";

/// Listing permalinks are site-relative; notifications need a full link.
fn absolute_permalink(permalink: &str) -> String {
    if permalink.starts_with('/') {
        format!("{REDDIT_ORIGIN}{permalink}")
    } else {
        permalink.to_string()
    }
}
