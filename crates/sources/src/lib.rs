//! # Sources Crate
//!
//! This crate turns configured subreddits into a flat candidate list.
//!
//! ## Components
//!
//! ### FeedSource
//! The seam between the pipeline and the network. `RedditSource` is the
//! production implementation; tests plug in fixtures.
//!
//! ### fetch_all
//! Requests every subreddit concurrently and fails the run if any request
//! fails.
//!
//! ### normalize
//! Flattens the fetched listing pages into `Candidate`s.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{fetch_all, normalize, RedditSource};
//! use std::sync::Arc;
//!
//! let source = Arc::new(RedditSource::new()?);
//! let pages = fetch_all(source, &config.subreddits, config.sort, config.from).await?;
//! let candidates = normalize(pages);
//! ```

pub mod fetch;
pub mod normalizer;
pub mod reddit;
pub mod traits;

// Re-export commonly used types
pub use fetch::{FeedPage, fetch_all};
pub use normalizer::normalize;
pub use reddit::RedditSource;
pub use traits::FeedSource;
