//! The feed source seam.
//!
//! Anything that can return a listing envelope for a subreddit can feed the
//! selection pipeline: the Reddit HTTP client in production, in-memory
//! fixtures in tests.

use listing::{Result, SortMode, Thing, TimeWindow};
use std::future::Future;

/// A ranked listing feed.
///
/// `Send + Sync + 'static` lets one source be shared across the fetch tasks
/// of a run.
pub trait FeedSource: Send + Sync + 'static {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// Fetch one listing page for `subreddit`.
    ///
    /// # Returns
    /// * `Ok(Thing)` - The decoded listing envelope
    /// * `Err(WallpaperError::Fetch)` - Transport, status or decode failure
    fn fetch(
        &self,
        subreddit: &str,
        sort: SortMode,
        window: TimeWindow,
    ) -> impl Future<Output = Result<Thing>> + Send;
}
