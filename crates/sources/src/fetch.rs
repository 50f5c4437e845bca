//! Concurrent fetch of every configured feed.
//!
//! All subreddits are requested at once in a `JoinSet`. The join policy is
//! all-or-nothing: the first failure aborts the tasks still in flight and
//! fails the run. Successful pages come back in the order they were
//! requested, whatever order they completed in.

use listing::{Result, SortMode, Thing, TimeWindow, WallpaperError};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, instrument};

use crate::traits::FeedSource;

/// One fetched listing page and the subreddit it was requested for.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedPage {
    pub source_id: String,
    pub thing: Thing,
}

/// Fetch one page per subreddit concurrently.
///
/// # Returns
/// * `Ok(Vec<FeedPage>)` - One page per subreddit, in request order
/// * `Err(WallpaperError::Fetch)` - The first failure observed
#[instrument(skip(source), fields(feed = source.name()))]
pub async fn fetch_all<S: FeedSource>(
    source: Arc<S>,
    subreddits: &[String],
    sort: SortMode,
    window: TimeWindow,
) -> Result<Vec<FeedPage>> {
    let mut tasks = JoinSet::new();
    for (index, subreddit) in subreddits.iter().cloned().enumerate() {
        let source = Arc::clone(&source);
        tasks.spawn(async move {
            let result = source.fetch(&subreddit, sort, window).await;
            (index, subreddit, result)
        });
    }

    let mut pages: Vec<Option<FeedPage>> = (0..subreddits.len()).map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (index, source_id, result) = joined
            .map_err(|e| WallpaperError::fetch("<task>", format!("fetch task failed: {e}")))?;

        match result {
            Ok(thing) => {
                debug!("Fetched r/{}", source_id);
                pages[index] = Some(FeedPage { source_id, thing });
            }
            Err(e) => {
                tasks.abort_all();
                return Err(e);
            }
        }
    }

    info!("Fetched {} listing pages", pages.len());
    Ok(pages.into_iter().flatten().collect())
}
