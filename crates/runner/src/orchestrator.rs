//! # Wallpaper Orchestrator
//!
//! This module coordinates one wallpaper run:
//! 1. Ensure the wallpaper directory exists
//! 2. Fetch every configured subreddit concurrently
//! 3. Normalize listing pages into candidates
//! 4. Apply filters
//! 5. Reduce to a single winner (excluding downloaded files with shuffle on)
//! 6. Download the winner into the wallpaper directory
//! 7. Apply it as the desktop wallpaper
//! 8. Notify
//!
//! Steps 6 to 8 run in order and only after a winner exists.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use listing::{Candidate, Config, WallpaperError, url_file_path};
use pipeline::{FileProbe, FilterPipeline, FsProbe, Reducer};
use sources::{FeedSource, RedditSource, fetch_all, normalize};

use crate::collaborators::{ImageDownloader, Notification, Notifier, WallpaperSetter};
use crate::desktop::{SystemNotifier, SystemWallpaper};
use crate::download::HttpDownloader;

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub wallpaper: Candidate,
    pub path: PathBuf,
}

/// Orchestrator wired to the network and the real desktop.
pub type SystemOrchestrator<N = SystemNotifier> =
    WallpaperOrchestrator<RedditSource, FsProbe, HttpDownloader, SystemWallpaper, N>;

/// Main orchestrator that drives a run from config to applied wallpaper
pub struct WallpaperOrchestrator<S, P, D, W, N> {
    config: Config,
    source: Arc<S>,
    probe: Arc<P>,
    filter_pipeline: FilterPipeline,
    reducer: Reducer,
    downloader: D,
    setter: W,
    notifier: N,
}

impl SystemOrchestrator {
    /// Build an orchestrator backed by Reddit, the filesystem and the desktop.
    pub fn system(config: Config) -> Result<Self> {
        let source = RedditSource::new().context("Failed to create Reddit client")?;
        let downloader = HttpDownloader::new().context("Failed to create downloader")?;
        Ok(Self::new(
            config,
            source,
            FsProbe,
            downloader,
            SystemWallpaper,
            SystemNotifier,
        ))
    }
}

impl<S, P, D, W, N> WallpaperOrchestrator<S, P, D, W, N>
where
    S: FeedSource,
    P: FileProbe,
    D: ImageDownloader,
    W: WallpaperSetter,
    N: Notifier,
{
    pub fn new(config: Config, source: S, probe: P, downloader: D, setter: W, notifier: N) -> Self {
        let selection = config.selection();
        Self {
            filter_pipeline: FilterPipeline::from_config(&selection),
            reducer: Reducer::from_config(&selection),
            config,
            source: Arc::new(source),
            probe: Arc::new(probe),
            downloader,
            setter,
            notifier,
        }
    }

    /// Swap the notifier (builder pattern).
    pub fn with_notifier<M: Notifier>(self, notifier: M) -> WallpaperOrchestrator<S, P, D, W, M> {
        WallpaperOrchestrator {
            config: self.config,
            source: self.source,
            probe: self.probe,
            filter_pipeline: self.filter_pipeline,
            reducer: self.reducer,
            downloader: self.downloader,
            setter: self.setter,
            notifier,
        }
    }


    /// Main entry point: select, download, apply and notify.
    ///
    /// # Returns
    /// The applied wallpaper and where it was saved. An empty selection is
    /// `WallpaperError::EmptySelection` somewhere in the error chain.
    pub async fn run(&self) -> Result<RunOutcome> {
        let start_time = Instant::now();

        tokio::fs::create_dir_all(&self.config.directory)
            .await
            .with_context(|| {
                format!("Failed to create wallpaper directory {}", self.config.directory.display())
            })?;

        let wallpaper = self.select().await?;
        let path = self.target_path(&wallpaper)?;

        self.downloader
            .download(&wallpaper.url, &path)
            .await
            .context("Failed to download wallpaper")?;
        info!("Downloaded {} to {}", wallpaper.url, path.display());

        self.setter
            .apply(&path)
            .await
            .context("Failed to apply wallpaper")?;

        self.notifier
            .notify(&Notification::for_wallpaper(&wallpaper))
            .await
            .context("Failed to send notification")?;

        info!("Total time for wallpaper run: {:.2?}", start_time.elapsed());
        Ok(RunOutcome { wallpaper, path })
    }

    /// Fetch, filter and reduce without touching the desktop.
    pub async fn select(&self) -> Result<Candidate> {
        let start_time = Instant::now();

        let pages = fetch_all(
            Arc::clone(&self.source),
            &self.config.subreddits,
            self.config.sort,
            self.config.from,
        )
        .await
        .context("Failed to fetch listings")?;
        info!("Fetched {} listing pages", pages.len());

        let candidates = normalize(pages);
        info!("Normalized {} candidates", candidates.len());

        let filtered = self
            .filter_pipeline
            .apply(candidates)
            .context("Failed to apply filters")?;
        info!("Applied filters, candidates remaining: {}", filtered.len());

        let winner = self.reducer.select(filtered, Arc::clone(&self.probe)).await;
        if winner.is_sentinel() {
            return Err(WallpaperError::EmptySelection.into());
        }

        info!(
            "Selected {} from r/{} (score {}) in {:.2?}",
            winner.url,
            winner.source_id,
            winner.score,
            start_time.elapsed()
        );
        Ok(winner)
    }

    fn target_path(&self, wallpaper: &Candidate) -> Result<PathBuf> {
        url_file_path(&self.config.directory, &wallpaper.url).ok_or_else(|| {
            WallpaperError::Download {
                url: wallpaper.url.clone(),
                reason: "URL has no file name".to_string(),
            }
            .into()
        })
    }
}
