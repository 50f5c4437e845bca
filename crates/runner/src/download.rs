//! HTTP download of the winning image.

use listing::{Result, WallpaperError};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};

use crate::collaborators::ImageDownloader;

const USER_AGENT: &str = concat!("wallfetch/", env!("CARGO_PKG_VERSION"));

/// Downloads with `reqwest` and writes with `tokio::fs`.
#[derive(Clone)]
pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| WallpaperError::configuration(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl ImageDownloader for HttpDownloader {
    #[instrument(skip(self))]
    async fn download(&self, url: &str, destination: &Path) -> Result<()> {
        let failed = |reason: String| WallpaperError::Download {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failed(format!("HTTP {status}")));
        }

        let bytes = response.bytes().await.map_err(|e| failed(e.to_string()))?;
        tokio::fs::write(destination, &bytes)
            .await
            .map_err(|e| failed(format!("cannot write {}: {}", destination.display(), e)))?;

        info!("Saved {} bytes to {}", bytes.len(), destination.display());
        Ok(())
    }
}
