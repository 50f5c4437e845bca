//! Side-effecting steps that follow selection.
//!
//! Download, apply and notify run strictly in sequence; each trait is the
//! seam a test replaces with a recording fake.

use listing::{Candidate, Result};
use std::future::Future;
use std::path::Path;

/// Fetches the winning image and writes it to disk.
pub trait ImageDownloader: Send + Sync {
    fn download(&self, url: &str, destination: &Path) -> impl Future<Output = Result<()>> + Send;
}

/// Sets a local image as the desktop wallpaper.
pub trait WallpaperSetter: Send + Sync {
    fn apply(&self, path: &Path) -> impl Future<Output = Result<()>> + Send;
}

/// Shows a desktop notification.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification) -> impl Future<Output = Result<()>> + Send;
}

/// Content of the "new wallpaper" notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub subtitle: String,
    pub message: String,
    pub link: String,
}

impl Notification {
    /// Describe a freshly applied wallpaper.
    pub fn for_wallpaper(wallpaper: &Candidate) -> Self {
        let subtitle = if wallpaper.author.is_empty() {
            format!("r/{}", wallpaper.source_id)
        } else {
            format!("r/{} by u/{}", wallpaper.source_id, wallpaper.author)
        };

        Self {
            title: "New wallpaper".to_string(),
            subtitle,
            message: wallpaper.title.clone(),
            link: wallpaper.permalink.clone(),
        }
    }
}
