//! Error types for a wallpaper run.
//!
//! One enum covers every stage so the CLI can tell a fatal configuration
//! problem apart from "nothing matched" without string matching. Probe
//! failures have no variant: the reducer absorbs them.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can end a run.
#[derive(Error, Debug)]
pub enum WallpaperError {
    /// Bad configuration value (unknown sort mode, unreadable config file, ...)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A feed source could not be fetched or decoded
    #[error("Failed to fetch r/{source_id}: {reason}")]
    Fetch { source_id: String, reason: String },

    /// Filtering and exclusion left nothing to pick from
    #[error("No matching wallpaper found")]
    EmptySelection,

    /// The winning image could not be downloaded or written
    #[error("Failed to download {url}: {reason}")]
    Download { url: String, reason: String },

    /// The OS refused to set the wallpaper
    #[error("Failed to apply wallpaper {}: {reason}", path.display())]
    Apply { path: PathBuf, reason: String },

    /// The desktop notification could not be shown
    #[error("Failed to send notification: {0}")]
    Notify(String),

    /// I/O error outside of the probe (directory creation, config reads)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WallpaperError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration(reason.into())
    }

    pub fn fetch(source_id: impl Into<String>, reason: impl ToString) -> Self {
        Self::Fetch {
            source_id: source_id.into(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, WallpaperError>;
