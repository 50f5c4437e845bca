//! Runner for a complete wallpaper run.
//!
//! `WallpaperOrchestrator` wires a feed source, the selection pipeline and
//! the desktop collaborators (download, apply, notify) together. The
//! `SystemOrchestrator` alias is the production wiring.

pub mod collaborators;
pub mod desktop;
pub mod download;
pub mod orchestrator;

pub use collaborators::{ImageDownloader, Notification, Notifier, WallpaperSetter};
pub use desktop::{SilentNotifier, SystemNotifier, SystemWallpaper};
pub use download::HttpDownloader;
pub use orchestrator::{RunOutcome, SystemOrchestrator, WallpaperOrchestrator};
