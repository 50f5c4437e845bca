//! # Listing Crate
//!
//! Domain model shared by every stage of a wallpaper run.
//!
//! ## Main Components
//!
//! - **types**: `Candidate` and `Resolution`
//! - **envelope**: defensive decoding of the `{kind, data}` listing tree
//! - **parser**: file type, file name and resolution extraction
//! - **config**: layered, validated run configuration
//! - **error**: the `WallpaperError` taxonomy
//!
//! ## Example Usage
//!
//! ```ignore
//! use listing::{Config, PartialConfig, Thing, Candidate};
//!
//! let config = Config::from_partial(&PartialConfig::load_default_file()?)?;
//! let thing = Thing::from_json(&body)?;
//! let candidates: Vec<Candidate> = thing
//!     .into_links()
//!     .into_iter()
//!     .map(|link| Candidate::from_link(link, "wallpapers"))
//!     .collect();
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use config::{Config, PartialConfig, SelectionConfig, SortMode, TimeWindow};
pub use envelope::{LinkData, ListingData, Thing};
pub use error::{Result, WallpaperError};
pub use parser::{parse_file_type, parse_resolution, url_file_name, url_file_path};
pub use types::{Candidate, Resolution, Timestamp};
