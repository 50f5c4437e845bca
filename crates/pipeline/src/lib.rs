//! Selection pipeline for wallpaper candidates.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - Scoring functions (`heat`, `controversy`)
//! - Reducer for picking a single winner, optionally skipping images that
//!   were already downloaded
//!
//! ## Architecture
//! The pipeline processes candidates in stages:
//! 1. Filters remove unwanted candidates (low score, wrong host, wrong format, too small)
//! 2. With shuffle on, the reducer probes the wallpaper directory and drops
//!    candidates already on disk
//! 3. The reducer folds the rest into a winner using the configured sort mode
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, FsProbe, Reducer};
//! use std::sync::Arc;
//!
//! let selection = config.selection();
//! let filtered = FilterPipeline::from_config(&selection).apply(candidates)?;
//! let winner = Reducer::from_config(&selection)
//!     .select(filtered, Arc::new(FsProbe))
//!     .await;
//! if winner.is_sentinel() {
//!     // nothing matched
//! }
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod probe;
pub mod reducer;
pub mod scoring;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use probe::{FileProbe, FsProbe};
pub use reducer::{Reducer, fold_winner, outranks};
pub use scoring::{controversy, heat};
pub use traits::Filter;
