//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod domain_allow_list;
pub mod file_type;
pub mod minimum_resolution;
pub mod score_threshold;

// Re-export for convenience
pub use domain_allow_list::DomainAllowListFilter;
pub use file_type::FileTypeFilter;
pub use minimum_resolution::MinimumResolutionFilter;
pub use score_threshold::ScoreThresholdFilter;
