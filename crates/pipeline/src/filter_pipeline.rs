//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{
    DomainAllowListFilter, FileTypeFilter, MinimumResolutionFilter, ScoreThresholdFilter,
};
use crate::traits::Filter;
use anyhow::Result;
use listing::{Candidate, SelectionConfig};
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// A candidate survives the pipeline only if every filter accepts it.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ScoreThresholdFilter::new(100))
///     .add_filter(FileTypeFilter::new(vec!["jpg".into(), "png".into()]));
///
/// let filtered = pipeline.apply(candidates)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline described by a selection config.
    ///
    /// The score threshold always applies; allow-lists and the resolution
    /// constraint are only added when configured.
    pub fn from_config(config: &SelectionConfig) -> Self {
        let mut pipeline = Self::new().add_filter(ScoreThresholdFilter::new(config.score_threshold));

        if !config.domains.is_empty() {
            pipeline = pipeline.add_filter(DomainAllowListFilter::new(config.domains.clone()));
        }
        if !config.types.is_empty() {
            pipeline = pipeline.add_filter(FileTypeFilter::new(config.types.clone()));
        }
        if let Some(minimum) = config.resolution {
            pipeline = pipeline.add_filter(MinimumResolutionFilter::new(minimum));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - The filtered candidates after all filters
    /// * `Err` - If any filter fails
    pub fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
