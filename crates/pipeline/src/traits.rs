//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use anyhow::Result;
use listing::Candidate;
use rayon::prelude::*;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be evaluated from rayon workers
/// - Filters take ownership of the Vec<Candidate> and return a filtered Vec
/// - Surviving candidates keep their relative order; the reducer's
///   tie-break depends on it
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single candidate passes this filter.
    fn accepts(&self, candidate: &Candidate) -> bool;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - The filtered candidates, order preserved
    /// * `Err` - If filtering fails
    fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        Ok(candidates
            .into_par_iter()
            .filter(|candidate| self.accepts(candidate))
            .collect())
    }
}
