//! Filter to drop low-scoring posts.
//!
//! Posts without a score (reported as zero) are never thresholded: only a
//! non-zero score is compared against the minimum.

use crate::traits::Filter;
use listing::Candidate;

/// Removes candidates whose non-zero score is below the threshold.
pub struct ScoreThresholdFilter {
    min_score: i64,
}

impl ScoreThresholdFilter {
    /// Create a new ScoreThresholdFilter.
    ///
    /// # Arguments
    /// * `min_score` - Minimum score for scored posts (typically 100)
    pub fn new(min_score: i64) -> Self {
        Self { min_score }
    }
}

impl Filter for ScoreThresholdFilter {
    fn name(&self) -> &str {
        "ScoreThresholdFilter"
    }

    fn accepts(&self, candidate: &Candidate) -> bool {
        candidate.score == 0 || candidate.score >= self.min_score
    }
}
