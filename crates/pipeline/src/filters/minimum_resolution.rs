//! Filter to ensure a minimum declared resolution.
//!
//! Resolution comes from the post title (`[3840x2160]`), so a post that
//! declares nothing cannot satisfy the constraint.

use crate::traits::Filter;
use listing::{Candidate, Resolution};

/// Removes candidates smaller than the minimum in either dimension.
pub struct MinimumResolutionFilter {
    minimum: Resolution,
}

impl MinimumResolutionFilter {
    pub fn new(minimum: Resolution) -> Self {
        Self { minimum }
    }
}

impl Filter for MinimumResolutionFilter {
    fn name(&self) -> &str {
        "MinimumResolutionFilter"
    }

    fn accepts(&self, candidate: &Candidate) -> bool {
        candidate
            .resolution
            .is_some_and(|resolution| resolution.covers(&self.minimum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> Candidate {
        Candidate::new("https://i.redd.it/a.jpg", "w").with_title(title)
    }

    #[test]
    fn test_minimum_resolution_filter() {
        let candidates = vec![
            titled("4k [3840x2160]"),
            titled("exact [1920x1080]"),
            titled("too narrow [1280x1440]"),
            titled("too short [2560x720]"),
            titled("undeclared"),
        ];

        let filter = MinimumResolutionFilter::new(Resolution::new(1920, 1080));
        let filtered = filter.apply(candidates).unwrap();

        let titles: Vec<&str> = filtered.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["4k [3840x2160]", "exact [1920x1080]"]);
    }
}
