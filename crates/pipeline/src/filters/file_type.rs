//! Filter to keep supported image formats.

use crate::traits::Filter;
use listing::Candidate;
use std::collections::HashSet;

/// Keeps candidates whose file type is in the allow-list.
///
/// An empty allow-list allows every type, including URLs with no
/// extension at all.
pub struct FileTypeFilter {
    types: HashSet<String>,
}

impl FileTypeFilter {
    /// Create a new FileTypeFilter; entries are lower-cased.
    pub fn new(types: Vec<String>) -> Self {
        Self {
            types: types.into_iter().map(|t| t.to_lowercase()).collect(),
        }
    }
}

impl Filter for FileTypeFilter {
    fn name(&self) -> &str {
        "FileTypeFilter"
    }

    fn accepts(&self, candidate: &Candidate) -> bool {
        self.types.is_empty() || self.types.contains(&candidate.file_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_filter() {
        let candidates = vec![
            Candidate::new("https://i.redd.it/a.JPG", "w"),
            Candidate::new("https://i.redd.it/b.gif", "w"),
            Candidate::new("https://imgur.com/gallery/xyz", "w"),
            Candidate::new("https://i.redd.it/c.png?width=640", "w"),
        ];

        let filter = FileTypeFilter::new(vec!["jpg".into(), "PNG".into()]);
        let filtered = filter.apply(candidates).unwrap();

        let types: Vec<&str> = filtered.iter().map(|c| c.file_type.as_str()).collect();
        assert_eq!(types, vec!["jpg", "png"]);
    }

    #[test]
    fn test_empty_type_list_allows_missing_extension() {
        let filter = FileTypeFilter::new(vec![]);
        assert!(filter.accepts(&Candidate::new("https://imgur.com/gallery/xyz", "w")));
    }
}
