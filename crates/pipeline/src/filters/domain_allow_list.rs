//! Filter to keep images hosted on allowed domains.

use crate::traits::Filter;
use listing::Candidate;
use std::collections::HashSet;

/// Keeps candidates whose domain is in the allow-list.
///
/// An empty allow-list allows every domain.
pub struct DomainAllowListFilter {
    domains: HashSet<String>,
}

impl DomainAllowListFilter {
    /// Create a new DomainAllowListFilter; entries are lower-cased.
    pub fn new(domains: Vec<String>) -> Self {
        Self {
            domains: domains.into_iter().map(|d| d.to_lowercase()).collect(),
        }
    }
}

impl Filter for DomainAllowListFilter {
    fn name(&self) -> &str {
        "DomainAllowListFilter"
    }

    fn accepts(&self, candidate: &Candidate) -> bool {
        self.domains.is_empty() || self.domains.contains(&candidate.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_allow_list_filter() {
        let candidates = vec![
            Candidate::new("https://i.redd.it/a.jpg", "w").with_domain("i.redd.it"),
            Candidate::new("https://i.imgur.com/b.jpg", "w").with_domain("I.IMGUR.COM"),
            Candidate::new("https://example.com/c.jpg", "w").with_domain("example.com"),
        ];

        let filter = DomainAllowListFilter::new(vec!["I.Redd.It".into(), "i.imgur.com".into()]);
        let filtered = filter.apply(candidates).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].domain, "i.redd.it");
        assert_eq!(filtered[1].domain, "i.imgur.com");
    }

    #[test]
    fn test_empty_allow_list_allows_all() {
        let filter = DomainAllowListFilter::new(vec![]);
        assert!(filter.accepts(&Candidate::new("https://any.where/x.jpg", "w")));
    }
}
