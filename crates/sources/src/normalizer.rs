//! Candidate normalization.
//!
//! Flattens fetched listing pages into one candidate sequence: sources in
//! request order, posts in listing order. Non-link nodes are dropped without
//! complaint.

use listing::Candidate;
use tracing::debug;

use crate::fetch::FeedPage;

/// Turn fetched pages into candidates.
pub fn normalize(pages: Vec<FeedPage>) -> Vec<Candidate> {
    let candidates: Vec<Candidate> = pages
        .into_iter()
        .flat_map(|page| {
            let source_id = page.source_id;
            page.thing
                .into_links()
                .into_iter()
                .map(move |link| Candidate::from_link(link, &source_id))
        })
        .collect();

    debug!("Normalized {} candidates", candidates.len());
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use listing::{Resolution, Thing};

    fn page(source_id: &str, body: &str) -> FeedPage {
        FeedPage {
            source_id: source_id.to_string(),
            thing: Thing::from_json(body).unwrap(),
        }
    }

    #[test]
    fn test_normalize_concatenates_in_source_order() {
        let pages = vec![
            page(
                "wallpapers",
                r#"{"kind": "Listing", "data": {"children": [
                    {"kind": "t3", "data": {"url": "https://i.redd.it/a.jpg", "subreddit": "wallpapers", "domain": "I.REDD.IT", "score": 10}},
                    {"kind": "t1", "data": {"body": "comment"}},
                    {"kind": "t3", "data": {"url": "https://i.redd.it/b.PNG", "subreddit": "wallpapers", "title": "B [2560x1440]"}}
                ]}}"#,
            ),
            page(
                "earthporn",
                r#"{"kind": "Listing", "data": {"children": [
                    {"kind": "t3", "data": {"url": "https://i.imgur.com/c.jpeg"}}
                ]}}"#,
            ),
        ];

        let candidates = normalize(pages);

        let urls: Vec<&str> = candidates.iter().map(|c| c.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://i.redd.it/a.jpg",
                "https://i.redd.it/b.PNG",
                "https://i.imgur.com/c.jpeg"
            ]
        );
        assert_eq!(candidates[0].domain, "i.redd.it");
        assert_eq!(candidates[1].file_type, "png");
        assert_eq!(candidates[1].resolution, Some(Resolution::new(2560, 1440)));
        // No subreddit in the payload: falls back to the requested one
        assert_eq!(candidates[2].source_id, "earthporn");
    }

    #[test]
    fn test_normalize_drops_non_listing_pages() {
        let pages = vec![page("wallpapers", r#"{"kind": "t5", "data": {}}"#)];
        assert!(normalize(pages).is_empty());
    }
}
