//! Example: Fetch and normalize candidates for a few subreddits
//!
//! Run with: cargo run --package sources --example fetch_candidates -- wallpapers earthporn
//!
//! This example shows how to:
//! 1. Build a RedditSource
//! 2. Fetch every subreddit concurrently
//! 3. Normalize the listing pages into candidates
//! 4. Display the results

use listing::{SortMode, TimeWindow};
use sources::{RedditSource, fetch_all, normalize};
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let mut subreddits: Vec<String> = std::env::args().skip(1).collect();
    if subreddits.is_empty() {
        subreddits.push("wallpapers".to_string());
    }

    println!("=== wallfetch candidate fetch example ===\n");

    let source = Arc::new(RedditSource::new()?);
    let start = Instant::now();
    let pages = fetch_all(source, &subreddits, SortMode::Top, TimeWindow::Week).await?;
    println!("Fetched {} pages in {:?}\n", pages.len(), start.elapsed());

    let candidates = normalize(pages);
    println!("Normalized {} candidates:", candidates.len());
    for (i, candidate) in candidates.iter().take(15).enumerate() {
        println!(
            "  {:2}. [{}] {} (score {}, type '{}', resolution {})",
            i + 1,
            candidate.source_id,
            candidate.title,
            candidate.score,
            candidate.file_type,
            candidate
                .resolution
                .map(|r| r.to_string())
                .unwrap_or_else(|| "?".to_string())
        );
    }

    Ok(())
}
