//! Integration tests for the pipeline.
//!
//! These tests verify that filters and the reducer work together
//! in a realistic scenario.

use listing::{Candidate, Config, PartialConfig, Resolution, SortMode};
use pipeline::filters::*;
use pipeline::{FilterPipeline, FsProbe, Reducer};
use std::sync::Arc;

fn create_test_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new("https://i.redd.it/low.jpg", "wallpapers")
            .with_domain("i.redd.it")
            .with_title("Low score [3840x2160]")
            .with_score(50)
            .with_created_at(1_700_000_000),
        Candidate::new("https://i.redd.it/best.jpg", "wallpapers")
            .with_domain("i.redd.it")
            .with_title("Best [3840x2160]")
            .with_score(200)
            .with_created_at(1_700_000_100),
        Candidate::new("https://i.imgur.com/runner-up.png", "earthporn")
            .with_domain("i.imgur.com")
            .with_title("Runner up [2560x1440]")
            .with_score(150)
            .with_created_at(1_700_000_200),
    ]
}

fn selection_for(partial: PartialConfig) -> listing::SelectionConfig {
    Config::from_partial(&partial).unwrap().selection()
}

#[tokio::test]
async fn test_top_without_shuffle_picks_highest_score() {
    let selection = selection_for(PartialConfig {
        sort: Some("top".to_string()),
        score: Some(100),
        shuffle: Some(false),
        ..PartialConfig::default()
    });

    let filtered = FilterPipeline::from_config(&selection)
        .apply(create_test_candidates())
        .unwrap();
    assert_eq!(filtered.len(), 2, "The score-50 candidate should be filtered");

    let winner = Reducer::from_config(&selection)
        .select(filtered, Arc::new(FsProbe))
        .await;
    assert_eq!(winner.score, 200);
}

#[tokio::test]
async fn test_new_picks_latest_after_filtering() {
    let selection = selection_for(PartialConfig {
        sort: Some("new".to_string()),
        score: Some(0),
        ..PartialConfig::default()
    });

    let filtered = FilterPipeline::from_config(&selection)
        .apply(create_test_candidates())
        .unwrap();
    let winner = Reducer::from_config(&selection)
        .select(filtered, Arc::new(FsProbe))
        .await;

    assert_eq!(winner.created_at, 1_700_000_200);
}

#[tokio::test]
async fn test_shuffle_skips_files_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("best.jpg"), b"already here").unwrap();

    let selection = selection_for(PartialConfig {
        shuffle: Some(true),
        directory: Some(dir.path().to_path_buf()),
        ..PartialConfig::default()
    });

    let filtered = FilterPipeline::from_config(&selection)
        .apply(create_test_candidates())
        .unwrap();
    let winner = Reducer::from_config(&selection)
        .select(filtered, Arc::new(FsProbe))
        .await;

    assert_eq!(winner.url, "https://i.imgur.com/runner-up.png");
}

#[tokio::test]
async fn test_shuffle_with_everything_downloaded_selects_nothing() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["low.jpg", "best.jpg", "runner-up.png"] {
        std::fs::write(dir.path().join(name), b"x").unwrap();
    }

    let winner = Reducer::new(SortMode::Top)
        .with_shuffle(dir.path())
        .select(create_test_candidates(), Arc::new(FsProbe))
        .await;

    assert!(winner.is_sentinel());
}

#[test]
fn test_manual_pipeline_matches_config_pipeline() {
    let pipeline = FilterPipeline::new()
        .add_filter(ScoreThresholdFilter::new(100))
        .add_filter(DomainAllowListFilter::new(vec!["i.redd.it".to_string()]))
        .add_filter(FileTypeFilter::new(vec!["jpg".to_string()]))
        .add_filter(MinimumResolutionFilter::new(Resolution::new(3840, 2160)));

    let filtered = pipeline.apply(create_test_candidates()).unwrap();

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].url, "https://i.redd.it/best.jpg");
}

#[test]
fn test_default_config_allows_every_file_type() {
    let selection = selection_for(PartialConfig::default());
    let candidates = vec![
        Candidate::new("https://i.redd.it/loop.gif", "wallpapers").with_score(500),
        Candidate::new("https://i.redd.it/still.webp", "wallpapers").with_score(500),
    ];

    let filtered = FilterPipeline::from_config(&selection).apply(candidates).unwrap();

    assert_eq!(filtered.len(), 2);
}
