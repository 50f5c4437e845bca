//! Benchmarks for filtering and folding
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic candidate set about the size of a few listing pages.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use listing::{Candidate, SelectionConfig, SortMode};
use pipeline::{FilterPipeline, fold_winner};

fn synthetic_candidates(count: usize) -> Vec<Candidate> {
    (0..count)
        .map(|i| {
            let ext = if i % 3 == 0 { "png" } else { "jpg" };
            Candidate::new(format!("https://i.redd.it/{i}.{ext}"), "wallpapers")
                .with_domain(if i % 5 == 0 { "i.imgur.com" } else { "i.redd.it" })
                .with_title(format!("Wallpaper {i} [{}x{}]", 1280 + i % 4 * 640, 720 + i % 4 * 360))
                .with_score((i as i64 * 37) % 5000)
                .with_votes((i as i64 * 13) % 900, (i as i64 * 7) % 400)
                .with_created_at(1_700_000_000 + i as i64 * 600)
        })
        .collect()
}

fn bench_filter_pipeline(c: &mut Criterion) {
    let candidates = synthetic_candidates(500);
    let config = SelectionConfig {
        types: vec!["jpg".to_string(), "png".to_string()],
        domains: vec!["i.redd.it".to_string()],
        ..SelectionConfig::default()
    };
    let pipeline = FilterPipeline::from_config(&config);

    c.bench_function("filter_pipeline_500", |b| {
        b.iter(|| {
            let filtered = pipeline.apply(black_box(candidates.clone())).unwrap();
            black_box(filtered)
        })
    });
}

fn bench_fold(c: &mut Criterion) {
    let candidates = synthetic_candidates(500);

    for sort in [SortMode::Top, SortMode::Hot, SortMode::Controversial, SortMode::New] {
        c.bench_function(&format!("fold_{sort}_500"), |b| {
            b.iter(|| black_box(fold_winner(black_box(candidates.clone()), sort)))
        });
    }
}

criterion_group!(benches, bench_filter_pipeline, bench_fold);
criterion_main!(benches);
