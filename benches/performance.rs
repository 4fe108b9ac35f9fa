//! Performance benchmarks for the emoji picker.
//!
//! Run with: cargo bench
//!
//! Target performance:
//! - Catalog build: < 20ms
//! - Search latency: < 1ms per keystroke

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use emoji_picker::{Catalog, Picker};

/// Benchmark building the catalog from curated data and Unicode ranges.
fn bench_catalog_build(c: &mut Criterion) {
    c.bench_function("catalog_build", |b| b.iter(|| black_box(Catalog::build())));
}

/// Benchmark representative picker queries.
fn bench_search(c: &mut Criterion) {
    let picker = Picker::new();

    let queries = [
        ("empty", ""),
        ("word", "circle"),
        ("prefix", "c"),
        ("multi_token", "check done"),
        ("shortcode", ":bug:"),
        ("codepoint", "u+1f600"),
        ("symbol", "\u{1f680}"),
        ("no_match", "zzzzzz"),
    ];

    let mut group = c.benchmark_group("search");

    for (name, query) in queries {
        group.bench_with_input(BenchmarkId::from_parameter(name), &query, |b, query| {
            b.iter(|| black_box(picker.search(Some(black_box(query)), None)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_catalog_build, bench_search);
criterion_main!(benches);
