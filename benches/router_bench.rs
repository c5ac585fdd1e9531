//! Benchmarks for `SourceRegistry` lookup and request validation.
//!
//! Measures prefix matching across the built-in station table, which the host
//! runs for every request it considers routing here.
//!
//! Run with: `cargo bench --bench router_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use newscast::{NewsConfig, NewsResolver, SourceRegistry, StreamRequest};

// ---------------------------------------------------------------------------
// URL datasets
// ---------------------------------------------------------------------------

/// Requests that hit early registry entries.
const EARLY_HITS: &[&str] = &[
    "https://www.tsf.pt/stream",
    "http://feeds.feedburner.com/gpbnews",
    "https://www.raiplaysound.it/programmi/gr1",
];

/// Requests that only the last entry claims (full scan before the hit).
const LATE_HITS: &[&str] = &[
    "https://www.npr.org/rss/podcast.php?id=500005",
    "https://www.npr.org/podcasts/500005/npr-news-now",
];

/// Tagged requests.
const TAGGED: &[&str] = &[
    "news//https://www.ft.com",
    "news//https://www.npr.org/podcasts/1031233995/s-d-p-b-news",
    "news//https://www.abc.net.au/news",
];

/// Requests no source claims.
const MISSES: &[&str] = &[
    "https://example.com/page",
    "https://www.npr.org/sections/news/",
    "https://newsweek.com/latest",
    "https://www.bbc.co.uk/sounds/play/live:bbc_world_service",
    "",
];

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_registry_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_lookup");
    let registry = SourceRegistry::builtin();

    group.bench_function("early_hit", |b| {
        b.iter(|| {
            for url in EARLY_HITS {
                black_box(registry.lookup(black_box(url)));
            }
        });
    });

    group.bench_function("late_hit", |b| {
        b.iter(|| {
            for url in LATE_HITS {
                black_box(registry.lookup(black_box(url)));
            }
        });
    });

    group.bench_function("full_miss_scan", |b| {
        b.iter(|| {
            for url in MISSES {
                black_box(registry.lookup(black_box(url)));
            }
        });
    });

    group.finish();
}

fn bench_request_parse(c: &mut Criterion) {
    c.bench_function("request_parse", |b| {
        b.iter(|| {
            for raw in TAGGED.iter().chain(MISSES) {
                black_box(StreamRequest::parse(black_box(raw)));
            }
        });
    });
}

fn bench_validate(c: &mut Criterion) {
    let resolver = NewsResolver::new(&NewsConfig::default()).expect("resolver should build");

    let mixed: Vec<&str> = EARLY_HITS
        .iter()
        .chain(LATE_HITS)
        .chain(TAGGED)
        .chain(MISSES)
        .copied()
        .collect();

    c.bench_function("validate_mixed", |b| {
        b.iter(|| {
            for request in &mixed {
                black_box(resolver.validate(black_box(request)));
            }
        });
    });
}

criterion_group!(benches, bench_registry_lookup, bench_request_parse, bench_validate);
criterion_main!(benches);
