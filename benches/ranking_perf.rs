//! Criterion benchmarks for per-query ranking.
//!
//! Every query refits the index from scratch, so fit and score both sit on
//! the hot path. Catalog tables stay in the low thousands of rows.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use skillkb::search::{Bm25Index, Bm25Params, DomainRouter, Tokenizer};

const WORDS: &[&str] = &[
    "neon", "portrait", "cinematic", "watercolor", "studio", "lighting", "gltf", "loader",
    "particle", "shader", "animation", "product", "poster", "golden", "hour", "vr",
];

fn corpus(rows: usize) -> Vec<String> {
    (0..rows)
        .map(|i| {
            (0..24)
                .map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn ranking_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("bm25");

    for rows in [100usize, 1_000, 5_000] {
        let docs = corpus(rows);
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(BenchmarkId::new("fit", rows), &docs, |b, docs| {
            b.iter(|| Bm25Index::fit(Tokenizer::new(1), Bm25Params::default(), black_box(docs)));
        });

        let index = Bm25Index::fit(Tokenizer::new(1), Bm25Params::default(), &docs);
        group.bench_with_input(BenchmarkId::new("score", rows), &index, |b, index| {
            b.iter(|| index.score(black_box("neon portrait golden hour")));
        });
    }

    group.finish();
}

fn tokenizer_benchmarks(c: &mut Criterion) {
    let text = "Cinematic, neon-lit portrait; golden-hour rim light (85mm, f/1.4) -- moody & vivid!";
    let tokenizer = Tokenizer::new(2);
    c.bench_function("tokenize_prompt", |b| {
        b.iter(|| tokenizer.tokenize(black_box(text)));
    });
}

fn router_benchmarks(c: &mut Criterion) {
    let router = DomainRouter::from_static(
        &[
            ("use-case", &["thumbnail", "poster", "youtube", "banner"]),
            ("style", &["style", "anime", "watercolor", "cyberpunk"]),
            ("platform", &["midjourney", "stable diffusion", "nano banana"]),
        ],
        "style",
    );
    c.bench_function("route_query", |b| {
        b.iter(|| router.detect(black_box("cyberpunk youtube thumbnail for nano banana")));
    });
}

criterion_group!(benches, ranking_benchmarks, tokenizer_benchmarks, router_benchmarks);
criterion_main!(benches);
