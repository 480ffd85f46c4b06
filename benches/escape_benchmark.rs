//! Benchmarks for the XML text escaper.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xmlemit::escape_xml;

/// Builds a paragraph of clean prose that needs no escaping.
fn clean_text(paragraphs: usize) -> String {
    "The quick brown fox jumps over the lazy dog. "
        .repeat(paragraphs * 8)
}

/// Builds text where most characters trigger a replacement rule.
fn entity_heavy_text(paragraphs: usize) -> String {
    "profit & loss <Q1> \u{e9}tat\nrow\tend  ".repeat(paragraphs * 8)
}

fn bench_escape(c: &mut Criterion) {
    let clean = clean_text(16);
    let heavy = entity_heavy_text(16);

    c.bench_function("escape_clean_identity", |b| {
        b.iter(|| escape_xml(black_box(&clean), false))
    });

    c.bench_function("escape_clean_with_collapse", |b| {
        b.iter(|| escape_xml(black_box(&clean), true))
    });

    c.bench_function("escape_entity_heavy", |b| {
        b.iter(|| escape_xml(black_box(&heavy), false))
    });

    c.bench_function("escape_entity_heavy_with_collapse", |b| {
        b.iter(|| escape_xml(black_box(&heavy), true))
    });
}

criterion_group!(benches, bench_escape);
criterion_main!(benches);
