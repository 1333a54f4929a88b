//! # Calculator Benchmarks
//!
//! Performance benchmarks for aurum-core calculations.
//!
//! Run with: `cargo bench -p aurum-core`

use aurum_core::primitives::SCAN_ORDER;
use aurum_core::{
    Karat, MixComposition, StandardTable, calculate_gold_purity, classify_mix, closest_karat,
    format_currency,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_lookup(c: &mut Criterion) {
    let table = StandardTable::global();
    c.bench_function("lookup_all_karats", |b| {
        b.iter(|| {
            for k in SCAN_ORDER {
                let _ = black_box(table.get(Karat(k)));
            }
        });
    });
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_purity");

    for (from, to) in [(24, 18), (18, 24), (22, 8)] {
        let label = format!("{from}K->{to}K");
        group.bench_with_input(BenchmarkId::from_parameter(label), &(from, to), |b, &(f, t)| {
            b.iter(|| calculate_gold_purity(black_box(10.0), Karat(f), Karat(t)));
        });
    }

    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    group.bench_function("closest_karat_sweep", |b| {
        b.iter(|| {
            for pct in 0..=100 {
                black_box(closest_karat(pct as f64));
            }
        });
    });

    let mix = MixComposition::new(75.0, 12.5, 12.5);
    group.bench_function("classify_mix", |b| {
        b.iter(|| classify_mix(black_box(&mix)));
    });

    group.finish();
}

fn bench_formatting(c: &mut Criterion) {
    c.bench_function("format_currency", |b| {
        b.iter(|| format_currency(black_box(12_345_678.9)));
    });
}

criterion_group!(
    benches,
    bench_lookup,
    bench_conversion,
    bench_classification,
    bench_formatting
);
criterion_main!(benches);
