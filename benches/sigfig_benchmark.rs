// ============================================================================
// Significant-Figure Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Counting - significant-figure counting across input widths
// 2. Rounding - round-half-up, including worst-case carry chains
// 3. Expansion - exponential literal expansion
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sigfig_engine::prelude::*;

// ============================================================================
// Counting Benchmarks
// ============================================================================

fn benchmark_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("significant_figures");

    for width in [8usize, 64, 512].iter() {
        let input = format!("0.{}", "142857".repeat(width / 6 + 1));

        group.bench_with_input(BenchmarkId::new("fractional", width), &input, |b, input| {
            b.iter(|| black_box(significant_figures(input.as_str()).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Rounding Benchmarks
// ============================================================================

fn benchmark_rounding(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_to_figures");

    for width in [8usize, 64, 512].iter() {
        // Every digit a nine: the carry walks the full buffer
        let nines = format!("9.{}", "9".repeat(*width));
        group.bench_with_input(BenchmarkId::new("carry_chain", width), &nines, |b, input| {
            b.iter(|| black_box(round_to_figures(input.as_str(), *width).unwrap()));
        });

        let mixed = format!("3.{}", "10194".repeat(width / 5 + 1));
        group.bench_with_input(BenchmarkId::new("truncating", width), &mixed, |b, input| {
            b.iter(|| black_box(round_to_figures(input.as_str(), 5).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Expansion Benchmarks
// ============================================================================

fn benchmark_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_exponential");

    for exponent in [8usize, 128, 2048].iter() {
        let literal = format!("1.0430812624750985e-{}", exponent);

        group.bench_with_input(
            BenchmarkId::new("negative_exponent", exponent),
            &literal,
            |b, literal| {
                b.iter(|| black_box(expand_exponential(literal.as_str()).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_counting,
    benchmark_rounding,
    benchmark_expansion
);
criterion_main!(benches);
