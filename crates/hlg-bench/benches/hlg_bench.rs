//! Benchmarks for hlg-rs operations.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use hlg_display::{eotf, extended_srgb_to_rec2100_hlg, inv_eotf, HlgDisplay};
use hlg_math::Vec3;
use hlg_transfer::{hlg, srgb};

/// Benchmark the scalar transfer curves.
fn bench_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("curves");

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f64> = (0..*size).map(|i| i as f64 / *size as f64).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("hlg_oetf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| hlg::oetf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("hlg_inv_oetf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| hlg::inv_oetf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("srgb_eotf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::eotf(black_box(x))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark the whole-triple display transforms.
fn bench_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("display");

    let triples: Vec<Vec3> = (0..10000)
        .map(|i| {
            let t = i as f64 / 10000.0;
            Vec3::new(t, t * 0.8, t * 0.6)
        })
        .collect();

    group.throughput(Throughput::Elements(10000));

    let beta = 0.0279553;
    let gamma = 1.2;

    group.bench_function("eotf", |b| {
        b.iter(|| {
            triples
                .iter()
                .map(|&s| eotf(black_box(s), beta, gamma))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("inv_eotf", |b| {
        b.iter(|| {
            triples
                .iter()
                .map(|&s| inv_eotf(black_box(s), beta, gamma))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("srgb_to_hlg", |b| {
        b.iter(|| {
            triples
                .iter()
                .map(|&s| extended_srgb_to_rec2100_hlg(black_box(s)))
                .collect::<Vec<_>>()
        })
    });

    let display = HlgDisplay::reference();
    group.bench_function("signal_to_display", |b| {
        b.iter(|| {
            triples
                .iter()
                .map(|&s| display.signal_to_display(black_box(s)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_curves, bench_display);
criterion_main!(benches);
