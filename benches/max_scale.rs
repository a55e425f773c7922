//! Max-scale benchmarks over batches of random affine matrices.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vgmath::{Mat2D, MaxScale};

const BATCH_SIZES: &[usize] = &[64, 1_024, 16_384, 262_144];

fn generate_matrices(len: usize) -> Vec<Mat2D> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| {
            Mat2D::from_rotation(rng.random_range(0.0f32..std::f32::consts::TAU))
                * Mat2D::from_scale(rng.random_range(0.1f32..10.0), rng.random_range(0.1f32..10.0))
                * Mat2D::new(
                    1.0,
                    rng.random_range(-1.0f32..1.0),
                    rng.random_range(-1.0f32..1.0),
                    1.0,
                    0.0,
                    0.0,
                )
        })
        .collect()
}

fn benchmark_max_scale(c: &mut Criterion) {
    let single = generate_matrices(1)[0];
    c.bench_function("find_max_scale single", |b| {
        b.iter(|| black_box(black_box(single).find_max_scale()))
    });
    c.bench_function("min_max_scales single", |b| {
        b.iter(|| black_box(black_box(single).min_max_scales()))
    });

    for &size in BATCH_SIZES {
        let mut group = c.benchmark_group(format!("Max scale x{size}"));
        group.throughput(Throughput::Elements(size as u64));

        let mats = generate_matrices(size);
        let input = mats.as_slice();

        group.bench_with_input(BenchmarkId::new("Sequential", size), input, |b, input| {
            b.iter(|| black_box(black_box(input).max_scales()))
        });

        group.bench_with_input(BenchmarkId::new("Parallel", size), input, |b, input| {
            b.iter(|| black_box(black_box(input).par_max_scales()))
        });

        group.finish();
    }
}

criterion_group!(benches, benchmark_max_scale);
criterion_main!(benches);
