//! Criterion benchmarks for triangulation and alpha-shape extraction.
//! Focus sizes: n in {500, 2000, 5000} uniform points in [0, 4]², plus the
//! same clouds with sparse noise over [-20, 24]² (many open boundary chains).

use alphahull::{alpha_shape_polygons, delaunay_triangulation, euclidean_distance, Point};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn uniform_cloud(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(4.0 * rng.gen::<f64>(), 4.0 * rng.gen::<f64>()))
        .collect()
}

fn noisy_cloud(n: usize, seed: u64) -> Vec<Point> {
    let mut pts = uniform_cloud(n, seed);
    let mut rng = StdRng::seed_from_u64(seed + 1);
    pts.extend(
        (0..n / 7).map(|_| Point::new(rng.gen_range(-20.0..24.0), rng.gen_range(-20.0..24.0))),
    );
    pts
}

fn bench_alpha(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_shape");
    group.sample_size(20);
    for &n in &[500usize, 2000, 5000] {
        group.bench_with_input(BenchmarkId::new("delaunay", n), &n, |b, &n| {
            b.iter_batched(
                || uniform_cloud(n, 43),
                |pts| {
                    let _tris = delaunay_triangulation(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("extract", n), &n, |b, &n| {
            b.iter_batched(
                || uniform_cloud(n, 44),
                |pts| {
                    let _polys = alpha_shape_polygons(&pts, euclidean_distance).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("extract_noisy", n), &n, |b, &n| {
            b.iter_batched(
                || noisy_cloud(n, 45),
                |pts| {
                    let _polys = alpha_shape_polygons(&pts, euclidean_distance).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_alpha);
criterion_main!(benches);
