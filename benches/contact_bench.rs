use contact_matrix::matrix::DistanceMatrix;
use contact_matrix::raster::rasterize;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_atoms(n: usize) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| {
            Vec3::new(
                rng.random_range(-40.0..40.0),
                rng.random_range(-40.0..40.0),
                rng.random_range(-40.0..40.0),
            )
        })
        .collect()
}

fn distance_matrix_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_matrix");
    for count in [100, 500, 1000, 2000].iter() {
        let atoms = random_atoms(*count);
        group.bench_function(format!("{}_atoms", count), |b| {
            b.iter(|| black_box(DistanceMatrix::compute(black_box(&atoms))))
        });
    }
    group.finish();
}

fn rasterize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");
    for count in [100, 500, 1000, 2000].iter() {
        let matrix = DistanceMatrix::compute(&random_atoms(*count));
        group.bench_function(format!("{}_atoms", count), |b| {
            b.iter(|| black_box(rasterize(black_box(&matrix), 10.0)))
        });
    }
    group.finish();
}

criterion_group!(benches, distance_matrix_benchmark, rasterize_benchmark);
criterion_main!(benches);
