//! Criterion benchmarks for the geometry helpers and zoo filtering.
//! Results land under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use lessons::geometry::{hypotenuse, roundings};
use lessons::zoo::{Animal, Species, Zoo};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_zoo(n: usize, seed: u64) -> Zoo {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|k| {
            let species = Species::ALL[rng.gen_range(0..Species::ALL.len())];
            Animal::new(format!("a{k}"), rng.gen_range(0..30), species)
        })
        .collect()
}

fn bench_geometry(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let legs: Vec<(f64, f64)> = (0..1024)
        .map(|_| (rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3)))
        .collect();
    c.bench_function("hypotenuse_1024", |b| {
        b.iter(|| {
            legs.iter()
                .map(|&(x, y)| hypotenuse(black_box(x), black_box(y)))
                .sum::<f64>()
        })
    });
    c.bench_function("roundings_1024", |b| {
        b.iter(|| {
            legs.iter()
                .map(|&(x, _)| roundings(black_box(x)).nearest)
                .sum::<f64>()
        })
    });
}

fn bench_zoo(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoo");
    for &n in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("filter_by_species", n), &n, |b, &n| {
            b.iter_batched(
                || random_zoo(n, 43),
                |zoo| zoo.filter_by_species(Species::Cat).len(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_geometry, bench_zoo);
criterion_main!(benches);
