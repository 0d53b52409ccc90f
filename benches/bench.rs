// Criterion benchmarks for the radius query

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use marketreach_geo::core::{count_within_radius, find_within_radius, haversine_distance};
use marketreach_geo::models::{Candidate, GeoPoint, RadiusQuery};

/// Candidates on a grid around Seoul City Hall, roughly 20km across
fn create_candidates(count: usize) -> Vec<Candidate> {
    let side = (count as f64).sqrt().ceil() as usize;
    (0..count)
        .map(|i| {
            let row = (i / side) as f64;
            let col = (i % side) as f64;
            Candidate {
                id: i.to_string(),
                name: format!("Customer {}", i),
                location: GeoPoint::new(
                    37.48 + row * (0.18 / side as f64),
                    126.88 + col * (0.22 / side as f64),
                ),
            }
        })
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(37.4980),
                black_box(127.0276),
                black_box(37.5665),
                black_box(126.9780),
            )
        });
    });
}

fn bench_find_within_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_within_radius");
    let query = RadiusQuery::new(GeoPoint::new(37.5665, 126.9780), 5.0);

    for size in [100, 1_000, 10_000] {
        let candidates = create_candidates(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &candidates, |b, candidates| {
            b.iter(|| find_within_radius(black_box(&query), black_box(candidates)));
        });
    }

    group.finish();
}

fn bench_count_within_radius(c: &mut Criterion) {
    let query = RadiusQuery::new(GeoPoint::new(37.5665, 126.9780), 2.0);
    let candidates = create_candidates(10_000);

    c.bench_function("count_within_radius_10k", |b| {
        b.iter(|| count_within_radius(black_box(&query), black_box(&candidates)));
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_find_within_radius,
    bench_count_within_radius
);
criterion_main!(benches);
