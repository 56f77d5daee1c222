//! Criterion benchmarks for shape queries.
//!
//! Measures area (circle, Heron) and the right-angle check on seeded random
//! valid inputs so runs are comparable across commits.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use shapes::{Area, Circle, Triangle};

fn random_triangle(rng: &mut StdRng) -> Triangle {
    loop {
        let a = rng.gen_range(0.1..10.0);
        let b = rng.gen_range(0.1..10.0);
        let c = rng.gen_range(0.1..10.0);
        if let Ok(t) = Triangle::new(a, b, c) {
            return t;
        }
    }
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");
    let mut rng = StdRng::seed_from_u64(7);

    group.bench_function("circle_area", |b| {
        b.iter_batched(
            || Circle::new(rng.gen_range(0.1..100.0)).unwrap(),
            |circle| black_box(circle.area()),
            BatchSize::SmallInput,
        )
    });

    let mut rng = StdRng::seed_from_u64(8);
    group.bench_function("triangle_area", |b| {
        b.iter_batched(
            || random_triangle(&mut rng),
            |t| black_box(t.area()),
            BatchSize::SmallInput,
        )
    });

    let mut rng = StdRng::seed_from_u64(9);
    group.bench_function("triangle_is_right", |b| {
        b.iter_batched(
            || random_triangle(&mut rng),
            |t| black_box(t.is_right_triangle_with_precision(6)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_shapes);
criterion_main!(benches);
