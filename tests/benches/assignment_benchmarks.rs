//! # Crossover Assignment Benchmarks
//!
//! | Stage | Population | Assignment | Crossover |
//! |-------|------------|------------|-----------|
//! | assign | 10 users / 1k objects | 1% | 50% |
//! | assign | 50 users / 5k objects | 1% | 50% |
//! | assign | 100 users / 20k objects | 1% | 50% |
//! | verify | same populations | 1% | 50% |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;
use xo_01_assignment::{assign, verify};

const SIZES: [(usize, usize); 3] = [(10, 1_000), (50, 5_000), (100, 20_000)];
const ASSIGNMENT: f64 = 0.01;
const CROSSOVER: f64 = 0.5;

fn population(users: usize, objects: usize) -> (Vec<String>, Vec<String>) {
    (
        (0..users).map(|i| format!("user_{i}")).collect(),
        (0..objects).map(|i| format!("object_{i}")).collect(),
    )
}

fn bench_assign(c: &mut Criterion) {
    let mut group = c.benchmark_group("xo-assign");
    group.measurement_time(Duration::from_secs(10));

    for (num_users, num_objects) in SIZES {
        let (users, objects) = population(num_users, num_objects);
        let label = format!("{num_users}x{num_objects}");

        group.throughput(Throughput::Elements(num_objects as u64));
        group.bench_with_input(BenchmarkId::new("assign", &label), &label, |b, _| {
            b.iter(|| {
                black_box(
                    assign(&users, &objects, ASSIGNMENT, CROSSOVER, Some(42))
                        .expect("benchmark population is feasible"),
                )
            })
        });
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("xo-verify");

    for (num_users, num_objects) in SIZES {
        let (users, objects) = population(num_users, num_objects);
        let assignment = assign(&users, &objects, ASSIGNMENT, CROSSOVER, Some(42))
            .expect("benchmark population is feasible");
        let label = format!("{num_users}x{num_objects}");

        group.throughput(Throughput::Elements(assignment.total_assigned() as u64));
        group.bench_with_input(BenchmarkId::new("verify", &label), &label, |b, _| {
            b.iter(|| black_box(verify(&assignment, &users, num_objects, ASSIGNMENT, CROSSOVER)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_assign, bench_verify);
criterion_main!(benches);
