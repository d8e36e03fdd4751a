//! Criterion benchmarks for the swarm engine.
//!
//! Measures the fitness evaluator on its own and full N-Queens runs with a
//! fixed iteration budget, so timings reflect algorithm overhead rather
//! than how quickly a given seed happens to converge.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_swarm::pso::{PsoConfig, PsoRunner, RepairStrategy};
use u_swarm::queens::{fitness, NQueens};
use u_swarm::random::{create_rng, random_permutation};

// ===========================================================================
// Fitness
// ===========================================================================

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("queens_fitness");

    for &n in &[8usize, 32, 128] {
        let mut rng = create_rng(42);
        let position = random_permutation(n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &position, |b, p| {
            b.iter(|| black_box(fitness(black_box(p))))
        });
    }
    group.finish();
}

// ===========================================================================
// Full runs
// ===========================================================================

fn bench_pso_fixed_budget(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso_fixed_budget");
    group.sample_size(10);

    for (repair, label) in [
        (RepairStrategy::default(), "resample"),
        (RepairStrategy::LowestUnused, "lowest_unused"),
    ] {
        for &n in &[16usize, 64] {
            let problem = NQueens::new(n).expect("positive board size");
            let config = PsoConfig::default()
                .with_max_iterations(50)
                .with_repair(repair)
                .with_seed(42);
            group.bench_with_input(
                BenchmarkId::new(label, n),
                &(problem, config),
                |b, (p, c)| {
                    b.iter(|| {
                        let result = PsoRunner::run(black_box(p), black_box(c));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_pso_fixed_budget);
criterion_main!(benches);
