//! Criterion benchmarks for the job-shop GA.
//!
//! Measures raw evaluator throughput and full optimization runs on the
//! reference instance and on larger synthetic instances.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_jobshop::ga::GaConfig;
use u_jobshop::instance::{reference_instance, ProblemInstance};
use u_jobshop::jobshop::{optimize, Chromosome};
use u_jobshop::random::create_rng;
use u_jobshop::schedule::{evaluate, makespan};

// ===========================================================================
// Synthetic instances
// ===========================================================================

/// `jobs` jobs of `ops_per_job` operations drawn from 10 operation types.
fn synthetic_instance(machines: usize, jobs: usize, ops_per_job: usize) -> ProblemInstance {
    let mut rng = create_rng(7);
    let mut builder = ProblemInstance::builder();
    for op in 0..10 {
        let times: Vec<f64> = (0..machines).map(|_| rng.random_range(1.0..10.0)).collect();
        builder = builder.operation(format!("O{op}"), times);
    }
    for job in 0..jobs {
        let ops: Vec<String> = (0..ops_per_job)
            .map(|_| format!("O{}", rng.random_range(0..10)))
            .collect();
        builder = builder.job(format!("j{job}"), ops);
    }
    builder.build().expect("synthetic instance is well-formed")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for (machines, jobs, ops) in [(4usize, 6usize, 4usize), (10, 50, 10), (20, 200, 20)] {
        let instance = synthetic_instance(machines, jobs, ops);
        let chromosome = Chromosome::random(&instance, &mut create_rng(42));
        let id = format!("m{machines}_j{jobs}_o{ops}");

        group.bench_with_input(BenchmarkId::new("makespan", &id), &chromosome, |b, ch| {
            b.iter(|| black_box(makespan(&instance, black_box(&ch.assignments))))
        });
        group.bench_with_input(BenchmarkId::new("trace", &id), &chromosome, |b, ch| {
            b.iter(|| black_box(evaluate(&instance, black_box(&ch.assignments))))
        });
    }
    group.finish();
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");
    group.sample_size(10);

    let cases = [
        ("reference", reference_instance(), 100usize, 200usize),
        ("m10_j50", synthetic_instance(10, 50, 10), 100, 50),
    ];
    for (name, instance, pop, gen) in cases {
        for parallel in [false, true] {
            let config = GaConfig {
                population_size: pop,
                generations: gen,
                parallel,
                seed: Some(42),
                ..GaConfig::default()
            };
            let label = if parallel { "par" } else { "seq" };
            group.bench_with_input(
                BenchmarkId::new(format!("{name}_p{pop}_g{gen}"), label),
                &config,
                |b, c| b.iter(|| black_box(optimize(black_box(&instance), black_box(c)))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_optimize);
criterion_main!(benches);
