use std::hint::black_box;

use bench::RuntimeTier;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use periodic_sssp::generator::GraphCase;
use periodic_sssp::generator::generate_case;
use periodic_sssp::shortest_path;
use rand::Rng;

const CASES: [GraphCase; 5] = [
    GraphCase::SparseRandom,
    GraphCase::DenseRandom,
    GraphCase::AlmostLine,
    GraphCase::SinglePhase,
    GraphCase::PhaseSkewed,
];

const SIZES: [usize; 3] = [512, 2_048, 8_192];
const PERIODS: [usize; 3] = [1, 4, 16];

fn tier_for(size: usize, period: usize) -> RuntimeTier {
    match size * period {
        0..=4_096 => RuntimeTier::Small,
        4_097..=32_768 => RuntimeTier::Medium,
        _ => RuntimeTier::Large,
    }
}

fn bench_periodic_sssp(c: &mut Criterion) {
    let mut rng = bench::default_rng();

    for case in CASES {
        let mut group = c.benchmark_group(format!("periodic_sssp/{}", case.label()));

        for &size in &SIZES {
            for &period in &PERIODS {
                tier_for(size, period).apply(&mut group);
                let input = generate_case(case, size, period, rng.random());

                let id = BenchmarkId::new(format!("n{period}"), size);
                group.bench_function(id, |bencher| {
                    bencher.iter(|| {
                        let result = shortest_path(&input.graph, input.source, input.target);
                        black_box(result)
                    });
                });
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_periodic_sssp);
criterion_main!(benches);
