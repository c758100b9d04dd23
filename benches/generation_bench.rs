// Benchmarks for the generation transition and fitness evaluation
//
// Run with: cargo bench --bench generation_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rgb_evolve::prelude::*;

fn benchmark_fitness(c: &mut Criterion) {
    let target = Target::new(ColorBits::zeros());
    let candidate = ColorBits::ones();

    c.bench_function("color_distance", |b| {
        b.iter(|| target.evaluate(black_box(&candidate)))
    });
}

/// One generation with the default operator counts across population sizes
fn benchmark_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for size in [50, 200, 1000].iter() {
        let ga = ColorGA::builder()
            .target(Rgb::new(200, 40, 90))
            .population_size(*size)
            .build()
            .expect("valid benchmark configuration");
        let mut rng = StdRng::seed_from_u64(42);
        let population = ga.initial_population(&mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut pop = population.clone();
                ga.generation(&mut pop, &mut rng)
                    .expect("generation on a populated run");
                black_box(pop)
            })
        });
    }

    group.finish();
}

/// A full 100-generation run with the default configuration
fn benchmark_run(c: &mut Criterion) {
    let ga = ColorGA::builder()
        .target(Rgb::new(200, 40, 90))
        .build()
        .expect("valid benchmark configuration");

    c.bench_function("run_default", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(7);
            black_box(ga.run(&mut rng).expect("default run"))
        })
    });
}

criterion_group!(benches, benchmark_fitness, benchmark_generation, benchmark_run);
criterion_main!(benches);
