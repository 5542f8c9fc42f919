use criterion::{black_box, criterion_group, criterion_main, Criterion};
use metasearch::{
    evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult},
    objective::{BenchmarkFunction, ContinuousProblem},
    representation::BitString,
    rng::RandomNumberGenerator,
    selection::SelectionMethod,
};

fn bench_generations(c: &mut Criterion) {
    let problem = ContinuousProblem::new(BenchmarkFunction::Rastrigin, 10, 16).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(1);

    let mut group = c.benchmark_group("genetic_rastrigin");
    for size in [10, 100, 1000].iter() {
        for selection in [SelectionMethod::Tournament, SelectionMethod::Roulette] {
            let launcher = EvolutionLauncher::new(problem, selection);
            let options = EvolutionOptions::builder()
                .num_generations(10)
                .population_size(*size)
                .build();

            group.bench_function(&format!("{}_{}", selection, size), |b| {
                b.iter(|| {
                    let result: EvolutionResult<BitString> =
                        launcher.evolve(black_box(&options), black_box(&mut rng)).unwrap();
                    black_box(result.cost)
                })
            });
        }
    }
    group.finish();
}

fn bench_parallel_evaluation(c: &mut Criterion) {
    let problem = ContinuousProblem::new(BenchmarkFunction::Griewank, 30, 16).unwrap();
    let launcher = EvolutionLauncher::new(problem, SelectionMethod::Tournament);
    let mut rng = RandomNumberGenerator::from_seed(2);
    let population: Vec<BitString> = (0..5000)
        .map(|_| BitString::random(30 * 16, &mut rng).unwrap())
        .collect();

    let mut group = c.benchmark_group("evaluation");
    group.bench_function("sequential_5000", |b| {
        b.iter(|| launcher.evaluate_population(black_box(&population), usize::MAX).unwrap())
    });
    group.bench_function("parallel_5000", |b| {
        b.iter(|| launcher.evaluate_population(black_box(&population), 1).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_generations, bench_parallel_evaluation);
criterion_main!(benches);
