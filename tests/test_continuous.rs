use metasearch::{
    codec::decode,
    error::SearchError,
    evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult},
    local_search::{IteratedLocalSearch, LocalSearch},
    objective::{benchmark::sphere, BenchmarkFunction, ContinuousProblem, Objective},
    representation::{BitString, RealVector},
    rng::RandomNumberGenerator,
    selection::SelectionMethod,
};

#[test]
fn test_decode_scenario() {
    let bits: BitString = "0011".parse().unwrap();
    let values = decode(bits.bits(), 2, -1.0, 1.0).unwrap();

    assert!((values[0] + 1.0).abs() < 1e-12);
    assert!((values[1] - 1.0).abs() < 1e-12);
}

#[test]
fn test_decode_rejects_uneven_split() {
    let result = decode(&[true, false, true], 2, -1.0, 1.0);
    assert!(matches!(result, Err(SearchError::Configuration(_))));
}

#[test]
fn test_sphere_is_zero_at_origin() {
    for dimension in [1, 2, 10, 30] {
        assert_eq!(sphere(&vec![0.0; dimension]), 0.0);
    }
}

#[test]
fn test_every_benchmark_is_minimal_near_its_optimum() {
    for function in BenchmarkFunction::ALL {
        let optimum = match function {
            BenchmarkFunction::Rosenbrock => vec![1.0; 4],
            _ => vec![0.0; 4],
        };
        assert!(function.evaluate(&optimum).abs() < 1e-9, "{} at optimum", function);
        assert!(function.evaluate(&[0.5, -0.7, 1.3, 0.2]) > 0.0);
    }
}

#[test]
fn test_genetic_trace_is_non_increasing() {
    let problem = ContinuousProblem::new(BenchmarkFunction::Rastrigin, 4, 12).unwrap();

    for selection in [SelectionMethod::Tournament, SelectionMethod::Roulette] {
        let options = EvolutionOptions::builder()
            .num_generations(40)
            .population_size(30)
            .build();
        let binary: EvolutionResult<BitString> = EvolutionLauncher::new(problem, selection)
            .evolve(&options, &mut RandomNumberGenerator::from_seed(17))
            .unwrap();
        let real: EvolutionResult<RealVector> = EvolutionLauncher::new(problem, selection)
            .evolve(&options, &mut RandomNumberGenerator::from_seed(17))
            .unwrap();

        for trace in [&binary.trace, &real.trace] {
            assert_eq!(trace.len(), 40);
            assert!(trace.is_non_increasing());
        }
        assert!(real.best.values().iter().all(|&v| problem.bounds().contains(v)));
    }
}

#[test]
fn test_genetic_improves_on_sphere() {
    let problem = ContinuousProblem::new(BenchmarkFunction::Sphere, 3, 16).unwrap();
    let launcher = EvolutionLauncher::new(problem, SelectionMethod::Tournament);
    let options = EvolutionOptions::new(60, 40);

    let result: EvolutionResult<BitString> = launcher
        .evolve(&options, &mut RandomNumberGenerator::from_seed(3))
        .unwrap();
    let first = result.trace.entries()[0].best_cost;
    assert!(result.cost <= first);
    assert_eq!(problem.evaluate(&result.best), result.cost);
}

#[test]
fn test_seeded_genetic_runs_are_reproducible() {
    let problem = ContinuousProblem::new(BenchmarkFunction::Ackley, 5, 10).unwrap();
    let launcher = EvolutionLauncher::new(problem, SelectionMethod::Roulette);
    let options = EvolutionOptions::new(15, 20);

    let a: EvolutionResult<BitString> = launcher
        .evolve(&options, &mut RandomNumberGenerator::from_seed(2718))
        .unwrap();
    let b: EvolutionResult<BitString> = launcher
        .evolve(&options, &mut RandomNumberGenerator::from_seed(2718))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_iterated_local_search_never_worse_than_start() {
    let problem = ContinuousProblem::new(BenchmarkFunction::Griewank, 3, 10).unwrap();
    let search = IteratedLocalSearch::with_max_neighbor_attempts(25, 100).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(31);

    for _ in 0..5 {
        let start: BitString = problem.random_candidate(&mut rng).unwrap();
        let start_cost = problem.evaluate(&start);

        let result = search.search_from(start, &problem, &mut rng).unwrap();
        assert!(result.cost <= start_cost);
    }
}
