//! # Experiments
//!
//! Repeated genetic runs over the continuous benchmarks. Each run is reduced
//! to the lowest cost its trace ever reached and the runs of one benchmark are
//! summarised as best, worst and mean.

use std::fmt;

use tracing::info;

use crate::error::{OptionExt, Result, SearchError};
use crate::evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult};
use crate::objective::{BenchmarkFunction, ContinuousProblem};
use crate::representation::BitString;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionMethod;

/// Runs per benchmark when none is given.
pub const DEFAULT_RUNS: usize = 30;

/// Statistics over the runs of one benchmark.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentSummary {
    pub function: BenchmarkFunction,
    pub runs: usize,
    pub best: f64,
    pub worst: f64,
    pub mean: f64,
}

impl ExperimentSummary {
    /// Summarises the per-run minima.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyPopulation`] if `minima` is empty.
    pub fn from_minima(function: BenchmarkFunction, minima: &[f64]) -> Result<Self> {
        let best = minima
            .iter()
            .copied()
            .reduce(f64::min)
            .ok_or_else_search(|| SearchError::EmptyPopulation)?;
        let worst = minima.iter().copied().fold(best, f64::max);
        let mean = minima.iter().sum::<f64>() / minima.len() as f64;
        Ok(Self {
            function,
            runs: minima.len(),
            best,
            worst,
            mean,
        })
    }
}

impl fmt::Display for ExperimentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} runs={:<3} best={:<14.6} worst={:<14.6} mean={:.6}",
            self.function.name(),
            self.runs,
            self.best,
            self.worst,
            self.mean
        )
    }
}

/// Runs the genetic algorithm `runs` times on one benchmark with a binary
/// encoding of `bits_per_dimension` bits per coordinate, picking parents with
/// `selection`.
///
/// # Errors
///
/// Returns a configuration error if `runs` is 0 or the problem or options are
/// invalid.
pub fn run_experiment(
    function: BenchmarkFunction,
    runs: usize,
    dimension: usize,
    bits_per_dimension: usize,
    selection: SelectionMethod,
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
) -> Result<ExperimentSummary> {
    if runs == 0 {
        return Err(SearchError::Configuration(
            "Number of runs must be greater than 0".to_string(),
        ));
    }
    let problem = ContinuousProblem::new(function, dimension, bits_per_dimension)?;
    let launcher = EvolutionLauncher::new(problem, selection);

    let mut minima = Vec::with_capacity(runs);
    for run in 0..runs {
        let result: EvolutionResult<BitString> = launcher.evolve(options, rng)?;
        let minimum = result.trace.min_cost().unwrap_or(result.cost);
        info!(function = %function, run, minimum, "Experiment run finished");
        minima.push(minimum);
    }
    ExperimentSummary::from_minima(function, &minima)
}

/// Runs [`run_experiment`] for every benchmark, in [`BenchmarkFunction::ALL`] order.
pub fn run_experiments(
    runs: usize,
    dimension: usize,
    bits_per_dimension: usize,
    selection: SelectionMethod,
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<ExperimentSummary>> {
    BenchmarkFunction::ALL
        .iter()
        .map(|&function| {
            run_experiment(
                function,
                runs,
                dimension,
                bits_per_dimension,
                selection,
                options,
                rng,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_statistics() {
        let summary =
            ExperimentSummary::from_minima(BenchmarkFunction::Sphere, &[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(summary.runs, 3);
        assert_eq!(summary.best, 1.0);
        assert_eq!(summary.worst, 3.0);
        assert_eq!(summary.mean, 2.0);
        assert!(summary.to_string().starts_with("sphere"));
    }

    #[test]
    fn test_empty_minima_rejected() {
        assert!(ExperimentSummary::from_minima(BenchmarkFunction::Ackley, &[]).is_err());
    }

    #[test]
    fn test_zero_runs_rejected() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let result = run_experiment(
            BenchmarkFunction::Sphere,
            0,
            2,
            8,
            SelectionMethod::Tournament,
            &EvolutionOptions::default(),
            &mut rng,
        );
        assert!(matches!(result, Err(SearchError::Configuration(_))));
    }

    #[test]
    fn test_small_experiment_covers_every_benchmark() {
        let options = EvolutionOptions::new(5, 10);
        let mut rng = RandomNumberGenerator::from_seed(12);

        let summaries =
            run_experiments(3, 2, 8, SelectionMethod::Roulette, &options, &mut rng).unwrap();
        assert_eq!(summaries.len(), BenchmarkFunction::ALL.len());
        for summary in summaries {
            assert_eq!(summary.runs, 3);
            let slack = 1e-9 * summary.worst.abs().max(1.0);
            assert!(summary.best <= summary.mean + slack);
            assert!(summary.mean <= summary.worst + slack);
            assert!(summary.best >= 0.0);
        }
    }
}
