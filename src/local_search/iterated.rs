use tracing::{debug, info, trace};

use crate::error::Result;
use crate::objective::{checked_cost, Objective};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::trace::SearchTrace;

use super::{check_iterations, Descent, LocalSearch, LocalSearchResult};

/// Iterated local search.
///
/// Each iteration resets `⌈N/10⌉` random positions of a copy of the best
/// point (positions drawn with replacement), descends from there, and keeps
/// the outcome only if it costs no more than the best point did before the
/// perturbation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IteratedLocalSearch {
    iterations: usize,
    descent: Descent,
}

impl IteratedLocalSearch {
    /// # Errors
    ///
    /// Returns an error if `iterations` is 0.
    pub fn new(iterations: usize) -> Result<Self> {
        check_iterations(iterations)?;
        Ok(Self {
            iterations,
            descent: Descent::default(),
        })
    }

    /// # Errors
    ///
    /// Returns an error if `iterations` or `max_neighbor_attempts` is 0.
    pub fn with_max_neighbor_attempts(
        iterations: usize,
        max_neighbor_attempts: usize,
    ) -> Result<Self> {
        check_iterations(iterations)?;
        Ok(Self {
            iterations,
            descent: Descent::new(max_neighbor_attempts)?,
        })
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Number of positions reset by one perturbation of a length-`len` candidate.
    pub fn perturbation_size(len: usize) -> usize {
        len.div_ceil(10)
    }
}

impl<P, O> LocalSearch<P, O> for IteratedLocalSearch
where
    P: Phenotype,
    O: Objective<P> + ?Sized,
{
    fn search_from(
        &self,
        start: P,
        objective: &O,
        rng: &mut RandomNumberGenerator,
    ) -> Result<LocalSearchResult<P>> {
        let mut best_cost = checked_cost(objective, &start)?;
        let mut best = start;
        let strength = Self::perturbation_size(best.len());
        let mut search_trace = SearchTrace::with_capacity(self.iterations);
        info!(
            iterations = self.iterations,
            perturbation = strength,
            initial_cost = best_cost,
            "Starting iterated local search"
        );

        for iteration in 0..self.iterations {
            let mut candidate = best.clone();
            candidate.perturb(strength, rng);
            let candidate_cost = checked_cost(objective, &candidate)?;
            let (candidate, candidate_cost) =
                self.descent.descend(candidate, candidate_cost, objective, rng)?;

            if candidate_cost <= best_cost {
                trace!(iteration, cost = candidate_cost, "Perturbed descent accepted");
                best = candidate;
                best_cost = candidate_cost;
            }
            search_trace.record(iteration, best_cost);
            debug!(iteration, best_cost, "Iteration finished");
        }

        info!(best_cost, "Iterated local search finished");
        Ok(LocalSearchResult {
            best,
            cost: best_cost,
            trace: search_trace,
        })
    }
}
