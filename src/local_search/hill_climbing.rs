use tracing::{debug, info};

use crate::error::Result;
use crate::objective::{checked_cost, Objective};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::trace::SearchTrace;

use super::{check_iterations, Descent, LocalSearch, LocalSearchResult};

/// A simple hill climbing algorithm.
///
/// Every iteration runs one first-improvement [`Descent`] from the current
/// point and moves to its outcome. Since the descent only returns neighbors
/// that cost no more, the current point never gets worse.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillClimbing {
    iterations: usize,
    descent: Descent,
}

impl HillClimbing {
    /// Creates a new hill climbing algorithm with the given number of iterations.
    ///
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

    /// Creates a new hill climbing algorithm whose descents give up after
    /// `max_neighbor_attempts` rejected neighbors.
    ///
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
}

impl<P, O> LocalSearch<P, O> for HillClimbing
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
        let mut current_cost = checked_cost(objective, &start)?;
        let mut current = start;
        let mut trace = SearchTrace::with_capacity(self.iterations);
        info!(iterations = self.iterations, initial_cost = current_cost, "Starting hill climbing");

        for iteration in 0..self.iterations {
            (current, current_cost) = self.descent.descend(current, current_cost, objective, rng)?;
            trace.record(iteration, current_cost);
            debug!(iteration, best_cost = current_cost, "Iteration finished");
        }

        info!(best_cost = current_cost, "Hill climbing finished");
        Ok(LocalSearchResult {
            best: current,
            cost: current_cost,
            trace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{BenchmarkFunction, ContinuousProblem, Graph, GraphColoring};
    use crate::representation::{BitString, Coloring};

    #[test]
    fn test_zero_iterations_rejected() {
        assert!(HillClimbing::new(0).is_err());
        assert!(HillClimbing::with_max_neighbor_attempts(5, 0).is_err());
    }

    #[test]
    fn test_hill_climbing_improves_coloring() {
        let objective = GraphColoring::new(Graph::complete(6).unwrap());
        let mut rng = RandomNumberGenerator::from_seed(13);
        let start: Coloring = objective.random_candidate(&mut rng).unwrap();
        let start_cost = objective.evaluate(&start);

        let result = HillClimbing::new(50)
            .unwrap()
            .search_from(start, &objective, &mut rng)
            .unwrap();

        assert!(result.cost <= start_cost);
        assert_eq!(result.trace.len(), 50);
        assert!(result.trace.is_non_increasing());
        assert_eq!(objective.evaluate(&result.best), result.cost);
    }

    #[test]
    fn test_hill_climbing_on_sphere() {
        let objective = ContinuousProblem::new(BenchmarkFunction::Sphere, 2, 10).unwrap();
        let search = HillClimbing::with_max_neighbor_attempts(200, 100).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(8);

        let result: LocalSearchResult<BitString> = search.search(&objective, &mut rng).unwrap();
        assert!(result.trace.is_non_increasing());
        assert!(result.cost >= 0.0);
    }
}
