use tracing::{debug, info, trace};

use crate::error::Result;
use crate::objective::{checked_cost, Objective};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::trace::SearchTrace;

use super::{check_iterations, LocalSearch, LocalSearchResult};

/// Pure random sampling.
///
/// Each iteration draws a fresh random candidate and adopts it when it costs
/// no more than the best one so far.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomRestart {
    iterations: usize,
}

impl RandomRestart {
    /// # Errors
    ///
    /// Returns an error if `iterations` is 0.
    pub fn new(iterations: usize) -> Result<Self> {
        check_iterations(iterations)?;
        Ok(Self { iterations })
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl<P, O> LocalSearch<P, O> for RandomRestart
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
        let mut search_trace = SearchTrace::with_capacity(self.iterations);
        info!(
            iterations = self.iterations,
            initial_cost = best_cost,
            "Starting random restart search"
        );

        for iteration in 0..self.iterations {
            let candidate = objective.random_candidate(rng)?;
            let cost = checked_cost(objective, &candidate)?;
            if cost <= best_cost {
                trace!(iteration, cost, "Sample accepted");
                best = candidate;
                best_cost = cost;
            }
            search_trace.record(iteration, best_cost);
            debug!(iteration, best_cost, "Iteration finished");
        }

        info!(best_cost, "Random restart search finished");
        Ok(LocalSearchResult {
            best,
            cost: best_cost,
            trace: search_trace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{Graph, GraphColoring};
    use crate::representation::Coloring;

    #[test]
    fn test_zero_iterations_rejected() {
        assert!(RandomRestart::new(0).is_err());
    }

    #[test]
    fn test_best_cost_never_increases() {
        let objective = GraphColoring::new(Graph::complete(5).unwrap());
        let search = RandomRestart::new(40).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(21);

        let result: LocalSearchResult<Coloring> = search.search(&objective, &mut rng).unwrap();

        assert_eq!(result.trace.len(), 40);
        assert!(result.trace.is_non_increasing());
        assert_eq!(objective.evaluate(&result.best), result.cost);
    }

    #[test]
    fn test_keeps_a_good_start() {
        // A proper coloring of K3 with three colors is optimal.
        let objective = GraphColoring::new(Graph::complete(3).unwrap());
        let start = Coloring::new(vec![1, 2, 3], 3).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2);

        let result = RandomRestart::new(5)
            .unwrap()
            .search_from(start, &objective, &mut rng)
            .unwrap();
        assert_eq!(result.cost, 3.0);
    }
}
