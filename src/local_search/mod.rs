//! # Local Search Algorithms
//!
//! Single-trajectory searches over a candidate's neighborhood. All engines
//! share the same first-improvement [`Descent`]: draw single-step neighbors of
//! the current point until one costs no more than it does (plateau moves are
//! allowed), and move there.
//!
//! - [`RandomRestart`] samples the domain and keeps the best sample.
//! - [`HillClimbing`] repeats the descent from a random start.
//! - [`IteratedLocalSearch`] perturbs the best point, descends, and keeps the
//!   outcome when it is no worse.
//!
//! Every engine records `(iteration, best cost)` once per iteration.

use std::fmt::Debug;

use tracing::trace;

use crate::error::{Result, SearchError};
use crate::objective::{checked_cost, Objective};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::trace::SearchTrace;

pub mod hill_climbing;
pub mod iterated;
pub mod random_restart;

pub use hill_climbing::HillClimbing;
pub use iterated::IteratedLocalSearch;
pub use random_restart::RandomRestart;

/// Neighbors drawn by one descent before it gives up and stays put.
pub const DEFAULT_MAX_NEIGHBOR_ATTEMPTS: usize = 10_000;

/// Outcome of a local search run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSearchResult<P: Phenotype> {
    pub best: P,
    pub cost: f64,
    pub trace: SearchTrace,
}

/// A trait for local search algorithms.
pub trait LocalSearch<P, O>: Debug + Send + Sync
where
    P: Phenotype,
    O: Objective<P> + ?Sized,
{
    /// Runs the search starting from `start`.
    ///
    /// The returned cost is never higher than the cost of `start`.
    fn search_from(
        &self,
        start: P,
        objective: &O,
        rng: &mut RandomNumberGenerator,
    ) -> Result<LocalSearchResult<P>>;

    /// Runs the search from a random candidate of the objective's domain.
    fn search(
        &self,
        objective: &O,
        rng: &mut RandomNumberGenerator,
    ) -> Result<LocalSearchResult<P>> {
        let start = objective.random_candidate(rng)?;
        self.search_from(start, objective, rng)
    }
}

/// Rejects a zero iteration budget.
pub(crate) fn check_iterations(iterations: usize) -> Result<()> {
    if iterations == 0 {
        return Err(SearchError::Configuration(
            "Number of iterations must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// First-improvement neighborhood descent.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descent {
    max_neighbor_attempts: usize,
}

impl Descent {
    /// # Errors
    ///
    /// Returns an error if `max_neighbor_attempts` is 0.
    pub fn new(max_neighbor_attempts: usize) -> Result<Self> {
        if max_neighbor_attempts == 0 {
            return Err(SearchError::Configuration(
                "Maximum neighbor attempts must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            max_neighbor_attempts,
        })
    }

    pub fn max_neighbor_attempts(&self) -> usize {
        self.max_neighbor_attempts
    }

    /// Draws neighbors of `current` until one costs at most `current_cost` and
    /// returns it with its cost. If every attempt is worse, `current` comes
    /// back unchanged.
    pub fn descend<P, O>(
        &self,
        current: P,
        current_cost: f64,
        objective: &O,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(P, f64)>
    where
        P: Phenotype,
        O: Objective<P> + ?Sized,
    {
        for attempt in 0..self.max_neighbor_attempts {
            let neighbor = current.neighbor(rng);
            let neighbor_cost = checked_cost(objective, &neighbor)?;
            if neighbor_cost <= current_cost {
                trace!(attempt, cost = neighbor_cost, "Neighbor accepted");
                return Ok((neighbor, neighbor_cost));
            }
        }
        trace!(
            attempts = self.max_neighbor_attempts,
            "No acceptable neighbor found, staying put"
        );
        Ok((current, current_cost))
    }
}

impl Default for Descent {
    fn default() -> Self {
        Self {
            max_neighbor_attempts: DEFAULT_MAX_NEIGHBOR_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{Graph, GraphColoring};
    use crate::representation::BitString;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Every evaluation costs more than the last one.
    #[derive(Debug, Default)]
    struct RisingObjective {
        evaluations: AtomicUsize,
    }

    impl Objective<BitString> for RisingObjective {
        fn evaluate(&self, _candidate: &BitString) -> f64 {
            (self.evaluations.fetch_add(1, Ordering::SeqCst) + 1) as f64
        }

        fn random_candidate(&self, rng: &mut RandomNumberGenerator) -> Result<BitString> {
            BitString::random(8, rng)
        }
    }

    #[test]
    fn test_descent_accepts_plateau_moves() {
        // No edges, so the cost is the number of colors used.
        let objective = GraphColoring::new(Graph::new(5).unwrap());
        let mut rng = RandomNumberGenerator::from_seed(4);
        let start = objective.random_candidate(&mut rng).unwrap();
        let start_cost = objective.evaluate(&start);

        let (moved, cost) = Descent::default()
            .descend(start, start_cost, &objective, &mut rng)
            .unwrap();
        assert!(cost <= start_cost);
        assert_eq!(objective.evaluate(&moved), cost);
    }

    #[test]
    fn test_descent_gives_up_after_max_attempts() {
        let objective = RisingObjective::default();
        let mut rng = RandomNumberGenerator::from_seed(4);
        let start = BitString::random(8, &mut rng).unwrap();

        let descent = Descent::new(25).unwrap();
        let (stayed, cost) = descent.descend(start.clone(), 0.0, &objective, &mut rng).unwrap();

        assert_eq!(stayed, start);
        assert_eq!(cost, 0.0);
        assert_eq!(objective.evaluations.load(Ordering::SeqCst), 25);
    }

    #[test]
    fn test_zero_attempts_rejected() {
        assert!(Descent::new(0).is_err());
        assert!(check_iterations(0).is_err());
        assert!(check_iterations(1).is_ok());
    }
}
