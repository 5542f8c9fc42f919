use crate::error::{Result, SearchError};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament draws a sample of distinct members (without replacement)
/// and returns the one with the lowest cost; ties go to the member drawn first.
/// Unless a fixed size is configured, the sample holds `⌈P/10⌉` members of a
/// population of size `P` (at least one).
///
/// - Smaller tournaments lead to more exploration (more random selection)
/// - Larger tournaments lead to more exploitation (more focus on the best individuals)
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct TournamentSelection {
    tournament_size: Option<usize>,
}

impl TournamentSelection {
    /// Tournament whose size scales with the population: `⌈P/10⌉`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tournament with a fixed sample size, capped at the population size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn with_size(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(SearchError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            tournament_size: Some(tournament_size),
        })
    }

    /// Sample size used for a population of `population_size` members.
    pub fn size_for(&self, population_size: usize) -> usize {
        self.tournament_size
            .unwrap_or_else(|| population_size.div_ceil(10))
            .clamp(1, population_size.max(1))
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament(&self, costs: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let participants = rng.sample_indices(costs.len(), self.size_for(costs.len()));

        let mut best_idx = participants[0];
        for &idx in &participants[1..] {
            if costs[idx] < costs[best_idx] {
                best_idx = idx;
            }
        }
        best_idx
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(&self, costs: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        if costs.is_empty() {
            return Err(SearchError::EmptyPopulation);
        }
        Ok(self.run_tournament(costs, rng))
    }
}
