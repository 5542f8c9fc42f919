use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::error::{Result, SearchError};
use crate::rng::RandomNumberGenerator;

use super::{RouletteWheelSelection, TournamentSelection};

/// Trait for parent-selection strategies.
///
/// A strategy looks at the costs of the current population (lower is better)
/// and returns the index of one parent. The genetic algorithm calls it once per
/// parent, so both parents of a pair are drawn independently.
///
/// # Examples
///
/// ```
/// use metasearch::rng::RandomNumberGenerator;
/// use metasearch::selection::{SelectionStrategy, TournamentSelection};
///
/// let costs = vec![5.0, 0.5, 3.0, 9.0];
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// // A tournament over the whole population always returns the cheapest member.
/// let selection = TournamentSelection::with_size(4).unwrap();
/// assert_eq!(selection.select(&costs, &mut rng).unwrap(), 1);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects the index of one parent.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyPopulation`] if `costs` is empty.
    fn select(&self, costs: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize>;
}

/// The selection policies a search can be configured with.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMethod {
    /// Tournament over a sample of `⌈P/10⌉` members.
    #[default]
    Tournament,
    /// Fitness-proportionate selection with weight `1 / cost`.
    Roulette,
}

impl SelectionStrategy for SelectionMethod {
    fn select(&self, costs: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        match self {
            SelectionMethod::Tournament => TournamentSelection::default().select(costs, rng),
            SelectionMethod::Roulette => RouletteWheelSelection::new().select(costs, rng),
        }
    }
}

impl fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMethod::Tournament => write!(f, "tournament"),
            SelectionMethod::Roulette => write!(f, "roulette"),
        }
    }
}

impl FromStr for SelectionMethod {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tournament" | "torneo" => Ok(SelectionMethod::Tournament),
            "roulette" | "ruleta" => Ok(SelectionMethod::Roulette),
            _ => Err(SearchError::Configuration(format!(
                "Unknown selection method '{}'",
                s
            ))),
        }
    }
}
