//! # SearchDriver
//!
//! Dispatches one of the four search strategies against an objective for a
//! fixed iteration budget and reports the best candidate, its cost and the
//! progress trace.
//!
//! ## Example
//!
//! ```rust
//! use metasearch::driver::{SearchDriver, SearchStrategy};
//! use metasearch::objective::{Graph, GraphColoring};
//! use metasearch::rng::RandomNumberGenerator;
//!
//! let objective = GraphColoring::new(Graph::complete(4).unwrap());
//! let strategy: SearchStrategy = "aleatoria".parse().unwrap();
//!
//! let driver = SearchDriver::new(objective, strategy, 10).unwrap();
//! let outcome = driver.run(&mut RandomNumberGenerator::from_seed(1)).unwrap();
//!
//! assert!(outcome.cost >= 4.0);
//! assert_eq!(outcome.trace.len(), 10);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::{Result, SearchError};
use crate::evolution::{EvolutionLauncher, EvolutionOptions};
use crate::local_search::{
    check_iterations, Descent, HillClimbing, IteratedLocalSearch, LocalSearch, LocalSearchResult,
    RandomRestart,
};
use crate::objective::Objective;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionMethod;
use crate::trace::SearchTrace;

/// The search strategies the driver can run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// Keep the best of independent random samples.
    RandomRestart,
    /// Repeated first-improvement descent from one random start.
    HillClimbing,
    /// Perturb the best point, descend, keep the outcome when it is no worse.
    IteratedLocalSearch,
    /// Generational genetic algorithm with elitist replacement.
    Genetic,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 4] = [
        SearchStrategy::RandomRestart,
        SearchStrategy::HillClimbing,
        SearchStrategy::IteratedLocalSearch,
        SearchStrategy::Genetic,
    ];

    /// The name used on the command line and in progress log file names.
    pub fn name(&self) -> &'static str {
        match self {
            SearchStrategy::RandomRestart => "aleatoria",
            SearchStrategy::HillClimbing => "escalada",
            SearchStrategy::IteratedLocalSearch => "iterada",
            SearchStrategy::Genetic => "genetico",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SearchStrategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aleatoria" | "random" | "random-restart" => Ok(SearchStrategy::RandomRestart),
            "escalada" | "hill-climbing" | "hill" => Ok(SearchStrategy::HillClimbing),
            "iterada" | "iterated" | "ils" => Ok(SearchStrategy::IteratedLocalSearch),
            "genetico" | "genético" | "genetic" | "ga" => Ok(SearchStrategy::Genetic),
            _ => Err(SearchError::UnknownStrategy(s.to_string())),
        }
    }
}

/// The result of a driven search.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<P: Phenotype> {
    pub strategy: SearchStrategy,
    pub best: P,
    pub cost: f64,
    pub trace: SearchTrace,
}

impl<P: Phenotype> SearchOutcome<P> {
    fn from_local(strategy: SearchStrategy, result: LocalSearchResult<P>) -> Self {
        Self {
            strategy,
            best: result.best,
            cost: result.cost,
            trace: result.trace,
        }
    }
}

/// Owns an objective and runs a strategy against it.
///
/// For [`SearchStrategy::Genetic`] the iteration budget is the number of
/// generations; the rest of the genetic configuration comes from the
/// [`EvolutionOptions`].
#[derive(Debug, Clone)]
pub struct SearchDriver<P, O>
where
    P: Phenotype,
    O: Objective<P>,
{
    objective: O,
    strategy: SearchStrategy,
    iterations: usize,
    options: EvolutionOptions,
    selection: SelectionMethod,
    descent: Descent,
    _marker: PhantomData<P>,
}

impl<P, O> SearchDriver<P, O>
where
    P: Phenotype,
    O: Objective<P>,
{
    /// # Errors
    ///
    /// Returns a configuration error if `iterations` is 0.
    pub fn new(objective: O, strategy: SearchStrategy, iterations: usize) -> Result<Self> {
        check_iterations(iterations)?;
        Ok(Self {
            objective,
            strategy,
            iterations,
            options: EvolutionOptions::default(),
            selection: SelectionMethod::default(),
            descent: Descent::default(),
            _marker: PhantomData,
        })
    }

    /// Genetic configuration. Its generation count is replaced by the
    /// driver's iteration budget.
    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = options;
        self
    }

    /// Parent selection of the genetic strategy. Tournament unless set.
    pub fn with_selection(mut self, selection: SelectionMethod) -> Self {
        self.selection = selection;
        self
    }

    /// Bounds every descent of the local search strategies.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `max_neighbor_attempts` is 0.
    pub fn with_max_neighbor_attempts(mut self, max_neighbor_attempts: usize) -> Result<Self> {
        self.descent = Descent::new(max_neighbor_attempts)?;
        Ok(self)
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn selection(&self) -> SelectionMethod {
        self.selection
    }

    /// Runs the configured strategy once.
    pub fn run(&self, rng: &mut RandomNumberGenerator) -> Result<SearchOutcome<P>> {
        let attempts = self.descent.max_neighbor_attempts();
        match self.strategy {
            SearchStrategy::RandomRestart => {
                let result = RandomRestart::new(self.iterations)?.search(&self.objective, rng)?;
                Ok(SearchOutcome::from_local(self.strategy, result))
            }
            SearchStrategy::HillClimbing => {
                let result = HillClimbing::with_max_neighbor_attempts(self.iterations, attempts)?
                    .search(&self.objective, rng)?;
                Ok(SearchOutcome::from_local(self.strategy, result))
            }
            SearchStrategy::IteratedLocalSearch => {
                let result =
                    IteratedLocalSearch::with_max_neighbor_attempts(self.iterations, attempts)?
                        .search(&self.objective, rng)?;
                Ok(SearchOutcome::from_local(self.strategy, result))
            }
            SearchStrategy::Genetic => {
                let mut options = self.options.clone();
                options.set_num_generations(self.iterations);
                let launcher = EvolutionLauncher::new(&self.objective, self.selection);
                let result = launcher.evolve(&options, rng)?;
                Ok(SearchOutcome {
                    strategy: self.strategy,
                    best: result.best,
                    cost: result.cost,
                    trace: result.trace,
                })
            }
        }
    }
}
