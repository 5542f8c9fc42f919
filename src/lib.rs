//! # metasearch
//!
//! Stochastic metaheuristics for two families of minimisation problems:
//! graph coloring over a DIMACS-style graph and the classic continuous
//! benchmarks (sphere, rastrigin, ackley, griewank, rosenbrock).
//!
//! Four strategies share one objective contract and one explicit, seedable
//! random number generator: random restart, hill climbing, iterated local
//! search and a generational genetic algorithm with elitist replacement.
//!
//! ```rust
//! use metasearch::{Objective, RandomNumberGenerator, SearchDriver, SearchStrategy};
//! use metasearch::objective::{Graph, GraphColoring};
//!
//! let graph: Graph = "p edge 3 3\ne 1 2\ne 2 3\ne 3 1\n".parse().unwrap();
//! let objective = GraphColoring::new(graph);
//!
//! let driver = SearchDriver::new(objective.clone(), SearchStrategy::HillClimbing, 50).unwrap();
//! let outcome = driver.run(&mut RandomNumberGenerator::from_seed(3)).unwrap();
//!
//! assert_eq!(objective.evaluate(&outcome.best), outcome.cost);
//! ```

pub mod breeding;
pub mod codec;
pub mod driver;
pub mod error;
pub mod evolution;
pub mod experiment;
pub mod local_search;
pub mod objective;
pub mod phenotype;
pub mod representation;
pub mod rng;
pub mod selection;
pub mod trace;

// Re-export commonly used types for convenience
pub use driver::{SearchDriver, SearchOutcome, SearchStrategy};
pub use error::{OptionExt, Result, ResultExt, SearchError};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult};
pub use objective::Objective;
pub use phenotype::Phenotype;
pub use rng::RandomNumberGenerator;
pub use trace::SearchTrace;
