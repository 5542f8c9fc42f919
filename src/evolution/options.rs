//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the configuration of the genetic
//! algorithm: number of generations, population size, the crossover and
//! mutation probabilities, whether the best member survives each generation
//! unchanged, and the population size above which fitness evaluation runs in
//! parallel. Parent selection belongs to the launcher.
//!
//! ## Example
//!
//! ```rust
//! use metasearch::evolution::options::EvolutionOptions;
//!
//! // Defaults: 100 generations of 100 members, crossover 0.9, mutation 0.1.
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 100);
//!
//! let custom_options = EvolutionOptions::builder()
//!     .num_generations(50)
//!     .population_size(40)
//!     .elitism(false)
//!     .build();
//! assert!(custom_options.validate().is_ok());
//! ```

use crate::breeding::CrossoverOperator;
use crate::error::{Result, SearchError};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    population_size: usize,
    crossover_probability: f64,
    mutation_probability: f64,
    /// `None` lets each representation use its preferred operator.
    crossover: Option<CrossoverOperator>,
    elitism: bool,
    /// Minimum population size evaluated in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn new(num_generations: usize, population_size: usize) -> Self {
        Self {
            num_generations,
            population_size,
            ..Self::default()
        }
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    /// The configured crossover operator, if one overrides the representation's default.
    pub fn get_crossover(&self) -> Option<CrossoverOperator> {
        self.crossover
    }

    pub fn is_elitist(&self) -> bool {
        self.elitism
    }

    /// Returns the minimum population size evaluated in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_crossover_probability(&mut self, probability: f64) {
        self.crossover_probability = probability;
    }

    pub fn set_mutation_probability(&mut self, probability: f64) {
        self.mutation_probability = probability;
    }

    pub fn set_crossover(&mut self, crossover: Option<CrossoverOperator>) {
        self.crossover = crossover;
    }

    pub fn set_elitism(&mut self, elitism: bool) {
        self.elitism = elitism;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Checks that the options describe a runnable search.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the population or generation count is
    /// zero, if a probability lies outside `[0, 1]`, or if the crossover
    /// operator is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(SearchError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        if self.num_generations == 0 {
            return Err(SearchError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }
        for (name, value) in [
            ("Crossover", self.crossover_probability),
            ("Mutation", self.mutation_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SearchError::Configuration(format!(
                    "{} probability must lie in [0, 1], got {}",
                    name, value
                )));
            }
        }
        if let Some(crossover) = &self.crossover {
            crossover.validate()?;
        }
        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use metasearch::breeding::CrossoverOperator;
    /// use metasearch::evolution::options::EvolutionOptions;
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(200)
    ///     .population_size(50)
    ///     .mutation_probability(0.05)
    ///     .crossover(CrossoverOperator::SinglePoint)
    ///     .parallel_threshold(500)
    ///     .build();
    ///
    /// assert_eq!(options.get_crossover(), Some(CrossoverOperator::SinglePoint));
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: 100,
            population_size: 100,
            crossover_probability: 0.9,
            mutation_probability: 0.1,
            crossover: None,
            elitism: true,
            parallel_threshold: 1000,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to [`EvolutionOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    population_size: Option<usize>,
    crossover_probability: Option<f64>,
    mutation_probability: Option<f64>,
    crossover: Option<CrossoverOperator>,
    elitism: Option<bool>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = Some(value);
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    /// Overrides the representation's preferred crossover operator.
    pub fn crossover(mut self, value: CrossoverOperator) -> Self {
        self.crossover = Some(value);
        self
    }

    pub fn elitism(mut self, value: bool) -> Self {
        self.elitism = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            crossover_probability: self
                .crossover_probability
                .unwrap_or(defaults.crossover_probability),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(defaults.mutation_probability),
            crossover: self.crossover.or(defaults.crossover),
            elitism: self.elitism.unwrap_or(defaults.elitism),
            parallel_threshold: self.parallel_threshold.unwrap_or(defaults.parallel_threshold),
        }
    }
}
