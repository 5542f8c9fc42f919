use std::marker::PhantomData;

use rayon::prelude::*;
use tracing::{debug, info};

use super::options::EvolutionOptions;
use crate::{
    breeding::CrossoverOperator,
    error::{OptionExt, Result, SearchError},
    objective::{checked_cost, Objective},
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
    selection::SelectionStrategy,
    trace::SearchTrace,
};

/// Represents the result of an evolution: the best member of the final
/// generation, its cost and the best cost of every generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<Pheno: Phenotype> {
    /// The best phenotype of the last generation.
    pub best: Pheno,
    /// The cost of `best`.
    pub cost: f64,
    /// One entry per evaluated generation.
    pub trace: SearchTrace,
}

/// Runs a generational genetic algorithm against an objective.
///
/// Every generation is evaluated in full, the lowest-cost member is recorded,
/// and the next generation is bred from parents picked by the selection
/// strategy. With elitism on, the best member is copied unchanged into slot 0
/// of the next generation, so the recorded best cost never increases.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Pheno, Obj, Select>
where
    Pheno: Phenotype,
    Obj: Objective<Pheno>,
    Select: SelectionStrategy,
{
    objective: Obj,
    selection: Select,
    _marker: PhantomData<Pheno>,
}

impl<Pheno, Obj, Select> EvolutionLauncher<Pheno, Obj, Select>
where
    Pheno: Phenotype,
    Obj: Objective<Pheno>,
    Select: SelectionStrategy,
{
    /// Creates a new `EvolutionLauncher` with the objective to minimise and the
    /// strategy used to pick parents.
    pub fn new(objective: Obj, selection: Select) -> Self {
        Self {
            objective,
            selection,
            _marker: PhantomData,
        }
    }

    pub fn objective(&self) -> &Obj {
        &self.objective
    }

    /// Evolves a random population for `options.get_num_generations()` generations.
    ///
    /// The search evaluates `num_generations` generations and breeds
    /// `num_generations - 1` replacements; the result is the best member of the
    /// last evaluated generation.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options do not validate
    /// - The objective cannot produce random candidates
    /// - A member's cost is not finite
    ///
    /// # Performance
    ///
    /// Populations of at least `options.get_parallel_threshold()` members are
    /// evaluated in parallel with Rayon. All random draws happen on the calling
    /// thread, so a seeded run gives the same result either way.
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<Pheno>> {
        options.validate()?;
        let crossover = options
            .get_crossover()
            .unwrap_or_else(Pheno::preferred_crossover);

        info!(
            population_size = options.get_population_size(),
            num_generations = options.get_num_generations(),
            selection = ?self.selection,
            %crossover,
            elitism = options.is_elitist(),
            "Starting genetic search"
        );

        let mut population = (0..options.get_population_size())
            .map(|_| self.objective.random_candidate(rng))
            .collect::<Result<Vec<Pheno>>>()?;
        let mut trace = SearchTrace::with_capacity(options.get_num_generations());
        let mut generation = 0;

        loop {
            let costs = self.evaluate_population(&population, options.get_parallel_threshold())?;
            let best_idx = best_index(&costs).ok_or_else_search(|| SearchError::EmptyPopulation)?;
            trace.record(generation, costs[best_idx]);
            debug!(generation, best_cost = costs[best_idx], "Generation evaluated");

            generation += 1;
            if generation == options.get_num_generations() {
                info!(best_cost = costs[best_idx], "Genetic search finished");
                return Ok(EvolutionResult {
                    best: population.swap_remove(best_idx),
                    cost: costs[best_idx],
                    trace,
                });
            }

            population = self.breed_generation(&population, &costs, options, crossover, rng)?;
        }
    }

    /// Computes the cost of every member, in population order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::FitnessCalculation`] on the first non-finite cost.
    pub fn evaluate_population(
        &self,
        population: &[Pheno],
        parallel_threshold: usize,
    ) -> Result<Vec<f64>> {
        if population.len() >= parallel_threshold {
            population
                .par_iter()
                .map(|candidate| checked_cost(&self.objective, candidate))
                .collect()
        } else {
            population
                .iter()
                .map(|candidate| checked_cost(&self.objective, candidate))
                .collect()
        }
    }

    /// Breeds the next generation from an evaluated one.
    ///
    /// The returned population always holds exactly
    /// `options.get_population_size()` members.
    pub fn reproduce(
        &self,
        population: &[Pheno],
        costs: &[f64],
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Pheno>> {
        options.validate()?;
        let crossover = options
            .get_crossover()
            .unwrap_or_else(Pheno::preferred_crossover);
        self.breed_generation(population, costs, options, crossover, rng)
    }

    fn breed_generation(
        &self,
        population: &[Pheno],
        costs: &[f64],
        options: &EvolutionOptions,
        crossover: CrossoverOperator,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Pheno>> {
        if population.is_empty() || population.len() != costs.len() {
            return Err(SearchError::EmptyPopulation);
        }
        let size = options.get_population_size();
        let mut next = Vec::with_capacity(size);

        if options.is_elitist() {
            let best_idx = best_index(costs).ok_or_else_search(|| SearchError::EmptyPopulation)?;
            next.push(population[best_idx].clone());
        }

        while next.len() < size {
            let first = &population[self.selection.select(costs, rng)?];
            let second = &population[self.selection.select(costs, rng)?];

            let (mut child_a, mut child_b) = if rng.chance(options.get_crossover_probability()) {
                crossover.recombine(first, second, rng)?
            } else {
                (first.clone(), second.clone())
            };

            child_a.mutate(options.get_mutation_probability(), rng);
            next.push(child_a);
            // An odd number of free slots drops the second child of the last pair.
            if next.len() < size {
                child_b.mutate(options.get_mutation_probability(), rng);
                next.push(child_b);
            }
        }
        Ok(next)
    }
}

/// Index of the lowest cost; ties go to the earliest member.
fn best_index(costs: &[f64]) -> Option<usize> {
    costs
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (idx, &cost)| match best {
            Some((_, best_cost)) if best_cost <= cost => best,
            _ => Some((idx, cost)),
        })
        .map(|(idx, _)| idx)
}
