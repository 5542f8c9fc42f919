//! # Objectives
//!
//! An [`Objective`] maps a candidate to a non-negative cost (lower is better)
//! and knows how to draw uniformly random candidates from its own domain.
//! Evaluation is pure: the same candidate always yields the same cost, which is
//! what lets the genetic algorithm evaluate a population in parallel.
//!
//! Two families are provided:
//!
//! - [`coloring::GraphColoring`] scores [`Coloring`](crate::representation::Coloring)s
//!   against a [`coloring::Graph`],
//! - [`benchmark::ContinuousProblem`] scores bit strings (through the codec) and
//!   real vectors against one of the [`benchmark::BenchmarkFunction`]s.

pub mod benchmark;
pub mod coloring;

pub use benchmark::{BenchmarkFunction, ContinuousProblem};
pub use coloring::{Graph, GraphColoring};

use crate::error::{Result, SearchError};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

pub trait Objective<P: Phenotype>: Send + Sync {
    /// Cost of `candidate`. Lower is better.
    ///
    /// A candidate that does not fit the objective (wrong length) scores `NaN`,
    /// which the engines report through [`checked_cost`].
    fn evaluate(&self, candidate: &P) -> f64;

    /// Draws a uniformly random candidate of the objective's domain.
    fn random_candidate(&self, rng: &mut RandomNumberGenerator) -> Result<P>;
}

impl<P, O> Objective<P> for &O
where
    P: Phenotype,
    O: Objective<P> + ?Sized,
{
    fn evaluate(&self, candidate: &P) -> f64 {
        (**self).evaluate(candidate)
    }

    fn random_candidate(&self, rng: &mut RandomNumberGenerator) -> Result<P> {
        (**self).random_candidate(rng)
    }
}

/// Evaluates `candidate`, turning a non-finite cost into an error.
pub fn checked_cost<P, O>(objective: &O, candidate: &P) -> Result<f64>
where
    P: Phenotype,
    O: Objective<P> + ?Sized,
{
    let cost = objective.evaluate(candidate);
    if !cost.is_finite() {
        return Err(SearchError::FitnessCalculation(format!(
            "Non-finite cost {} for candidate {:?}",
            cost, candidate
        )));
    }
    Ok(cost)
}
