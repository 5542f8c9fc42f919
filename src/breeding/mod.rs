//! # Breeding
//!
//! Recombination operators used by the genetic algorithm to turn two parents
//! into two offspring. Mutation is representation specific and lives on
//! [`crate::phenotype::Phenotype::mutate`].
pub mod crossover;

pub use crossover::CrossoverOperator;
