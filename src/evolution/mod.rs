//! # Evolution
//!
//! The genetic algorithm: [`EvolutionOptions`] configure a run and
//! [`EvolutionLauncher`] drives it against an objective.
pub mod launcher;
pub mod options;

pub use launcher::{EvolutionLauncher, EvolutionResult};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
