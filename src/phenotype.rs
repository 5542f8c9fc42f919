//! # Phenotype Trait
//!
//! The `Phenotype` trait is the common abstraction over candidate solutions.
//! A phenotype is an ordered, fixed-length sequence of genes over a legal
//! alphabet. The engines only ever touch candidates through this trait:
//!
//! - local search asks for a [`Phenotype::neighbor`] or a [`Phenotype::perturb`]ation,
//! - the genetic algorithm recombines [`Phenotype::genes_mut`] slices through a
//!   crossover operator and calls [`Phenotype::mutate`] on every offspring.
//!
//! Three representations ship with the crate, see [`crate::representation`]:
//! colorings (integer color ids), bit strings (decoded by the codec) and real
//! vectors.
//!
//! ## Implementing the Trait
//!
//! ```rust
//! use metasearch::breeding::CrossoverOperator;
//! use metasearch::phenotype::Phenotype;
//! use metasearch::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug)]
//! struct Dice {
//!     faces: Vec<u8>,
//! }
//!
//! impl Phenotype for Dice {
//!     type Gene = u8;
//!
//!     fn genes(&self) -> &[u8] {
//!         &self.faces
//!     }
//!
//!     fn genes_mut(&mut self) -> &mut [u8] {
//!         &mut self.faces
//!     }
//!
//!     fn randomize_position(&mut self, index: usize, rng: &mut RandomNumberGenerator) {
//!         self.faces[index] = rng.integer_inclusive(1, 6) as u8;
//!     }
//!
//!     fn mutate(&mut self, probability: f64, rng: &mut RandomNumberGenerator) {
//!         for index in 0..self.faces.len() {
//!             if rng.chance(probability) {
//!                 self.randomize_position(index, rng);
//!             }
//!         }
//!     }
//!
//!     fn preferred_crossover() -> CrossoverOperator {
//!         CrossoverOperator::SinglePoint
//!     }
//! }
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let dice = Dice { faces: vec![1, 2, 3] };
//! let neighbor = dice.neighbor(&mut rng);
//! assert_eq!(neighbor.len(), 3);
//! ```

use std::fmt::Debug;

use crate::breeding::CrossoverOperator;
use crate::rng::RandomNumberGenerator;

/// Trait for types that represent candidate solutions.
///
/// Types implementing this trait must also implement `Clone`, `Debug`, `Send`
/// and `Sync` so populations can be evaluated in parallel and recorded bests
/// can be copied out as values.
pub trait Phenotype: Clone + Debug + Send + Sync {
    /// A single position of the candidate.
    type Gene: Clone + Debug + Send + Sync;

    fn genes(&self) -> &[Self::Gene];

    fn genes_mut(&mut self) -> &mut [Self::Gene];

    fn len(&self) -> usize {
        self.genes().len()
    }

    /// Constructors reject empty candidates, so this is `false` for every
    /// candidate the crate builds.
    fn is_empty(&self) -> bool {
        self.genes().is_empty()
    }

    /// Reassigns `index` to a uniformly random value of the legal alphabet.
    fn randomize_position(&mut self, index: usize, rng: &mut RandomNumberGenerator);

    /// Applies the representation's mutation with per-position `probability`.
    fn mutate(&mut self, probability: f64, rng: &mut RandomNumberGenerator);

    /// The crossover operator the genetic algorithm uses for this representation
    /// unless the options name another one.
    fn preferred_crossover() -> CrossoverOperator;

    /// Produces a single-step neighbor: one uniformly chosen position reassigned
    /// to a uniformly random legal value. `self` is left untouched.
    fn neighbor(&self, rng: &mut RandomNumberGenerator) -> Self {
        let mut neighbor = self.clone();
        let index = rng.index(self.len());
        neighbor.randomize_position(index, rng);
        neighbor
    }

    /// Resets `positions` randomly chosen positions (drawn with replacement)
    /// to random legal values.
    fn perturb(&mut self, positions: usize, rng: &mut RandomNumberGenerator) {
        for _ in 0..positions {
            let index = rng.index(self.len());
            self.randomize_position(index, rng);
        }
    }
}
