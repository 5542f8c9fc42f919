//! # RandomNumberGenerator
//!
//! Every stochastic decision made by the search engines (initialization, neighbor
//! choice, tournament sampling, crossover points, mutation coin flips) draws from
//! a single `RandomNumberGenerator` that the caller owns and passes down by
//! mutable reference. Seeding it with [`RandomNumberGenerator::from_seed`] makes a
//! whole run reproducible.
//!
//! ## Example
//!
//! ```rust
//! use metasearch::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let random_numbers = rng.fetch_uniform(0.0, 1.0, 5);
//!
//! for number in random_numbers {
//!     assert!((0.0..1.0).contains(&number));
//! }
//! ```

use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};
use std::collections::VecDeque;

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// search engines need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// Two generators built from the same seed produce the same sequence, which
    /// is what makes seeded searches reproducible.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates `num` floating-point numbers uniformly in `[from, to)`.
    pub fn fetch_uniform(&mut self, from: f64, to: f64, num: usize) -> VecDeque<f64> {
        let mut uniform_numbers = VecDeque::with_capacity(num);
        uniform_numbers.extend((0..num).map(|_| self.rng.gen_range(from..to)));
        uniform_numbers
    }

    /// Draws a real number uniformly in the half-open interval `[low, high)`.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low..high)
    }

    /// Draws a real number uniformly in the closed interval `[low, high]`.
    pub fn uniform_inclusive(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low..=high)
    }

    /// Draws an index uniformly in `0..len`.
    ///
    /// `len` must be positive; callers only use it on non-empty candidates.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Draws an integer uniformly in the closed interval `[low, high]`.
    pub fn integer_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }

    /// Draws a fair bit.
    pub fn bit(&mut self) -> bool {
        self.rng.gen::<bool>()
    }

    /// Returns `true` with the given probability.
    ///
    /// Probabilities outside `[0, 1]` are clamped.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Draws `amount` distinct indices from `0..len`, in random order.
    ///
    /// `amount` is capped at `len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, len, amount.min(len)).into_vec()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
