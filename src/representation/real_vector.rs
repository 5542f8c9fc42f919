use crate::breeding::CrossoverOperator;
use crate::codec::Bounds;
use crate::error::{Result, SearchError};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// A point of a continuous domain, every coordinate inside `bounds`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RealVector {
    values: Vec<f64>,
    bounds: Bounds,
}

impl RealVector {
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyCandidate`] for an empty vector and a
    /// configuration error if a value lies outside `bounds`.
    pub fn new(values: Vec<f64>, bounds: Bounds) -> Result<Self> {
        if values.is_empty() {
            return Err(SearchError::EmptyCandidate);
        }
        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !bounds.contains(**v)) {
            return Err(SearchError::Configuration(format!(
                "Value {} at position {} lies outside [{}, {}]",
                v,
                i,
                bounds.low(),
                bounds.high()
            )));
        }
        Ok(Self { values, bounds })
    }

    /// Draws every coordinate uniformly from `bounds`.
    pub fn random(
        dimension: usize,
        bounds: Bounds,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        let values = (0..dimension)
            .map(|_| rng.uniform_inclusive(bounds.low(), bounds.high()))
            .collect();
        Self::new(values, bounds)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl Phenotype for RealVector {
    type Gene = f64;

    fn genes(&self) -> &[f64] {
        &self.values
    }

    fn genes_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    fn randomize_position(&mut self, index: usize, rng: &mut RandomNumberGenerator) {
        self.values[index] = rng.uniform_inclusive(self.bounds.low(), self.bounds.high());
    }

    /// Uniform-reset mutation: each coordinate is redrawn from the bounds with
    /// `probability`.
    fn mutate(&mut self, probability: f64, rng: &mut RandomNumberGenerator) {
        for index in 0..self.values.len() {
            if rng.chance(probability) {
                self.randomize_position(index, rng);
            }
        }
    }

    fn preferred_crossover() -> CrossoverOperator {
        CrossoverOperator::MultiPoint { points: 2 }
    }
}
