use std::fmt;
use std::str::FromStr;

use crate::breeding::CrossoverOperator;
use crate::error::{Result, SearchError};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// A fixed-length bit string. Bit `0` is the most significant bit of the first
/// codec section.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyCandidate`] for an empty string.
    pub fn new(bits: Vec<bool>) -> Result<Self> {
        if bits.is_empty() {
            return Err(SearchError::EmptyCandidate);
        }
        Ok(Self { bits })
    }

    /// Draws `len` fair bits.
    pub fn random(len: usize, rng: &mut RandomNumberGenerator) -> Result<Self> {
        Self::new((0..len).map(|_| rng.bit()).collect())
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}

impl Phenotype for BitString {
    type Gene = bool;

    fn genes(&self) -> &[bool] {
        &self.bits
    }

    fn genes_mut(&mut self) -> &mut [bool] {
        &mut self.bits
    }

    fn randomize_position(&mut self, index: usize, rng: &mut RandomNumberGenerator) {
        self.bits[index] = rng.bit();
    }

    /// Bit-flip mutation: every bit flips independently with `probability`.
    fn mutate(&mut self, probability: f64, rng: &mut RandomNumberGenerator) {
        for bit in self.bits.iter_mut() {
            if rng.chance(probability) {
                *bit = !*bit;
            }
        }
    }

    fn preferred_crossover() -> CrossoverOperator {
        CrossoverOperator::MultiPoint { points: 2 }
    }
}

impl FromStr for BitString {
    type Err = SearchError;

    /// Parses a string of `0` and `1` characters.
    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .chars()
            .enumerate()
            .map(|(i, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(SearchError::Configuration(format!(
                    "Invalid character '{}' at position {} of bit string",
                    other, i
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(bits)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
