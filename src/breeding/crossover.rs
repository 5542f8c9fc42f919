//! # CrossoverOperator
//!
//! All operators cut the gene sequence at one or more boundaries and let the two
//! offspring alternate parent segments at every boundary:
//!
//! ```text
//! parents   AAAAAAAA  BBBBBBBB
//! cuts         ^   ^
//! offspring AAABBBBA  BBBAAAAB   (multi-point, cuts at 3 and 7)
//! ```
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SearchError};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// How the cut points of a crossover are chosen.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverOperator {
    /// A single cut at `len / 2`; the tails are swapped.
    Midpoint,
    /// A single cut drawn uniformly from `1..len`; the tails are swapped.
    SinglePoint,
    /// `points` distinct cuts drawn from `1..len` and sorted. Capped at `len - 1`.
    MultiPoint { points: usize },
}

impl CrossoverOperator {
    /// Checks operator parameters.
    pub fn validate(&self) -> Result<()> {
        match self {
            CrossoverOperator::MultiPoint { points: 0 } => Err(SearchError::Configuration(
                "Multi-point crossover needs at least one cut point".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Draws the sorted cut positions for sequences of length `len`.
    ///
    /// Every cut lies in `1..len`; sequences shorter than 2 have no cuts.
    pub fn cut_points(&self, len: usize, rng: &mut RandomNumberGenerator) -> Vec<usize> {
        if len < 2 {
            return Vec::new();
        }
        match *self {
            CrossoverOperator::Midpoint => vec![len / 2],
            CrossoverOperator::SinglePoint => vec![rng.integer_inclusive(1, len - 1)],
            CrossoverOperator::MultiPoint { points } => {
                let mut cuts: Vec<usize> = rng
                    .sample_indices(len - 1, points)
                    .into_iter()
                    .map(|i| i + 1)
                    .collect();
                cuts.sort_unstable();
                cuts
            }
        }
    }

    /// Recombines two gene sequences in place.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the sequences differ in length.
    pub fn apply<G>(
        &self,
        first: &mut [G],
        second: &mut [G],
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        if first.len() != second.len() {
            return Err(SearchError::Configuration(format!(
                "Cannot cross parents of different lengths ({} and {})",
                first.len(),
                second.len()
            )));
        }
        let cuts = self.cut_points(first.len(), rng);
        swap_alternate_segments(first, second, &cuts);
        Ok(())
    }

    /// Produces two offspring from two parents. The parents are not modified.
    pub fn recombine<P: Phenotype>(
        &self,
        first: &P,
        second: &P,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(P, P)> {
        let mut child_a = first.clone();
        let mut child_b = second.clone();
        self.apply(child_a.genes_mut(), child_b.genes_mut(), rng)?;
        Ok((child_a, child_b))
    }
}

/// Swaps every odd segment delimited by the sorted `cuts`.
fn swap_alternate_segments<G>(first: &mut [G], second: &mut [G], cuts: &[usize]) {
    let mut boundaries = cuts.iter().copied().peekable();
    let mut swapping = false;
    for i in 0..first.len() {
        while boundaries.peek() == Some(&i) {
            swapping = !swapping;
            boundaries.next();
        }
        if swapping {
            std::mem::swap(&mut first[i], &mut second[i]);
        }
    }
}

impl fmt::Display for CrossoverOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrossoverOperator::Midpoint => write!(f, "midpoint"),
            CrossoverOperator::SinglePoint => write!(f, "single-point"),
            CrossoverOperator::MultiPoint { points } => write!(f, "{}-point", points),
        }
    }
}

impl FromStr for CrossoverOperator {
    type Err = SearchError;

    /// Accepts `midpoint`, `single-point` and `<n>-point`.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "midpoint" => Ok(CrossoverOperator::Midpoint),
            "single-point" | "single" | "1-point" => Ok(CrossoverOperator::SinglePoint),
            other => other
                .strip_suffix("-point")
                .and_then(|n| n.parse::<usize>().ok())
                .map(|points| CrossoverOperator::MultiPoint { points })
                .ok_or_else(|| {
                    SearchError::Configuration(format!("Unknown crossover operator '{}'", s))
                }),
        }
    }
}
