use std::fmt;

use crate::breeding::CrossoverOperator;
use crate::error::{Result, SearchError};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// A color assignment: position `i` holds the color id of vertex `i`.
///
/// Color ids are positive. New ids are always drawn from `[1, num_colors]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coloring {
    colors: Vec<usize>,
    num_colors: usize,
}

impl Coloring {
    /// Wraps an existing assignment.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyCandidate`] for an empty assignment and a
    /// configuration error if `num_colors` is zero or a color id is zero.
    pub fn new(colors: Vec<usize>, num_colors: usize) -> Result<Self> {
        if colors.is_empty() {
            return Err(SearchError::EmptyCandidate);
        }
        if num_colors == 0 {
            return Err(SearchError::Configuration(
                "Number of colors must be greater than 0".to_string(),
            ));
        }
        if let Some(position) = colors.iter().position(|&c| c == 0) {
            return Err(SearchError::Configuration(format!(
                "Color ids start at 1, found 0 at position {}",
                position
            )));
        }
        Ok(Self { colors, num_colors })
    }

    /// Draws every position uniformly from `[1, num_colors]`.
    pub fn random(len: usize, num_colors: usize, rng: &mut RandomNumberGenerator) -> Result<Self> {
        if num_colors == 0 {
            return Err(SearchError::Configuration(
                "Number of colors must be greater than 0".to_string(),
            ));
        }
        let colors = (0..len)
            .map(|_| rng.integer_inclusive(1, num_colors))
            .collect();
        Self::new(colors, num_colors)
    }

    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    pub fn num_colors(&self) -> usize {
        self.num_colors
    }
}

impl Phenotype for Coloring {
    type Gene = usize;

    fn genes(&self) -> &[usize] {
        &self.colors
    }

    fn genes_mut(&mut self) -> &mut [usize] {
        &mut self.colors
    }

    fn randomize_position(&mut self, index: usize, rng: &mut RandomNumberGenerator) {
        self.colors[index] = rng.integer_inclusive(1, self.num_colors);
    }

    /// Swap mutation: for every position, with `probability`, two randomly
    /// chosen positions exchange their colors. The multiset of colors is kept.
    fn mutate(&mut self, probability: f64, rng: &mut RandomNumberGenerator) {
        let len = self.colors.len();
        for _ in 0..len {
            if rng.chance(probability) {
                let a = rng.index(len);
                let b = rng.index(len);
                self.colors.swap(a, b);
            }
        }
    }

    fn preferred_crossover() -> CrossoverOperator {
        CrossoverOperator::Midpoint
    }
}

impl fmt::Display for Coloring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", color)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_zero_colors() {
        assert!(matches!(
            Coloring::new(vec![], 3),
            Err(SearchError::EmptyCandidate)
        ));
        assert!(Coloring::new(vec![1, 2], 0).is_err());
        assert!(Coloring::new(vec![1, 0], 2).is_err());
    }

    #[test]
    fn test_random_stays_in_alphabet() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        let coloring = Coloring::random(50, 4, &mut rng).unwrap();

        assert_eq!(coloring.len(), 50);
        assert!(coloring.colors().iter().all(|&c| (1..=4).contains(&c)));
    }

    #[test]
    fn test_neighbor_changes_at_most_one_position() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let original = Coloring::new(vec![1, 1, 1, 1, 1, 1], 6).unwrap();

        for _ in 0..50 {
            let neighbor = original.neighbor(&mut rng);
            let differing = original
                .colors()
                .iter()
                .zip(neighbor.colors())
                .filter(|(a, b)| a != b)
                .count();
            assert!(differing <= 1);
        }
        assert_eq!(original.colors(), &[1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_swap_mutation_keeps_color_multiset() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let mut coloring = Coloring::new(vec![1, 2, 3, 4, 5, 6, 7, 8], 8).unwrap();

        coloring.mutate(1.0, &mut rng);

        let mut sorted = coloring.colors().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_zero_probability_mutation_is_identity() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let mut coloring = Coloring::new(vec![3, 1, 2], 3).unwrap();
        coloring.mutate(0.0, &mut rng);
        assert_eq!(coloring.colors(), &[3, 1, 2]);
    }

    #[test]
    fn test_display() {
        let coloring = Coloring::new(vec![1, 2, 3], 3).unwrap();
        assert_eq!(coloring.to_string(), "[1 2 3]");
    }
}
