use crate::error::{Result, SearchError};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection)
/// gives each member a slice of the wheel proportional to `1 / cost`, so cheap
/// members are drawn more often. A member with cost exactly 0 gets weight 1
/// instead of an infinite slice.
///
/// A point is drawn uniformly in `[0, total_weight)` and the first member whose
/// cumulative weight exceeds it is returned.
///
/// # Examples
///
/// ```
/// use metasearch::rng::RandomNumberGenerator;
/// use metasearch::selection::{RouletteWheelSelection, SelectionStrategy};
///
/// let costs = vec![0.5, 0.8, 0.3, 0.9, 0.0];
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// let selection = RouletteWheelSelection::new();
/// let parent = selection.select(&costs, &mut rng).unwrap();
/// assert!(parent < costs.len());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }

    /// Selection weight of a member with the given cost.
    pub fn weight(cost: f64) -> f64 {
        if cost == 0.0 {
            1.0
        } else {
            1.0 / cost
        }
    }

    /// Calculates the cumulative weights of the wheel.
    ///
    /// Weights are scaled by the largest one so the running total stays finite.
    /// If some cost is so small that its weight overflows, the wheel is shared
    /// evenly by those members alone.
    ///
    /// # Errors
    ///
    /// Returns an error if any cost is negative or not finite.
    fn cumulative_weights(&self, costs: &[f64]) -> Result<Vec<f64>> {
        if let Some(cost) = costs.iter().find(|c| !c.is_finite() || **c < 0.0) {
            return Err(SearchError::Configuration(format!(
                "Roulette wheel selection requires finite non-negative costs, got {}",
                cost
            )));
        }
        let weights: Vec<f64> = costs.iter().map(|&cost| Self::weight(cost)).collect();
        let weights: Vec<f64> = if weights.iter().any(|w| w.is_infinite()) {
            weights
                .iter()
                .map(|w| if w.is_infinite() { 1.0 } else { 0.0 })
                .collect()
        } else {
            let max = weights.iter().copied().fold(0.0, f64::max);
            weights.iter().map(|w| w / max).collect()
        };

        let mut total = 0.0;
        Ok(weights
            .iter()
            .map(|&weight| {
                total += weight;
                total
            })
            .collect())
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select(&self, costs: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        if costs.is_empty() {
            return Err(SearchError::EmptyPopulation);
        }
        let cumulative = self.cumulative_weights(costs)?;
        let total = cumulative[cumulative.len() - 1];
        let point = rng.uniform(0.0, total);

        // Rounding in the running sum can leave the point at the very end.
        Ok(cumulative
            .iter()
            .position(|&c| c > point)
            .or_else(|| cumulative.iter().position(|&c| c >= total))
            .unwrap_or(cumulative.len() - 1))
    }
}
