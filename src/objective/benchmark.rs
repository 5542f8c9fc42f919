//! Continuous benchmark landscapes.
//!
//! | function   | definition                                                        | default domain |
//! |------------|-------------------------------------------------------------------|----------------|
//! | sphere     | `Σ x²`                                                            | ±5.12          |
//! | rastrigin  | `10n + Σ (x² − 10 cos 2πx)`                                       | ±5.12          |
//! | ackley     | `20 + e − 20 exp(−0.2 √(Σx²/n)) − exp(Σ cos 2πx / n)`             | ±30            |
//! | griewank   | `1 + Σ x²/4000 − Π cos(x_i / √i)`, `i` from 1                     | ±600           |
//! | rosenbrock | `Σ 100 (x_{i+1} − x_i²)² + (x_i − 1)²`                            | ±2.048         |
//!
//! All five have their global minimum 0.

use std::f64::consts::{E, PI};
use std::fmt;
use std::str::FromStr;

use super::Objective;
use crate::codec::{BinaryCodec, Bounds};
use crate::error::{Result, SearchError};
use crate::representation::{BitString, RealVector};
use crate::rng::RandomNumberGenerator;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenchmarkFunction {
    Sphere,
    Rastrigin,
    Ackley,
    Griewank,
    Rosenbrock,
}

impl BenchmarkFunction {
    pub const ALL: [BenchmarkFunction; 5] = [
        BenchmarkFunction::Sphere,
        BenchmarkFunction::Rastrigin,
        BenchmarkFunction::Ackley,
        BenchmarkFunction::Griewank,
        BenchmarkFunction::Rosenbrock,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BenchmarkFunction::Sphere => "sphere",
            BenchmarkFunction::Rastrigin => "rastrigin",
            BenchmarkFunction::Ackley => "ackley",
            BenchmarkFunction::Griewank => "griewank",
            BenchmarkFunction::Rosenbrock => "rosenbrock",
        }
    }

    /// Half-width of the customary search domain.
    pub fn default_radius(&self) -> f64 {
        match self {
            BenchmarkFunction::Sphere | BenchmarkFunction::Rastrigin => 5.12,
            BenchmarkFunction::Ackley => 30.0,
            BenchmarkFunction::Griewank => 600.0,
            BenchmarkFunction::Rosenbrock => 2.048,
        }
    }

    pub fn default_bounds(&self) -> Result<Bounds> {
        Bounds::symmetric(self.default_radius())
    }

    pub fn evaluate(&self, x: &[f64]) -> f64 {
        match self {
            BenchmarkFunction::Sphere => sphere(x),
            BenchmarkFunction::Rastrigin => rastrigin(x),
            BenchmarkFunction::Ackley => ackley(x),
            BenchmarkFunction::Griewank => griewank(x),
            BenchmarkFunction::Rosenbrock => rosenbrock(x),
        }
    }
}

pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

pub fn rastrigin(x: &[f64]) -> f64 {
    10.0 * x.len() as f64
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Clamped at zero: at the optimum the closed form rounds to about `-4e-16`.
pub fn ackley(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    let n = x.len() as f64;
    let squares = x.iter().map(|xi| xi * xi).sum::<f64>() / n;
    let cosines = x.iter().map(|xi| (2.0 * PI * xi).cos()).sum::<f64>() / n;
    (20.0 + E - 20.0 * (-0.2 * squares.sqrt()).exp() - cosines.exp()).max(0.0)
}

pub fn griewank(x: &[f64]) -> f64 {
    let sum = x.iter().map(|xi| xi * xi / 4000.0).sum::<f64>();
    let product = x
        .iter()
        .enumerate()
        .map(|(i, xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product::<f64>();
    1.0 + sum - product
}

pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (w[0] - 1.0).powi(2))
        .sum()
}

impl fmt::Display for BenchmarkFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BenchmarkFunction {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        BenchmarkFunction::ALL
            .into_iter()
            .find(|function| function.name() == wanted)
            .ok_or_else(|| SearchError::UnknownObjective(s.to_string()))
    }
}

/// A benchmark function over a fixed dimension and domain.
///
/// Bit-string candidates are decoded through the problem's [`BinaryCodec`];
/// real-vector candidates are evaluated directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousProblem {
    function: BenchmarkFunction,
    codec: BinaryCodec,
}

impl ContinuousProblem {
    /// A problem over the function's default domain.
    pub fn new(
        function: BenchmarkFunction,
        dimension: usize,
        bits_per_dimension: usize,
    ) -> Result<Self> {
        Self::with_bounds(function, dimension, bits_per_dimension, function.default_bounds()?)
    }

    pub fn with_bounds(
        function: BenchmarkFunction,
        dimension: usize,
        bits_per_dimension: usize,
        bounds: Bounds,
    ) -> Result<Self> {
        Ok(Self {
            function,
            codec: BinaryCodec::new(dimension, bits_per_dimension, bounds)?,
        })
    }

    pub fn function(&self) -> BenchmarkFunction {
        self.function
    }

    pub fn codec(&self) -> &BinaryCodec {
        &self.codec
    }

    pub fn dimension(&self) -> usize {
        self.codec.dimension()
    }

    pub fn bounds(&self) -> Bounds {
        self.codec.bounds()
    }

    /// The real point a bit-string candidate stands for.
    pub fn decode(&self, candidate: &BitString) -> Result<Vec<f64>> {
        self.codec.decode(candidate.bits())
    }
}

impl Objective<BitString> for ContinuousProblem {
    fn evaluate(&self, candidate: &BitString) -> f64 {
        match self.decode(candidate) {
            Ok(values) => self.function.evaluate(&values),
            Err(_) => f64::NAN,
        }
    }

    fn random_candidate(&self, rng: &mut RandomNumberGenerator) -> Result<BitString> {
        BitString::random(self.codec.total_bits(), rng)
    }
}

impl Objective<RealVector> for ContinuousProblem {
    fn evaluate(&self, candidate: &RealVector) -> f64 {
        if candidate.values().len() != self.dimension() {
            return f64::NAN;
        }
        self.function.evaluate(candidate.values())
    }

    fn random_candidate(&self, rng: &mut RandomNumberGenerator) -> Result<RealVector> {
        RealVector::random(self.dimension(), self.bounds(), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_sphere_at_origin_is_exactly_zero() {
        for dimension in [1, 2, 10, 30] {
            assert_eq!(sphere(&vec![0.0; dimension]), 0.0);
        }
    }

    #[test]
    fn test_all_minima_are_zero() {
        for dimension in [2, 5] {
            let origin = vec![0.0; dimension];
            let ones = vec![1.0; dimension];
            assert!(close(rastrigin(&origin), 0.0));
            assert!(close(ackley(&origin), 0.0));
            assert!(close(griewank(&origin), 0.0));
            assert!(close(rosenbrock(&ones), 0.0));
        }
    }

    #[test]
    fn test_known_values() {
        assert!(close(sphere(&[1.0, 2.0, 3.0]), 14.0));
        // cos(2π) = 1, so each coordinate at 1 contributes 1 - 10 + 10.
        assert!(close(rastrigin(&[1.0, 1.0]), 2.0));
        assert!(close(rosenbrock(&[0.0, 0.0]), 1.0));
        assert!(close(rosenbrock(&[-1.0, 1.0, 1.0]), 4.0));
        assert!(close(griewank(&[PI]), 1.0 + PI * PI / 4000.0 + 1.0));
    }

    #[test]
    fn test_costs_are_non_negative() {
        let mut rng = RandomNumberGenerator::from_seed(17);
        for function in BenchmarkFunction::ALL {
            let bounds = function.default_bounds().unwrap();
            for _ in 0..50 {
                let x: Vec<f64> = (0..6)
                    .map(|_| rng.uniform_inclusive(bounds.low(), bounds.high()))
                    .collect();
                assert!(function.evaluate(&x) >= 0.0, "{} at {:?}", function, x);
            }
        }
    }

    #[test]
    fn test_parse_names() {
        for function in BenchmarkFunction::ALL {
            assert_eq!(function.name().parse::<BenchmarkFunction>().unwrap(), function);
        }
        assert_eq!(
            "  Ackley ".parse::<BenchmarkFunction>().unwrap(),
            BenchmarkFunction::Ackley
        );
        assert!(matches!(
            "schwefel".parse::<BenchmarkFunction>(),
            Err(SearchError::UnknownObjective(name)) if name == "schwefel"
        ));
    }

    #[test]
    fn test_bit_string_and_real_agree() {
        let problem = ContinuousProblem::new(BenchmarkFunction::Rastrigin, 3, 12).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(5);
        let bits: BitString = problem.random_candidate(&mut rng).unwrap();

        let values = problem.decode(&bits).unwrap();
        let point = RealVector::new(values, problem.bounds()).unwrap();

        assert_eq!(
            Objective::<BitString>::evaluate(&problem, &bits),
            Objective::<RealVector>::evaluate(&problem, &point)
        );
    }

    #[test]
    fn test_wrong_length_scores_nan() {
        let problem = ContinuousProblem::new(BenchmarkFunction::Sphere, 2, 8).unwrap();
        let short: BitString = "0101".parse().unwrap();
        assert!(Objective::<BitString>::evaluate(&problem, &short).is_nan());
    }
}
