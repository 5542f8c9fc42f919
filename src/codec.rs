//! # Binary Codec
//!
//! Maps fixed-length bit strings onto real vectors inside a domain bound so the
//! genetic algorithm can recombine bits while the benchmark functions see reals.
//!
//! A bit string of length `dimension * bits_per_dimension` is split into
//! `dimension` sections. Each section is read as an unsigned big-endian integer
//! `v` and mapped linearly onto `[low, high]`:
//!
//! ```text
//! low + v / (2^bits_per_dimension - 1) * (high - low)
//! ```
//!
//! so the all-zero section decodes to `low` and the all-one section to `high`.
//! Sections may be any length; beyond 53 bits the extra low-order bits fall
//! below `f64` resolution and no longer move the decoded value.
//!
//! ## Example
//!
//! ```rust
//! use metasearch::codec::decode;
//!
//! let bits = [false, false, true, true];
//! let values = decode(&bits, 2, -1.0, 1.0).unwrap();
//!
//! assert!((values[0] + 1.0).abs() < 1e-12);
//! assert!((values[1] - 1.0).abs() < 1e-12);
//! ```

use crate::error::{Result, SearchError};

/// Bits of a section that still change its decoded `f64` value.
const SIGNIFICANT_BITS: usize = f64::MANTISSA_DIGITS as usize;

/// A closed interval `[low, high]` every decoded value must lie in.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    low: f64,
    high: f64,
}

impl Bounds {
    /// Creates a new bound.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either end is not finite or if
    /// `low >= high`.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(SearchError::Configuration(format!(
                "Domain bounds must be finite, got [{}, {}]",
                low, high
            )));
        }
        if low >= high {
            return Err(SearchError::Configuration(format!(
                "Lower bound {} must be below upper bound {}",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    /// A bound symmetric around zero, `[-radius, radius]`.
    pub fn symmetric(radius: f64) -> Result<Self> {
        Self::new(-radius, radius)
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.low, self.high)
    }
}

/// Decodes bit strings of a fixed layout into real vectors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryCodec {
    dimension: usize,
    bits_per_dimension: usize,
    bounds: Bounds,
}

impl BinaryCodec {
    /// Creates a codec for `dimension` values of `bits_per_dimension` bits each.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `dimension` or `bits_per_dimension`
    /// is zero.
    pub fn new(dimension: usize, bits_per_dimension: usize, bounds: Bounds) -> Result<Self> {
        if dimension == 0 {
            return Err(SearchError::Configuration(
                "Dimension must be greater than 0".to_string(),
            ));
        }
        if bits_per_dimension == 0 {
            return Err(SearchError::Configuration(
                "Bits per dimension must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            dimension,
            bits_per_dimension,
            bounds,
        })
    }

    /// Creates a codec from a total bit-string length, which must split evenly
    /// into `dimension` sections.
    pub fn for_length(length: usize, dimension: usize, bounds: Bounds) -> Result<Self> {
        if dimension == 0 {
            return Err(SearchError::Configuration(
                "Dimension must be greater than 0".to_string(),
            ));
        }
        if length == 0 || length % dimension != 0 {
            return Err(SearchError::Configuration(format!(
                "Bit string length {} is not evenly divisible by dimension {}",
                length, dimension
            )));
        }
        Self::new(dimension, length / dimension, bounds)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn bits_per_dimension(&self) -> usize {
        self.bits_per_dimension
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Total number of bits a candidate must carry.
    pub fn total_bits(&self) -> usize {
        self.dimension * self.bits_per_dimension
    }

    /// `1 - 2^-bits`, the share of `[0, 1)` a section can reach.
    fn section_span(&self) -> f64 {
        let bits = self.bits_per_dimension.min(SIGNIFICANT_BITS + 1);
        1.0 - 0.5f64.powi(bits as i32)
    }

    /// Reads a section as the fraction `v / 2^bits` in `[0, 1)`.
    fn section_fraction(section: &[bool]) -> f64 {
        section
            .iter()
            .rev()
            .fold(0.0, |acc, &bit| (acc + if bit { 1.0 } else { 0.0 }) / 2.0)
    }

    /// Decodes `bits` into `dimension` reals.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `bits.len()` differs from
    /// [`BinaryCodec::total_bits`].
    pub fn decode(&self, bits: &[bool]) -> Result<Vec<f64>> {
        if bits.len() != self.total_bits() {
            return Err(SearchError::Configuration(format!(
                "Expected a bit string of length {}, got {}",
                self.total_bits(),
                bits.len()
            )));
        }
        let span = self.section_span();
        let bounds = self.bounds;

        Ok(bits
            .chunks(self.bits_per_dimension)
            .map(|section| {
                let ratio = Self::section_fraction(section) / span;
                bounds.clamp(bounds.low() + ratio * bounds.width())
            })
            .collect())
    }

    /// Encodes reals into the nearest representable bit pattern.
    ///
    /// Values outside the bounds are clamped first. Bits past the first 53 of a
    /// section repeat the last significant bit.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `values.len()` differs from the
    /// codec dimension.
    pub fn encode(&self, values: &[f64]) -> Result<Vec<bool>> {
        if values.len() != self.dimension {
            return Err(SearchError::Configuration(format!(
                "Expected {} values to encode, got {}",
                self.dimension,
                values.len()
            )));
        }
        let significant = self.bits_per_dimension.min(SIGNIFICANT_BITS);
        let max = ((1u64 << significant) - 1) as f64;
        let mut bits = Vec::with_capacity(self.total_bits());
        for &value in values {
            let ratio = (self.bounds.clamp(value) - self.bounds.low()) / self.bounds.width();
            let quantised = (ratio * max).round() as u64;
            bits.extend(
                (0..significant)
                    .rev()
                    .map(|shift| (quantised >> shift) & 1 == 1),
            );
            let last = quantised & 1 == 1;
            bits.extend(std::iter::repeat(last).take(self.bits_per_dimension - significant));
        }
        Ok(bits)
    }
}

/// Decodes `bits` into `dimension` reals inside `[low, high]`.
///
/// This is the one-shot form of [`BinaryCodec::decode`].
///
/// # Errors
///
/// Returns a configuration error if the bounds are invalid, if `dimension` is
/// zero, or if `bits.len()` is not evenly divisible by `dimension`.
pub fn decode(bits: &[bool], dimension: usize, low: f64, high: f64) -> Result<Vec<f64>> {
    let codec = BinaryCodec::for_length(bits.len(), dimension, Bounds::new(low, high)?)?;
    codec.decode(bits)
}
