//! Candidate representations.
//!
//! - [`Coloring`]: one positive color id per graph vertex.
//! - [`BitString`]: fixed-length bits, decoded into reals by [`crate::codec`].
//! - [`RealVector`]: reals held directly, each inside a [`crate::codec::Bounds`].

pub mod bit_string;
pub mod coloring;
pub mod real_vector;

pub use bit_string::BitString;
pub use coloring::Coloring;
pub use real_vector::RealVector;
