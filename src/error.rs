//! # Error Types
//!
//! This module defines the error type shared by every search engine, codec and
//! objective in the crate. Errors fall into three groups:
//!
//! - configuration errors (unknown strategy or objective names, invalid options,
//!   bit strings whose length does not split evenly into the problem dimension),
//! - input-format errors (malformed graph files, I/O failures),
//! - numeric errors (an objective producing a non-finite cost).
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use metasearch::error::{SearchError, Result};
//!
//! fn check_budget(iterations: usize) -> Result<()> {
//!     if iterations == 0 {
//!         return Err(SearchError::Configuration("iterations must be positive".into()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_budget(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use metasearch::error::{SearchError, OptionExt};
//!
//! fn lowest_cost(costs: &[f64]) -> metasearch::error::Result<f64> {
//!     costs
//!         .iter()
//!         .copied()
//!         .reduce(f64::min)
//!         .ok_or_else_search(|| SearchError::EmptyPopulation)
//! }
//!
//! assert_eq!(lowest_cost(&[3.0, 1.0]).unwrap(), 1.0);
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while configuring or running a search.
#[derive(Error, Debug)]
pub enum SearchError {
    /// An invalid configuration value was supplied.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The requested search strategy name is not one of the supported strategies.
    #[error("Unknown search strategy '{0}' (expected one of: aleatoria, escalada, iterada, genetico)")]
    UnknownStrategy(String),

    /// The requested objective function name is not a known benchmark.
    #[error("Unknown objective function '{0}' (expected one of: sphere, rastrigin, ackley, griewank, rosenbrock)")]
    UnknownObjective(String),

    /// A candidate of length zero was constructed.
    #[error("Empty candidate error: a candidate must have at least one position")]
    EmptyCandidate,

    /// An operation was attempted on an empty population.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A line of a graph description could not be interpreted.
    #[error("Graph format error on line {line}: {message}")]
    GraphFormat {
        /// 1-based line number in the input.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// An objective returned a cost that is not a finite number.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use metasearch::error::ResultExt;
/// use std::fs::File;
///
/// fn open_instance(path: &str) -> metasearch::error::Result<()> {
///     File::open(path).context(format!("Failed to open graph instance {}", path))?;
///     Ok(())
/// }
///
/// assert!(open_instance("/definitely/not/here.col").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `SearchError` prefixed with the provided context.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| SearchError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, SearchError>` using
    /// a closure to generate the error.
    fn ok_or_else_search<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> SearchError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_search<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> SearchError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_graph_format_message_names_line() {
        let err = SearchError::GraphFormat {
            line: 7,
            message: "expected 3 fields".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Graph format error on line 7: expected 3 fields"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(SearchError::Io(_))));
    }

    #[test]
    fn test_context_wraps_message() {
        let res: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::Other, "boom"));
        let err = res.context("while loading").unwrap_err();
        assert_eq!(err.to_string(), "while loading: boom");
    }

    #[test]
    fn test_option_ext() {
        let none: Option<u8> = None;
        assert!(matches!(
            none.ok_or_else_search(|| SearchError::EmptyPopulation),
            Err(SearchError::EmptyPopulation)
        ));
        assert_eq!(Some(3).ok_or_else_search(|| SearchError::EmptyPopulation).unwrap(), 3);
    }
}
