//! Error handling module for the sequence engine
//!
//! Provides the error types returned by the library using thiserror.
//! The binary layer wraps these in `anyhow` with context.

use thiserror::Error;

/// Errors returned by a sequence run
#[derive(Error, Debug)]
pub enum SequenceError {
    /// The lower bound is greater than the upper bound. Nothing was written.
    #[error("Range error: first bound {first} is greater than last bound {last}")]
    Range { first: i64, last: i64 },

    /// The sink rejected a write. Output written before the failure stays written.
    #[error("Write error: {0}")]
    Write(#[source] std::io::Error),

    /// The run visited more values than the configured iteration limit allows
    #[error("Iteration limit of {limit} exceeded")]
    IterationLimit { limit: u64 },
}

/// Errors produced while reading the upper bound from an input source
#[derive(Error, Debug)]
pub enum InputError {
    /// Reading the input failed
    #[error("Input error: {0}")]
    Read(#[from] std::io::Error),

    /// The input was not a valid integer
    #[error("Input error: {input:?} is not a valid integer: {source}")]
    Parse {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Errors found while validating a rules configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A rule has no divisors and would match every number
    #[error("Configuration error: rule {index} ({label:?}) has no divisors")]
    NoDivisors { index: usize, label: String },

    /// A rule has a zero divisor
    #[error("Configuration error: rule {index} ({label:?}) has a zero divisor")]
    ZeroDivisor { index: usize, label: String },

    /// A rule has an empty label
    #[error("Configuration error: rule {index} has an empty label")]
    EmptyLabel { index: usize },

    /// Fixed steps must advance the cursor
    #[error("Configuration error: step size must be positive, got {0}")]
    StepSize(i64),

    /// An iteration limit of zero would reject every run
    #[error("Configuration error: max_iterations must be greater than zero")]
    ZeroIterationLimit,
}

/// Result type alias for sequence runs
pub type Result<T> = std::result::Result<T, SequenceError>;

impl SequenceError {
    /// Create a range error
    pub fn range(first: i64, last: i64) -> Self {
        Self::Range { first, last }
    }

    /// True if the error was raised before anything was written
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Range { .. })
    }
}
