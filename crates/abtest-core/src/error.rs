//! Error types for experiment statistics
//!
//! Provides a unified error type for all abtest crates.

use thiserror::Error;

/// Core error type for experiment calculations
#[derive(Error, Debug)]
pub enum Error {
    /// A field of the input violated its constraint
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A denominator collapsed to zero and the requested quantity is undefined
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// An intermediate value left the representable range
    #[error("Numeric overflow: {0}")]
    NumericOverflow(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a conversion count exceeding its traffic
    pub fn conversions_exceed_visitors(conversions: u64, visitors: u64) -> Self {
        Self::InvalidInput(format!(
            "conversions ({conversions}) cannot exceed visitors ({visitors})"
        ))
    }

    /// Create an error for a rate outside the open unit interval
    pub fn rate_out_of_range(name: &str, value: f64) -> Self {
        Self::InvalidInput(format!("{name} {value} must be in (0, 1)"))
    }

    /// Create an error for a degenerate test statistic
    pub fn degenerate(context: &str) -> Self {
        Self::DivisionByZero(context.to_string())
    }
}
