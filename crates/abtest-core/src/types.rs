//! Shared value types for experiment calculations

use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Observed traffic and conversions for one experiment variant
///
/// The constructor enforces the two invariants every calculator relies on:
/// at least one visitor, and no more conversions than visitors. Instances
/// are plain immutable values; each calculation consumes them by reference
/// and produces a fresh result record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantObservation {
    visitors: u64,
    conversions: u64,
}

impl VariantObservation {
    /// Create a validated observation
    pub fn new(visitors: u64, conversions: u64) -> Result<Self> {
        if visitors == 0 {
            return Err(Error::InvalidInput(
                "visitors must be at least 1".to_string(),
            ));
        }
        if conversions > visitors {
            return Err(Error::conversions_exceed_visitors(conversions, visitors));
        }
        Ok(Self {
            visitors,
            conversions,
        })
    }

    /// Number of visitors exposed to the variant
    pub fn visitors(&self) -> u64 {
        self.visitors
    }

    /// Number of visitors that converted
    pub fn conversions(&self) -> u64 {
        self.conversions
    }

    /// Number of visitors that did not convert
    pub fn failures(&self) -> u64 {
        self.visitors - self.conversions
    }

    /// Observed conversion rate, in [0, 1]
    pub fn conversion_rate(&self) -> f64 {
        self.conversions as f64 / self.visitors as f64
    }
}

impl fmt::Display for VariantObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({:.2}%)",
            self.conversions,
            self.visitors,
            self.conversion_rate() * 100.0
        )
    }
}

/// Which alternative hypothesis the Z-test evaluates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TailMode {
    /// The variants differ in either direction
    TwoTailed,
    /// Variant B converts better than variant A
    OneTailed,
}

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (center of interval)
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.4}, {:.4}], estimate: {:.4}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}
