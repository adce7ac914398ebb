//! Required sample size for a two-variant experiment
//!
//! Inverts the two-proportion power formula: given the baseline rate, the
//! relative lift worth detecting, and the target confidence and power, how
//! many users does each variant need before the experiment starts.

use abtest_core::{Error, Result};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

/// Confidence levels the calculator accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceLevel {
    /// 90% confidence (alpha = 0.10)
    Ninety,
    /// 95% confidence (alpha = 0.05)
    NinetyFive,
    /// 99% confidence (alpha = 0.01)
    NinetyNine,
}

impl ConfidenceLevel {
    /// Parse a whole-percent confidence level from the supported set
    pub fn from_percent(percent: u32) -> Result<Self> {
        match percent {
            90 => Ok(Self::Ninety),
            95 => Ok(Self::NinetyFive),
            99 => Ok(Self::NinetyNine),
            other => Err(Error::InvalidInput(format!(
                "confidence level {other}% is not one of 90, 95, 99"
            ))),
        }
    }

    /// The confidence level as a whole percent
    pub fn percent(&self) -> u32 {
        match self {
            Self::Ninety => 90,
            Self::NinetyFive => 95,
            Self::NinetyNine => 99,
        }
    }

    /// Significance level alpha = 1 - confidence
    pub fn alpha(&self) -> f64 {
        1.0 - f64::from(self.percent()) / 100.0
    }
}

/// Statistical power levels the calculator accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PowerLevel {
    /// 80% power (beta risk = 0.20)
    Eighty,
    /// 90% power (beta risk = 0.10)
    Ninety,
}

impl PowerLevel {
    /// Parse a whole-percent power level from the supported set
    pub fn from_percent(percent: u32) -> Result<Self> {
        match percent {
            80 => Ok(Self::Eighty),
            90 => Ok(Self::Ninety),
            other => Err(Error::InvalidInput(format!(
                "power level {other}% is not one of 80, 90"
            ))),
        }
    }

    /// The power level as a whole percent
    pub fn percent(&self) -> u32 {
        match self {
            Self::Eighty => 80,
            Self::Ninety => 90,
        }
    }

    /// Type II error risk beta = 1 - power
    pub fn beta_risk(&self) -> f64 {
        1.0 - f64::from(self.percent()) / 100.0
    }
}

/// Required users per variant, the ceiling of the real-valued estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleSizeResult {
    /// Users needed in each of the two variants
    pub required_n_per_variant: u64,
}

/// Sample-size calculator for a two-variant experiment
#[derive(Debug, Clone, Copy)]
pub struct SampleSizeCalculator {
    confidence: ConfidenceLevel,
    power: PowerLevel,
}

impl SampleSizeCalculator {
    /// Create a calculator for the given confidence and power targets
    pub fn new(confidence: ConfidenceLevel, power: PowerLevel) -> Self {
        Self { confidence, power }
    }

    /// Users needed per variant to detect a relative lift of `mde_relative`
    /// over `baseline_rate`
    pub fn required_sample_size(
        &self,
        baseline_rate: f64,
        mde_relative: f64,
    ) -> Result<SampleSizeResult> {
        if !baseline_rate.is_finite() || baseline_rate <= 0.0 || baseline_rate >= 1.0 {
            return Err(Error::rate_out_of_range("baseline_rate", baseline_rate));
        }
        if !mde_relative.is_finite() || mde_relative <= 0.0 || mde_relative > 1.0 {
            return Err(Error::InvalidInput(format!(
                "mde_relative {mde_relative} must be in (0, 1]"
            )));
        }

        let p1 = baseline_rate;
        let p2 = p1 * (1.0 + mde_relative);
        if p2 >= 1.0 {
            return Err(Error::InvalidInput(format!(
                "target rate {p2} after the relative lift must stay below 1"
            )));
        }
        // A lift below f64 resolution leaves p2 == p1 and an undefined
        // requirement, not an infinite one.
        if p2 == p1 {
            return Err(Error::degenerate(
                "minimum detectable effect vanishes at this baseline",
            ));
        }

        let normal = Normal::new(0.0, 1.0).expect("standard normal parameters are valid");
        let z_alpha = normal.inverse_cdf(1.0 - self.confidence.alpha() / 2.0);
        let z_beta = normal.inverse_cdf(1.0 - self.power.beta_risk());

        let pooled = (p1 + p2) / 2.0;
        let n = 2.0 * pooled * (1.0 - pooled) * (z_alpha + z_beta).powi(2) / (p2 - p1).powi(2);

        if !n.is_finite() || n > u64::MAX as f64 {
            return Err(Error::NumericOverflow(format!(
                "required sample size for baseline {p1} and mde {mde_relative}"
            )));
        }

        let required_n_per_variant = (n.ceil() as u64).max(1);
        debug!(
            baseline = p1,
            mde = mde_relative,
            n = required_n_per_variant,
            "sample size computed"
        );

        Ok(SampleSizeResult {
            required_n_per_variant,
        })
    }
}
