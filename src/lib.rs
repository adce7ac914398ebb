//! Statistical engine for two-variant (A/B) online experiments
//!
//! Three independent, stateless calculators, each a pure function of its
//! inputs:
//!
//! - **Frequentist test**: two-proportion Z-test returning the p-value, a
//!   95% confidence interval on the absolute lift, and a ternary
//!   ship/iterate/stop decision ([`abtest_frequentist`]).
//! - **Bayesian test**: Beta-Binomial posterior comparison returning the
//!   probability that the treatment's true rate beats the control's
//!   ([`abtest_bayesian`]).
//! - **Sample-size calculator**: closed-form required-N from the baseline
//!   rate, minimum detectable effect, confidence, and power
//!   ([`abtest_power`]).
//!
//! The calculators share no state and never perform I/O; a presentation
//! layer marshals raw counts or scalars through the boundary functions below
//! and renders the returned records. Constraint violations and degenerate
//! statistics surface as typed [`Error`] values, never as NaN in a result.
//!
//! # Examples
//!
//! ```rust
//! use abtest_stats::{run_frequentist_test, Decision, TailMode};
//!
//! let result = run_frequentist_test(10_000, 500, 9_800, 560, TailMode::TwoTailed).unwrap();
//! assert!(result.p_value < 0.05);
//! assert_eq!(result.decision, Decision::Ship);
//! ```
//!
//! ```rust
//! use abtest_stats::compute_sample_size;
//!
//! let result = compute_sample_size(0.05, 0.10, 95, 80).unwrap();
//! assert_eq!(result.required_n_per_variant, 31_235);
//! ```

// Re-export workspace crates
pub use abtest_core::{ConfidenceInterval, Error, Result, TailMode, VariantObservation};
pub use abtest_frequentist::{Decision, FrequentistResult, TwoProportionZTest};
pub use abtest_bayesian::{BayesianResult, BayesianTest, BetaPosterior, DEFAULT_SAMPLE_COUNT};
pub use abtest_power::{ConfidenceLevel, PowerLevel, SampleSizeCalculator, SampleSizeResult};

/// Run the two-proportion Z-test on raw per-variant counts
///
/// Validates both observations, then evaluates the test in the requested
/// tail mode. The confidence interval on the lift is always the fixed
/// two-sided 95% interval.
pub fn run_frequentist_test(
    visitors_a: u64,
    conversions_a: u64,
    visitors_b: u64,
    conversions_b: u64,
    tail_mode: TailMode,
) -> Result<FrequentistResult> {
    let control = VariantObservation::new(visitors_a, conversions_a)?;
    let treatment = VariantObservation::new(visitors_b, conversions_b)?;
    TwoProportionZTest::new()
        .with_tail_mode(tail_mode)
        .evaluate(&control, &treatment)
}

/// Run the Bayesian posterior comparison on raw per-variant counts
///
/// Draws `sample_count` posterior samples per variant
/// ([`DEFAULT_SAMPLE_COUNT`] is the usual choice). Pass a seed to make the
/// estimate reproducible; `None` seeds from entropy.
pub fn run_bayesian_test(
    visitors_a: u64,
    conversions_a: u64,
    visitors_b: u64,
    conversions_b: u64,
    sample_count: usize,
    seed: Option<u64>,
) -> Result<BayesianResult> {
    let control = VariantObservation::new(visitors_a, conversions_a)?;
    let treatment = VariantObservation::new(visitors_b, conversions_b)?;

    let mut test = BayesianTest::new().with_sample_count(sample_count);
    if let Some(seed) = seed {
        test = test.with_seed(seed);
    }
    test.evaluate(&control, &treatment)
}

/// Compute the required users per variant from validated scalar inputs
///
/// Confidence is restricted to 90, 95, or 99 percent and power to 80 or 90
/// percent; anything else is rejected before any arithmetic runs.
pub fn compute_sample_size(
    baseline_rate: f64,
    mde_relative: f64,
    confidence_pct: u32,
    power_pct: u32,
) -> Result<SampleSizeResult> {
    let confidence = ConfidenceLevel::from_percent(confidence_pct)?;
    let power = PowerLevel::from_percent(power_pct)?;
    SampleSizeCalculator::new(confidence, power).required_sample_size(baseline_rate, mde_relative)
}
