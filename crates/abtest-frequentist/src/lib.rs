//! Frequentist significance testing for conversion-rate experiments
//!
//! This crate provides the two-proportion Z-test: the classical hypothesis
//! test for comparing a treatment conversion rate against a control. The
//! readout bundles the test statistic, p-value, a 95% interval on the
//! absolute lift, and a ternary ship/iterate/stop decision.
//!
//! # Examples
//!
//! ```rust
//! use abtest_core::VariantObservation;
//! use abtest_frequentist::{Decision, TwoProportionZTest};
//!
//! let control = VariantObservation::new(10_000, 500).unwrap();
//! let treatment = VariantObservation::new(9_800, 560).unwrap();
//!
//! let result = TwoProportionZTest::new().evaluate(&control, &treatment).unwrap();
//! assert!(result.p_value < 0.05);
//! assert_eq!(result.decision, Decision::Ship);
//! ```


pub use z_test::{Decision, FrequentistResult, TwoProportionZTest};

// Convenience constructor
pub fn z_test() -> TwoProportionZTest {
    TwoProportionZTest::new()
}
