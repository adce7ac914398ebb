//! Bayesian posterior comparison for conversion-rate experiments
//!
//! Each variant's true conversion rate is modeled as a Beta posterior under
//! a uniform Beta(1, 1) prior. The single output is the probability that the
//! treatment's true rate beats the control's, estimated by Monte Carlo
//! simulation or computed exactly from the closed-form sum for integer
//! shape parameters.
//!
//! # Examples
//!
//! ```rust
//! use abtest_bayesian::BayesianTest;
//! use abtest_core::VariantObservation;
//!
//! let control = VariantObservation::new(1_000, 50).unwrap();
//! let treatment = VariantObservation::new(1_000, 60).unwrap();
//!
//! let result = BayesianTest::new()
//!     .with_seed(42)
//!     .evaluate(&control, &treatment)
//!     .unwrap();
//! assert!(result.prob_b_better > 0.5);
//! ```

mod comparison;
mod posterior;

pub use comparison::{BayesianResult, BayesianTest, DEFAULT_SAMPLE_COUNT};
pub use posterior::BetaPosterior;

// Convenience constructor
pub fn bayesian_test() -> BayesianTest {
    BayesianTest::new()
}
