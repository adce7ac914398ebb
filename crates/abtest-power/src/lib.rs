//! Power analysis for two-variant experiments
//!
//! Before an experiment runs, the one question that matters is how much
//! traffic it needs. This crate inverts the two-proportion power formula:
//! given a baseline conversion rate, the smallest relative lift worth
//! detecting, and the target confidence and power, it returns the required
//! number of users per variant.
//!
//! # Examples
//!
//! ```rust
//! use abtest_power::{ConfidenceLevel, PowerLevel, SampleSizeCalculator};
//!
//! let calculator = SampleSizeCalculator::new(ConfidenceLevel::NinetyFive, PowerLevel::Eighty);
//! let result = calculator.required_sample_size(0.05, 0.10).unwrap();
//! assert_eq!(result.required_n_per_variant, 31_235);
//! ```

mod sample_size;

pub use sample_size::{ConfidenceLevel, PowerLevel, SampleSizeCalculator, SampleSizeResult};
