//! Core types and error taxonomy for A/B experiment statistics
//!
//! This crate holds the value objects and the error type shared by the
//! calculator crates. Every entity here is ephemeral: created per calculation
//! request, never mutated, discarded once the caller has consumed the result.
//!
//! # Examples
//!
//! ```rust
//! use abtest_core::VariantObservation;
//!
//! let control = VariantObservation::new(10_000, 500).unwrap();
//! assert_eq!(control.conversion_rate(), 0.05);
//!
//! // Constraint violations surface as typed errors, never as NaN.
//! assert!(VariantObservation::new(100, 101).is_err());
//! ```

mod error;
mod types;

pub use error::{Error, Result};
pub use types::{ConfidenceInterval, TailMode, VariantObservation};
