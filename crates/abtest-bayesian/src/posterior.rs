//! Beta posterior over a variant's true conversion rate

use abtest_core::VariantObservation;
use serde::Serialize;

/// Beta posterior under a uniform Beta(1, 1) prior
///
/// For an observed variant, alpha counts conversions plus one and beta
/// counts non-conversions plus one, so both parameters are always integer
/// valued and at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BetaPosterior {
    alpha: f64,
    beta: f64,
}

impl BetaPosterior {
    /// Posterior for one observed variant
    pub fn from_observation(obs: &VariantObservation) -> Self {
        Self {
            alpha: obs.conversions() as f64 + 1.0,
            beta: obs.failures() as f64 + 1.0,
        }
    }

    /// Shape parameter alpha (conversions + 1)
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Shape parameter beta (failures + 1)
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Posterior mean of the conversion rate
    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }
}
