//! Posterior comparison between two variants
//!
//! Estimates P(theta_B > theta_A) for the two independent Beta posteriors,
//! either by Monte Carlo simulation (the default, drawing 100,000 samples
//! per variant) or by the closed-form sum available when the shape
//! parameters are integers.

use crate::BetaPosterior;
use abtest_core::{Error, Result, VariantObservation};
use rand::prelude::*;
use rand_distr::Beta as BetaSampler;
use serde::Serialize;
use statrs::function::gamma::ln_gamma;
use tracing::debug;

/// Default number of posterior draws per variant
pub const DEFAULT_SAMPLE_COUNT: usize = 100_000;

/// Readout of a Bayesian posterior comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BayesianResult {
    /// Probability that the treatment's true rate beats the control's, in [0, 1]
    pub prob_b_better: f64,
    /// Draws per variant behind a Monte Carlo estimate; `None` when the
    /// probability was computed exactly
    pub sample_count: Option<usize>,
}

/// Beta-Binomial posterior comparison estimator
///
/// Models each variant's true conversion rate as a Beta posterior under a
/// uniform prior and reports the probability that the treatment's rate is
/// the higher one. No decision label is attached; the probability is
/// surfaced raw.
#[derive(Debug, Clone, Copy)]
pub struct BayesianTest {
    sample_count: usize,
    seed: Option<u64>,
}

impl BayesianTest {
    /// Create an estimator with the default sample count and a fresh seed
    pub fn new() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            seed: None,
        }
    }

    /// Set the number of posterior draws per variant
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Monte Carlo estimate of P(theta_B > theta_A)
    pub fn evaluate(
        &self,
        control: &VariantObservation,
        treatment: &VariantObservation,
    ) -> Result<BayesianResult> {
        if self.sample_count == 0 {
            return Err(Error::InvalidInput(
                "sample count must be at least 1".to_string(),
            ));
        }

        let posterior_a = BetaPosterior::from_observation(control);
        let posterior_b = BetaPosterior::from_observation(treatment);

        // Shape parameters are conversions+1 / failures+1, always positive.
        let sampler_a = BetaSampler::new(posterior_a.alpha(), posterior_a.beta())
            .expect("posterior shape parameters are positive");
        let sampler_b = BetaSampler::new(posterior_b.alpha(), posterior_b.beta())
            .expect("posterior shape parameters are positive");

        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);

        let mut wins = 0usize;
        for _ in 0..self.sample_count {
            let sample_a: f64 = sampler_a.sample(&mut rng);
            let sample_b: f64 = sampler_b.sample(&mut rng);
            if sample_b > sample_a {
                wins += 1;
            }
        }

        let prob_b_better = wins as f64 / self.sample_count as f64;
        debug!(
            seed,
            samples = self.sample_count,
            prob_b_better,
            "posterior comparison sampled"
        );

        Ok(BayesianResult {
            prob_b_better,
            sample_count: Some(self.sample_count),
        })
    }

    /// Exact P(theta_B > theta_A), replacing simulation with the closed-form
    /// sum over the treatment posterior's integer alpha
    pub fn evaluate_exact(
        &self,
        control: &VariantObservation,
        treatment: &VariantObservation,
    ) -> Result<BayesianResult> {
        let posterior_a = BetaPosterior::from_observation(control);
        let posterior_b = BetaPosterior::from_observation(treatment);

        Ok(BayesianResult {
            prob_b_better: prob_treatment_beats_control(&posterior_a, &posterior_b),
            sample_count: None,
        })
    }
}

impl Default for BayesianTest {
    fn default() -> Self {
        Self::new()
    }
}

fn log_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// Closed-form P(theta_B > theta_A) for independent Beta variables whose
/// shape parameters are integers:
///
/// sum_{i=0}^{alpha_B - 1} B(alpha_A + i, beta_A + beta_B)
///     / ((beta_B + i) * B(1 + i, beta_B) * B(alpha_A, beta_A))
///
/// evaluated in log space to keep large counts finite.
fn prob_treatment_beats_control(control: &BetaPosterior, treatment: &BetaPosterior) -> f64 {
    let alpha_b = treatment.alpha() as u64;

    let mut total = 0.0;
    for i in 0..alpha_b {
        let i = i as f64;
        let log_term = log_beta(control.alpha() + i, control.beta() + treatment.beta())
            - (treatment.beta() + i).ln()
            - log_beta(1.0 + i, treatment.beta())
            - log_beta(control.alpha(), control.beta());
        total += log_term.exp();
    }
    total
}
