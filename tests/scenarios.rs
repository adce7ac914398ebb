//! End-to-end scenarios through the public boundary functions

use abtest_stats::{
    compute_sample_size, run_bayesian_test, run_frequentist_test, Decision, Error, TailMode,
    DEFAULT_SAMPLE_COUNT,
};
use approx::assert_abs_diff_eq;

#[test]
fn significant_lift_ships() {
    let result = run_frequentist_test(10_000, 500, 9_800, 560, TailMode::TwoTailed).unwrap();

    assert_abs_diff_eq!(result.cr_a, 0.0500, epsilon = 1e-4);
    assert_abs_diff_eq!(result.cr_b, 0.0571, epsilon = 1e-4);
    assert_abs_diff_eq!(result.lift_pct.unwrap(), 14.2857, epsilon = 1e-4);
    assert!(result.p_value < 0.05);
    assert!(result.ci.lower > 0.0);
    assert_eq!(result.decision, Decision::Ship);
}

#[test]
fn identical_variants_stop() {
    let result = run_frequentist_test(1_000, 50, 1_000, 50, TailMode::TwoTailed).unwrap();

    assert_eq!(result.p_value, 1.0);
    assert_eq!(result.z_score, 0.0);
    assert_eq!(result.decision, Decision::Stop);
}

#[test]
fn sample_size_reference_values() {
    let result = compute_sample_size(0.05, 0.10, 95, 80).unwrap();
    assert_eq!(result.required_n_per_variant, 31_235);
}

#[test]
fn sample_size_rejects_unlisted_levels() {
    assert!(compute_sample_size(0.05, 0.10, 97, 80).is_err());
    assert!(compute_sample_size(0.05, 0.10, 95, 85).is_err());
}

#[test]
fn invalid_counts_fail_before_any_computation() {
    let err = run_frequentist_test(100, 101, 100, 50, TailMode::TwoTailed).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    let err = run_bayesian_test(100, 101, 100, 50, DEFAULT_SAMPLE_COUNT, Some(1)).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    let err = run_frequentist_test(0, 0, 100, 50, TailMode::TwoTailed).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn bayesian_probability_favors_the_better_variant() {
    let result = run_bayesian_test(10_000, 500, 9_800, 560, DEFAULT_SAMPLE_COUNT, Some(42)).unwrap();

    assert!(result.prob_b_better > 0.95);
    assert!(result.prob_b_better <= 1.0);
    assert_eq!(result.sample_count, Some(DEFAULT_SAMPLE_COUNT));
}

#[test]
fn seeded_bayesian_runs_are_deterministic() {
    let first = run_bayesian_test(1_000, 50, 1_000, 61, 50_000, Some(9)).unwrap();
    let second = run_bayesian_test(1_000, 50, 1_000, 61, 50_000, Some(9)).unwrap();
    assert_eq!(first.prob_b_better, second.prob_b_better);
}

#[test]
fn one_tailed_mode_passes_through() {
    let two = run_frequentist_test(10_000, 500, 9_800, 560, TailMode::TwoTailed).unwrap();
    let one = run_frequentist_test(10_000, 500, 9_800, 560, TailMode::OneTailed).unwrap();
    assert_abs_diff_eq!(one.p_value, two.p_value / 2.0, epsilon = 1e-12);
}

#[test]
fn result_records_serialize_for_the_caller() {
    let result = run_frequentist_test(10_000, 500, 9_800, 560, TailMode::TwoTailed).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["decision"], "ship");
    assert!(json["ci"]["lower"].as_f64().unwrap() > 0.0);
    assert_abs_diff_eq!(json["p_value"].as_f64().unwrap(), result.p_value);
}
