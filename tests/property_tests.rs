//! Property-based tests for ab-convergence
//!
//! - Series shape invariants hold for any valid configuration
//! - Estimates stay in [0, 1] and are undefined exactly when no trials ran
//! - Run with ProptestConfig::with_cases(64)

use ab_convergence::config::{ExperimentConfig, MAX_ITERATION_COUNT, MAX_SAMPLE_SIZE};
use ab_convergence::estimator::ConversionEstimator;
use ab_convergence::runner::{PacedRunner, Pacing, RunState};
use ab_convergence::sink::CollectingSink;
use ab_convergence::trial::Arm;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Valid configuration with small counts so each case stays fast
fn arb_config() -> impl Strategy<Value = ExperimentConfig> {
    (0.0f64..=1.0, 0.0f64..=1.0, 0u32..40, 0u32..30, any::<u64>()).prop_map(
        |(rate_a, rate_b, sample_size, iterations, seed)| {
            ExperimentConfig::builder()
                .true_rate_a(rate_a)
                .true_rate_b(rate_b)
                .sample_size(sample_size)
                .iteration_count(iterations)
                .auto_run(true)
                .seed(seed)
                .build()
                .unwrap()
        },
    )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: a completed run has exactly `iteration_count` ordered entries
    #[test]
    fn prop_series_length_and_order(config in arb_config()) {
        let mut sink = CollectingSink::new();
        let report = PacedRunner::from_config(config.clone(), &mut sink)
            .unwrap()
            .with_pacing(Pacing::Disabled)
            .run()
            .unwrap();

        prop_assert_eq!(report.state(), RunState::Completed);
        prop_assert_eq!(report.series().len(), config.iteration_count() as usize);
        prop_assert_eq!(sink.emission_count(), config.iteration_count() as usize);
        for (expected, point) in report.series().iter().enumerate() {
            prop_assert_eq!(point.index(), expected);
        }
    }

    /// Property: rates are undefined iff sample size is zero, else in [0, 1]
    #[test]
    fn prop_rates_defined_iff_samples(config in arb_config()) {
        let report = PacedRunner::from_config(config.clone(), CollectingSink::new())
            .unwrap()
            .with_pacing(Pacing::Disabled)
            .run()
            .unwrap();

        for point in report.series().iter() {
            for arm in Arm::ALL {
                match point.empirical_rate(arm) {
                    None => prop_assert_eq!(config.sample_size(), 0),
                    Some(rate) => {
                        prop_assert!(config.sample_size() > 0);
                        prop_assert!((0.0..=1.0).contains(&rate));
                    }
                }
            }
        }
    }

    /// Property: estimate equals conversions / trials
    #[test]
    fn prop_estimate_is_mean(outcomes in proptest::collection::vec(any::<bool>(), 1..200)) {
        let rate = ConversionEstimator::estimate(&outcomes).unwrap();
        let conversions = outcomes.iter().filter(|&&c| c).count();
        prop_assert!((rate - conversions as f64 / outcomes.len() as f64).abs() < 1e-12);
    }

    /// Property: out-of-range rates are always rejected
    #[test]
    fn prop_out_of_range_rate_rejected(excess in 1e-9f64..10.0) {
        let above = ExperimentConfig::builder().true_rate_a(1.0 + excess).build();
        let below = ExperimentConfig::builder().true_rate_b(-excess).build();
        prop_assert!(above.unwrap_err().is_invalid_configuration());
        prop_assert!(below.unwrap_err().is_invalid_configuration());
    }

    /// Property: counts above their bounds are always rejected
    #[test]
    fn prop_counts_above_bounds_rejected(extra in 1u32..10_000) {
        let samples = ExperimentConfig::builder().sample_size(MAX_SAMPLE_SIZE + extra).build();
        let iterations = ExperimentConfig::builder()
            .iteration_count(MAX_ITERATION_COUNT + extra)
            .build();
        prop_assert!(samples.is_err());
        prop_assert!(iterations.is_err());
    }
}
