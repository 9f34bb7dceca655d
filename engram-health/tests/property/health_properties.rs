//! Property tests for the health primitives: anomaly scores are
//! non-negative and respect the quiet floor, forecast bounds always bracket
//! the point estimate, and forecasting is deterministic.

use chrono::Utc;
use proptest::prelude::*;

use engram_core::config::HealthConfig;
use engram_health::{AnomalyDetector, Forecaster};

fn series(len: impl Into<proptest::collection::SizeRange>) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-1_000.0f64..1_000.0, len)
}

proptest! {
    #[test]
    fn anomaly_scores_are_nonnegative(
        baseline in series(0..80),
        value in -1_000.0f64..1_000.0,
    ) {
        let detector = AnomalyDetector::new("total_records", &HealthConfig::default());
        let score = detector.score(&baseline, Utc::now(), value);

        prop_assert!(score.score >= 0.0);
        prop_assert!(score.score.is_finite());
        if baseline.len() < HealthConfig::default().min_baseline {
            prop_assert_eq!(score.score, 0.0);
            prop_assert!(!score.is_flagged);
        }
    }

    #[test]
    fn baseline_median_never_flags_itself(baseline in series(5..50)) {
        let detector = AnomalyDetector::new("total_records", &HealthConfig::default());
        let mut sorted = baseline.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        let score = detector.score(&baseline, Utc::now(), median);
        prop_assert_eq!(score.score, 0.0);
        prop_assert!(!score.is_flagged);
    }

    #[test]
    fn forecast_bounds_bracket_the_point(
        history in series(10..60),
        horizon in 1usize..20,
    ) {
        let forecaster = Forecaster::new(10);
        let forecast = forecaster.forecast("total_records", &history, horizon).unwrap();

        prop_assert_eq!(forecast.point_estimates.len(), horizon);
        for i in 0..horizon {
            prop_assert!(forecast.lower_bound[i] <= forecast.point_estimates[i]);
            prop_assert!(forecast.point_estimates[i] <= forecast.upper_bound[i]);
        }
    }

    #[test]
    fn forecasting_is_bit_deterministic(history in series(10..60)) {
        let forecaster = Forecaster::new(10);
        let first = forecaster.forecast("total_records", &history, 12).unwrap();
        let second = forecaster.forecast("total_records", &history, 12).unwrap();

        for i in 0..12 {
            prop_assert_eq!(
                first.point_estimates[i].to_bits(),
                second.point_estimates[i].to_bits()
            );
        }
    }
}
