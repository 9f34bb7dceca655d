//! Ensemble forecasting with uncertainty bands.
//!
//! The point estimate averages the trend and seasonal-naive members; the
//! band half-width combines member disagreement with the residual spread of
//! the trend fit over recent history. No randomness anywhere: identical
//! input series produce bit-identical forecasts.

mod estimators;

pub use estimators::{LinearFit, SeasonalNaiveEstimator, TrendEstimator};

use engram_core::errors::{EngramResult, HealthError};
use engram_core::models::Forecast;

pub struct Forecaster {
    min_history: usize,
}

impl Forecaster {
    /// `min_history` is floored at 2: the estimators and the residual
    /// holdout are undefined on shorter series, whatever the config says.
    pub fn new(min_history: usize) -> Self {
        Self {
            min_history: min_history.max(2),
        }
    }

    /// Forecast `horizon_steps` ahead for one metric series.
    ///
    /// Returns [`HealthError::InsufficientHistory`] below `min_history`
    /// points; callers treat that as a quiet skip, not a failure.
    pub fn forecast(
        &self,
        metric_name: &str,
        series: &[f64],
        horizon_steps: usize,
    ) -> EngramResult<Forecast> {
        if series.len() < self.min_history {
            return Err(HealthError::InsufficientHistory {
                needed: self.min_history,
                available: series.len(),
            }
            .into());
        }

        let trend = TrendEstimator::project(series, horizon_steps);
        let seasonal = SeasonalNaiveEstimator::project(series, horizon_steps);
        let residual_std = holdout_residual_std(series);

        let mut point_estimates = Vec::with_capacity(horizon_steps);
        let mut lower_bound = Vec::with_capacity(horizon_steps);
        let mut upper_bound = Vec::with_capacity(horizon_steps);
        for i in 0..horizon_steps {
            let point = (trend[i] + seasonal[i]) / 2.0;
            let half_width = (trend[i] - seasonal[i]).abs() / 2.0 + residual_std;
            point_estimates.push(point);
            lower_bound.push(point - half_width);
            upper_bound.push(point + half_width);
        }

        Ok(Forecast {
            metric_name: metric_name.to_string(),
            horizon_steps,
            point_estimates,
            lower_bound,
            upper_bound,
        })
    }
}

/// Root-mean-square residual of the trend fit over the trailing quarter of
/// the series (at least two points). A proxy for how noisy the metric has
/// been lately, widening the band accordingly.
fn holdout_residual_std(series: &[f64]) -> f64 {
    let fit = LinearFit::fit(series);
    let holdout = (series.len() / 4).max(2);
    let start = series.len() - holdout;
    let mean_square = series[start..]
        .iter()
        .enumerate()
        .map(|(j, y)| {
            let residual = y - fit.at((start + j) as f64);
            residual * residual
        })
        .sum::<f64>()
        / holdout as f64;
    mean_square.sqrt()
}
