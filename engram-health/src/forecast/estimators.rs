//! The fixed set of ensemble members.
//!
//! Two cheap estimators with complementary failure modes: the trend line
//! captures monotone growth, the seasonal-naive member captures repeating
//! shape. Both are fully deterministic.

/// Least-squares line over a series indexed `0..n`.
#[derive(Debug, Clone, Copy)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn fit(series: &[f64]) -> Self {
        let n = series.len() as f64;
        let mean_x = (n - 1.0) / 2.0;
        let mean_y = series.iter().sum::<f64>() / n;
        let mut covariance = 0.0;
        let mut variance = 0.0;
        for (i, y) in series.iter().enumerate() {
            let dx = i as f64 - mean_x;
            covariance += dx * (y - mean_y);
            variance += dx * dx;
        }
        // A single point has zero index variance; fall back to a flat line.
        let slope = if variance == 0.0 {
            0.0
        } else {
            covariance / variance
        };
        Self {
            slope,
            intercept: mean_y - slope * mean_x,
        }
    }

    pub fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Trend member: extrapolates the least-squares line past the end of the
/// series.
pub struct TrendEstimator;

impl TrendEstimator {
    pub fn project(series: &[f64], horizon: usize) -> Vec<f64> {
        let fit = LinearFit::fit(series);
        let n = series.len();
        (0..horizon).map(|i| fit.at((n + i) as f64)).collect()
    }
}

/// Seasonal-naive member: repeats the trailing season verbatim.
pub struct SeasonalNaiveEstimator;

impl SeasonalNaiveEstimator {
    /// Season length: half the available history, capped at 12 steps.
    pub fn season_length(history_len: usize) -> usize {
        (history_len / 2).clamp(1, 12)
    }

    pub fn project(series: &[f64], horizon: usize) -> Vec<f64> {
        let season = Self::season_length(series.len());
        let tail = &series[series.len() - season..];
        (0..horizon).map(|i| tail[i % season]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_fit_recovers_exact_line() {
        let series: Vec<f64> = (0..10).map(|i| 3.0 + 2.0 * i as f64).collect();
        let fit = LinearFit::fit(&series);
        assert!((fit.slope - 2.0).abs() < 1e-9);
        assert!((fit.intercept - 3.0).abs() < 1e-9);
    }

    #[test]
    fn trend_extrapolates_past_the_end() {
        let series: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let projected = TrendEstimator::project(&series, 3);
        assert!((projected[0] - 10.0).abs() < 1e-9);
        assert!((projected[2] - 12.0).abs() < 1e-9);
    }

    #[test]
    fn seasonal_naive_repeats_the_tail() {
        // 12 points, season length 6: the last 6 values cycle.
        let series: Vec<f64> = (0..12).map(|i| (i % 4) as f64).collect();
        let projected = SeasonalNaiveEstimator::project(&series, 8);
        let tail = &series[6..];
        for (i, value) in projected.iter().enumerate() {
            assert_eq!(*value, tail[i % 6]);
        }
    }

    #[test]
    fn season_length_bounds() {
        assert_eq!(SeasonalNaiveEstimator::season_length(1), 1);
        assert_eq!(SeasonalNaiveEstimator::season_length(10), 5);
        assert_eq!(SeasonalNaiveEstimator::season_length(100), 12);
    }
}
