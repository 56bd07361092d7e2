//! Descriptive statistics, correlation, and ordinary least squares
//! over history slices.
//!
//! RULES:
//!   - Population statistics throughout (divisor = N, not N-1).
//!   - Degenerate inputs (constant series, single point) yield
//!     NaN/infinity and are propagated, never special-cased. The
//!     presentation layer renders those as "N/A".
//!   - Empty input is a caller bug; the controller guards it with
//!     SimError::NoCompletedQuarters before reaching this module.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

/// Descriptive summary of a series. Panics on an empty slice.
///
/// Median note: this always returns `sorted[n / 2]`. For even-length
/// input that is one of the two middle elements, not their average.
/// That matches the reported analytics this engine has always
/// produced; changing it would silently shift dashboards.
pub fn descriptive_stats(values: &[f64]) -> Summary {
    assert!(!values.is_empty(), "descriptive_stats over empty series");

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let median = sorted[sorted.len() / 2];

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    Summary {
        mean,
        std_dev: variance.sqrt(),
        median,
        min,
        max,
    }
}

/// Pearson correlation coefficient.
///
/// Uses n = min(x.len(), y.len()) and silently truncates the longer
/// series - callers are responsible for aligned, equal-length input.
/// Returns NaN when either series has zero variance.
pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    let nf = n as f64;
    let x_mean = x[..n].iter().sum::<f64>() / nf;
    let y_mean = y[..n].iter().sum::<f64>() / nf;

    let mut numerator = 0.0;
    let mut x_denom = 0.0;
    let mut y_denom = 0.0;
    for i in 0..n {
        let x_diff = x[i] - x_mean;
        let y_diff = y[i] - y_mean;
        numerator += x_diff * y_diff;
        x_denom += x_diff * x_diff;
        y_denom += y_diff * y_diff;
    }

    numerator / (x_denom * y_denom).sqrt()
}

/// An ordinary-least-squares fit. `predict` extrapolates the line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
}

impl Regression {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit y = slope * x + intercept by OLS.
///
/// Degenerate when all x values are equal (zero denominator): slope
/// comes out NaN/infinite and flows through predict() unchanged.
pub fn linear_regression(points: &[(f64, f64)]) -> Regression {
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|(x, _)| x).sum();
    let sum_y: f64 = points.iter().map(|(_, y)| y).sum();
    let sum_xy: f64 = points.iter().map(|(x, y)| x * y).sum();
    let sum_x2: f64 = points.iter().map(|(x, _)| x * x).sum();

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;

    Regression { slope, intercept }
}

/// 95% normal-approximation interval around a point forecast.
///
/// The spread is the population stddev of the historical series, not
/// the regression residuals - an approximation, not a rigorous
/// prediction interval, and documented as such.
pub fn prediction_interval(center: f64, historical_std_dev: f64) -> (f64, f64) {
    (
        center - 1.96 * historical_std_dev,
        center + 1.96 * historical_std_dev,
    )
}
