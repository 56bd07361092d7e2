//! Statistics module tests: descriptive summaries, Pearson
//! correlation, OLS regression, and the documented degenerate cases.

use techflow_core::stats::{
    correlation, descriptive_stats, linear_regression, prediction_interval,
};

#[test]
fn single_element_summary() {
    let s = descriptive_stats(&[42.5]);
    assert_eq!(s.mean, 42.5);
    assert_eq!(s.std_dev, 0.0);
    assert_eq!(s.median, 42.5);
    assert_eq!(s.min, 42.5);
    assert_eq!(s.max, 42.5);
}

#[test]
fn population_std_dev() {
    // Variance of [2, 4, 4, 4, 5, 5, 7, 9] with divisor N is 4.
    let s = descriptive_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    assert!((s.mean - 5.0).abs() < 1e-12);
    assert!((s.std_dev - 2.0).abs() < 1e-12);
}

/// Even-length median takes `sorted[n / 2]`, the upper of the two
/// middle elements - preserved behavior, not the textbook average.
#[test]
fn even_length_median_is_upper_of_the_two_middles() {
    // sorted = [1, 2, 3, 4]; index 4/2 = 2 -> 3.0
    let s = descriptive_stats(&[4.0, 1.0, 3.0, 2.0]);
    assert_eq!(s.median, 3.0);

    // sorted = [1, 2, 3, 4, 5]; index 2 -> 3.0 (true median for odd N)
    let s = descriptive_stats(&[5.0, 3.0, 1.0, 4.0, 2.0]);
    assert_eq!(s.median, 3.0);
}

#[test]
fn correlation_of_series_with_itself_is_one() {
    let x = [1.0, 3.0, 2.0, 8.0, 5.0];
    assert!((correlation(&x, &x) - 1.0).abs() < 1e-12);
}

#[test]
fn perfect_negative_correlation() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [8.0, 6.0, 4.0, 2.0];
    assert!((correlation(&x, &y) + 1.0).abs() < 1e-12);
}

/// Zero variance in either series yields NaN. Propagated, not
/// special-cased - the presentation layer shows "N/A".
#[test]
fn constant_series_correlation_is_nan() {
    let constant = [5.0, 5.0, 5.0];
    let varying = [1.0, 2.0, 3.0];
    assert!(correlation(&constant, &varying).is_nan());
    assert!(correlation(&varying, &constant).is_nan());
}

/// Mismatched lengths truncate to the shorter series silently.
#[test]
fn correlation_truncates_longer_series() {
    let x = [1.0, 2.0, 3.0];
    let y = [2.0, 4.0, 6.0, 1000.0, -1000.0];
    assert!((correlation(&x, &y) - 1.0).abs() < 1e-12);
}

#[test]
fn exact_fit_regression() {
    let fit = linear_regression(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
    assert!((fit.slope - 2.0).abs() < 1e-12);
    assert!(fit.intercept.abs() < 1e-12);
    assert!((fit.predict(4.0) - 8.0).abs() < 1e-12);
}

#[test]
fn regression_with_intercept() {
    // y = 3x + 10
    let points: Vec<(f64, f64)> = (1..=5).map(|x| (x as f64, 3.0 * x as f64 + 10.0)).collect();
    let fit = linear_regression(&points);
    assert!((fit.slope - 3.0).abs() < 1e-9);
    assert!((fit.intercept - 10.0).abs() < 1e-9);
}

/// All-equal x values make the OLS denominator zero. The NaN slope
/// flows through predict() unchanged.
#[test]
fn degenerate_regression_is_nan() {
    let fit = linear_regression(&[(2.0, 1.0), (2.0, 5.0), (2.0, 9.0)]);
    assert!(fit.slope.is_nan());
    assert!(fit.predict(3.0).is_nan());
}

#[test]
fn prediction_interval_width() {
    let (lower, upper) = prediction_interval(100.0, 10.0);
    assert!((lower - 80.4).abs() < 1e-9);
    assert!((upper - 119.6).abs() < 1e-9);

    // Zero spread collapses the interval to the point.
    let (lower, upper) = prediction_interval(7.0, 0.0);
    assert_eq!(lower, 7.0);
    assert_eq!(upper, 7.0);
}

#[test]
#[should_panic(expected = "empty series")]
fn empty_series_is_a_caller_bug() {
    descriptive_stats(&[]);
}
