//! Stateless quantitative formulas.
//!
//! None of these functions guard against degenerate input. A zero denominator,
//! a non-positive base or an empty slice yields NaN or an infinity, and that
//! value is handed back to the caller unchanged.

/// Slope and intercept of an ordinary least squares fit against the index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    /// Value of the fitted line at index `x`.
    pub fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Compound annual growth rate: `(final / initial)^(1 / years) - 1`.
///
/// Defined for `initial > 0` and `years > 0`. A zero `initial` gives an
/// infinity and a negative one gives NaN.
pub fn cagr(initial: f64, final_value: f64, years: f64) -> f64 {
    (final_value / initial).powf(1.0 / years) - 1.0
}

/// `Σ(vᵢ·wᵢ) / Σwᵢ`.
///
/// Slices of different lengths give NaN. Weights summing to zero give NaN or
/// an infinity.
pub fn weighted_moving_average(values: &[f64], weights: &[f64]) -> f64 {
    if values.len() != weights.len() {
        return f64::NAN;
    }
    let (weighted_sum, weight_sum) = values
        .iter()
        .zip(weights)
        .fold((0.0, 0.0), |(sum, total), (v, w)| (sum + v * w, total + w));
    weighted_sum / weight_sum
}

/// Population standard deviation, `sqrt(Σ(x - μ)² / n)`.
pub fn standard_deviation(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Least squares fit of `values[i]` against `i` for `i` in `0..n`.
///
/// Needs at least two points; with fewer the denominator is zero and both
/// coefficients come back as NaN.
pub fn linear_trend(values: &[f64]) -> LinearTrend {
    let n = values.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_x2) = values.iter().enumerate().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sx2), (i, &y)| {
            let x = i as f64;
            (sx + x, sy + y, sxy + x * y, sx2 + x * x)
        },
    );

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;

    LinearTrend { slope, intercept }
}

/// Weighted average of normalised indicators scaled to 0-100.
pub fn composite_index(indicators: &[f64], weights: &[f64]) -> f64 {
    weighted_moving_average(indicators, weights) * 100.0
}

/// Continuous growth: `current · e^(rate · years)`.
pub fn exponential_projection(current: f64, rate: f64, years: f64) -> f64 {
    current * (rate * years).exp()
}

/// Discrete compounding: `current · (1 + rate)^periods`.
pub fn compound_projection(current: f64, rate: f64, periods: f64) -> f64 {
    current * (1.0 + rate).powf(periods)
}

/// Straight-line extrapolation: `current + slope · periods`.
pub fn linear_projection(current: f64, slope: f64, periods: f64) -> f64 {
    current + slope * periods
}

/// `(strengths + opportunities) / (weaknesses + threats)`.
pub fn competitiveness_ratio(
    strengths: f64,
    opportunities: f64,
    weaknesses: f64,
    threats: f64,
) -> f64 {
    (strengths + opportunities) / (weaknesses + threats)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn cagr_round_trips_to_final_value() {
        let cases = [
            (100.0, 146.41, 4.0),
            (15.2, 22.3, 4.0),
            (0.45, 0.58, 4.0),
            (250.0, 80.0, 3.0),
            (1.0, 1.0, 7.0),
            (3.5, 9000.0, 0.5),
        ];
        for (initial, final_value, years) in cases {
            let rate = cagr(initial, final_value, years);
            assert_close(initial * (1.0 + rate).powf(years), final_value);
        }
    }

    #[test]
    fn cagr_of_ten_percent_growth() {
        let rate = cagr(100.0, 146.41, 4.0);
        assert!((rate - 0.10).abs() < 1e-12);
    }

    #[test]
    fn cagr_with_non_positive_initial_is_not_finite() {
        assert!(!cagr(0.0, 10.0, 4.0).is_finite());
        assert!(cagr(-5.0, 10.0, 4.0).is_nan());
        assert!(!cagr(5.0, 10.0, 0.0).is_finite());
    }

    #[test]
    fn linear_trend_recovers_exact_line() {
        let (a, d) = (3.25, -0.75);
        let values: Vec<f64> = (0..6).map(|i| a + d * i as f64).collect();
        let trend = linear_trend(&values);
        assert_close(trend.slope, d);
        assert_close(trend.intercept, a);
        assert_close(trend.at(6.0), a + 6.0 * d);
    }

    #[test]
    fn linear_trend_needs_two_points() {
        let single = linear_trend(&[4.0]);
        assert!(single.slope.is_nan());
        assert!(linear_trend(&[]).intercept.is_nan());
    }

    #[test]
    fn standard_deviation_of_constant_series_is_zero() {
        assert_eq!(standard_deviation(&[7.5, 7.5, 7.5, 7.5]), 0.0);
        assert_eq!(standard_deviation(&[42.0]), 0.0);
    }

    #[test]
    fn standard_deviation_is_population_sigma() {
        // mean 5, squared deviations sum to 32, n = 8
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_close(standard_deviation(&values), 2.0);
        assert!(standard_deviation(&[]).is_nan());
    }

    #[test]
    fn weighted_moving_average_and_composite_index() {
        let values = [0.2, 0.4, 0.9];
        let weights = [1.0, 1.0, 2.0];
        assert_close(weighted_moving_average(&values, &weights), 0.6);
        assert_close(composite_index(&values, &weights), 60.0);
        assert!(weighted_moving_average(&values, &[0.0, 0.0, 0.0]).is_nan());
    }

    #[test]
    fn mismatched_weight_lengths_are_not_finite() {
        assert!(weighted_moving_average(&[1.0, 3.0, 100.0], &[1.0, 1.0]).is_nan());
        assert!(weighted_moving_average(&[1.0, 3.0], &[1.0, 1.0, 2.0]).is_nan());
        assert!(composite_index(&[0.5], &[1.0, 1.0]).is_nan());
        assert!(weighted_moving_average(&[], &[]).is_nan());
    }

    #[test]
    fn projections() {
        assert_close(exponential_projection(10.0, 0.0, 5.0), 10.0);
        assert_close(exponential_projection(10.0, 0.1, 1.0), 10.0 * 0.1f64.exp());
        assert_close(exponential_projection(10.0, -0.1, 2.0), 10.0 * (-0.2f64).exp());
        assert_close(compound_projection(100.0, 0.1, 2.0), 121.0);
        assert_close(linear_projection(15.8, -0.6, 5.0), 12.8);
    }

    #[test]
    fn competitiveness_ratio_is_monotonic() {
        let base = competitiveness_ratio(2.0, 3.0, 1.5, 2.5);
        assert_close(base, 1.25);
        assert!(competitiveness_ratio(2.5, 3.0, 1.5, 2.5) > base);
        assert!(competitiveness_ratio(2.0, 3.5, 1.5, 2.5) > base);
        assert!(competitiveness_ratio(2.0, 3.0, 2.0, 2.5) < base);
        assert!(competitiveness_ratio(2.0, 3.0, 1.5, 3.0) < base);
    }

    #[test]
    fn competitiveness_ratio_with_zero_denominator() {
        assert_eq!(competitiveness_ratio(1.0, 1.0, 0.0, 0.0), f64::INFINITY);
        assert!(competitiveness_ratio(0.0, 0.0, 0.0, 0.0).is_nan());
    }
}
