// 📊 Small statistics helpers used by the scoring engines
// Callers guarantee non-empty input where a mean is taken.

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by n).
pub fn population_std(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Sample standard deviation (divides by n - 1). `None` with fewer than two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Period-over-period fractional changes: (x[i] - x[i-1]) / x[i-1].
///
/// 0/0 is undefined and skipped; a rise from zero is +inf.
pub fn pct_changes(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .map(|w| (w[1] - w[0]) / w[0])
        .filter(|c| !c.is_nan())
        .collect()
}

/// Largest absolute period-over-period change, if any is defined.
pub fn max_abs_pct_change(values: &[f64]) -> Option<f64> {
    pct_changes(values).into_iter().map(f64::abs).reduce(f64::max)
}

/// Mean period-over-period change, if any is defined.
pub fn mean_pct_change(values: &[f64]) -> Option<f64> {
    let changes = pct_changes(values);
    if changes.is_empty() {
        None
    } else {
        Some(mean(&changes))
    }
}

/// Ordinary least squares fit of `values` against their index 0..n-1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    /// Fit needs at least two points.
    pub fn fit(values: &[f64]) -> Option<Self> {
        let n = values.len();
        if n < 2 {
            return None;
        }

        let x_mean = (n - 1) as f64 / 2.0;
        let y_mean = mean(values);

        let (mut sxy, mut sxx) = (0.0, 0.0);
        for (i, y) in values.iter().enumerate() {
            let dx = i as f64 - x_mean;
            sxy += dx * (y - y_mean);
            sxx += dx * dx;
        }

        let slope = sxy / sxx;
        Some(LinearTrend {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Round to `decimals` places, exact ties to even.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}
