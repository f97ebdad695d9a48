//! Descriptive statistics helpers
//!
//! Population statistics over small per-phase vectors. Every helper returns a
//! defined value for degenerate input instead of NaN.

/// Arithmetic mean (0 for an empty slice)
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by n)
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mu = mean(values);
    values.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Coefficient of variation, treated as 0 when the mean is not positive
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let mu = mean(values);
    if mu > 0.0 {
        std_dev(values) / mu
    } else {
        0.0
    }
}

/// `1 - CV`: 1 means identical values across phases
pub fn consistency(values: &[f64]) -> f64 {
    1.0 - coefficient_of_variation(values)
}

/// Pearson correlation coefficient
///
/// Returns `None` when the vectors differ in length, hold fewer than two
/// values, or either has zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }

    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Mean-rank percentile of `value` within `values` (0-100)
///
/// Formula: `(count(< value) + count(<= value)) / 2 / n * 100`
pub fn percentile_rank(values: &[f64], value: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let below = values.iter().filter(|v| **v < value).count() as f64;
    let at_or_below = values.iter().filter(|v| **v <= value).count() as f64;
    (below + at_or_below) / 2.0 / values.len() as f64 * 100.0
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
