//! Descriptive statistics over plain `f64` slices.
//!
//! Every function returns `None` where the statistic is mathematically
//! undefined (empty input, too few samples, zero variance). Callers never see
//! NaN from here.

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance (ddof = 1).
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    if is_constant(values) {
        return Some(0.0);
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some(ss / (values.len() - 1) as f64)
}

/// Sample standard deviation (ddof = 1). Undefined for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Sample covariance (ddof = 1). Slices must have equal length.
pub fn covariance(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() != b.len() || a.len() < 2 {
        return None;
    }
    let ma = mean(a)?;
    let mb = mean(b)?;
    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - ma) * (y - mb)).sum();
    Some(sum / (a.len() - 1) as f64)
}

/// Pearson correlation coefficient in `[-1, 1]`.
///
/// `None` when the slices differ in length, hold fewer than two values, or
/// either side is constant.
pub fn pearson(a: &[f64], b: &[f64]) -> Option<f64> {
    // Rounding in the mean leaves a tiny non-zero variance on constant input.
    if is_constant(a) || is_constant(b) {
        return None;
    }
    let cov = covariance(a, b)?;
    let sa = sample_std_dev(a)?;
    let sb = sample_std_dev(b)?;
    let denom = sa * sb;
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    Some((cov / denom).clamp(-1.0, 1.0))
}

/// Whether every value is identical. Empty input counts as constant.
pub fn is_constant(values: &[f64]) -> bool {
    min_max(values).map_or(true, |(lo, hi)| lo == hi)
}

/// `(min, max)` of the values.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Quantile `q` in `[0, 1]` of already sorted values, linearly interpolated
/// between the two nearest ranks.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn mean_of_empty_is_undefined() {
        assert_eq!(mean(&[]), None);
        assert!((mean(&[1.0, 2.0, 6.0]).unwrap() - 3.0).abs() < EPS);
    }

    #[test]
    fn std_dev_uses_sample_formula() {
        // population std of this set is 2.0, sample std is sqrt(32/7)
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let std = sample_std_dev(&values).unwrap();
        assert!((std - (32.0f64 / 7.0).sqrt()).abs() < EPS);
        assert_eq!(sample_std_dev(&[3.0]), None);
    }

    #[test]
    fn test_pearson_corr() {
        let a = [1.0, 2.0];
        let b = [1.0, 2.0];
        assert!((covariance(&a, &b).unwrap() - 0.5).abs() < 0.001);
        assert!((pearson(&a, &b).unwrap() - 1.0).abs() < 0.001);

        let c = [3.0, 2.0, 1.0];
        let d = [1.0, 2.0, 3.0];
        assert!((pearson(&c, &d).unwrap() + 1.0).abs() < EPS);
    }

    #[test]
    fn pearson_is_undefined_for_degenerate_input() {
        assert_eq!(pearson(&[1.0], &[2.0]), None);
        assert_eq!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn quantiles_interpolate() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&sorted, 0.0), Some(1.0));
        assert_eq!(quantile_sorted(&sorted, 1.0), Some(4.0));
        assert!((quantile_sorted(&sorted, 0.5).unwrap() - 2.5).abs() < EPS);
        assert!((quantile_sorted(&sorted, 0.25).unwrap() - 1.75).abs() < EPS);
        assert_eq!(quantile_sorted(&[], 0.5), None);
    }

    #[test]
    fn min_max_of_values() {
        assert_eq!(min_max(&[3.0, -1.0, 2.0]), Some((-1.0, 3.0)));
        assert_eq!(min_max(&[]), None);
    }
}
