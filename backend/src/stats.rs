//! Descriptive statistics over per-trial threshold fractions
//!
//! - **Mean**: Neumaier-compensated (Kahan) summation
//! - **Standard deviation**: Welford's online algorithm, Bessel-corrected
//! - **Confidence interval**: normal approximation, `mean ± 1.96·s/√t`

/// Two-sided 95% quantile of the standard normal distribution
pub const CONFIDENCE_95_Z: f64 = 1.96;

/// Arithmetic mean using compensated summation
///
/// # Returns
/// `None` if `data` is empty.
///
/// # Example
/// ```
/// use percolation_core_rs::stats::mean;
///
/// let v = [0.5, 0.6, 0.7];
/// assert!((mean(&v).unwrap() - 0.6).abs() < 1e-12);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Sample standard deviation (denominator `n - 1`)
///
/// # Returns
/// `None` if `data.len() < 2`.
///
/// # Example
/// ```
/// use percolation_core_rs::stats::sample_std_dev;
///
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((sample_std_dev(&v).unwrap() - 2.138089935299395).abs() < 1e-10);
/// assert!(sample_std_dev(&[1.0]).is_none());
/// ```
pub fn sample_std_dev(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }

    let mut count = 0.0_f64;
    let mut running_mean = 0.0_f64;
    let mut m2 = 0.0_f64;
    for &x in data {
        count += 1.0;
        let delta = x - running_mean;
        running_mean += delta / count;
        m2 += delta * (x - running_mean);
    }

    Some((m2 / (count - 1.0)).sqrt())
}

/// 95% confidence interval for the mean of `samples` observations
///
/// Returns `(lo, hi)`. Applied unconditionally; small sample counts give
/// a wide but still well-defined interval.
pub fn confidence_interval_95(mean: f64, std_dev: f64, samples: usize) -> (f64, f64) {
    let half_width = CONFIDENCE_95_Z * std_dev / (samples as f64).sqrt();
    (mean - half_width, mean + half_width)
}

/// Compensated sum (Neumaier's variant of Kahan summation)
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty() {
        assert!(mean(&[]).is_none());
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean(&[0.59]), Some(0.59));
    }

    #[test]
    fn test_std_dev_identical_values_is_zero() {
        let sd = sample_std_dev(&[0.5, 0.5, 0.5, 0.5]).unwrap();
        assert!(sd.abs() < 1e-15);
    }

    #[test]
    fn test_std_dev_uses_bessel_correction() {
        // Squared deviations sum to 2.0 over 3 samples -> 2.0 / 2 = 1.0
        let sd = sample_std_dev(&[1.0, 2.0, 3.0]).unwrap();
        assert!((sd - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_confidence_interval_symmetric() {
        let (lo, hi) = confidence_interval_95(0.6, 0.02, 100);
        assert!((lo - (0.6 - 0.00392)).abs() < 1e-12);
        assert!((hi - (0.6 + 0.00392)).abs() < 1e-12);
    }

    #[test]
    fn test_kahan_sum_recovers_low_bits() {
        let data = [1e16, 1.0, -1e16];
        assert_eq!(kahan_sum(&data), 1.0);
    }
}
