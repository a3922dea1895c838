/// Arithmetic mean. NaN for an empty slice, matching the convention used
/// throughout the analyzers for undefined aggregates.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator). NaN for fewer than two
/// values, since the sample deviation of a single point is undefined.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (sum_sq / (values.len() as f64 - 1.0)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_values() {
        assert_eq!(mean(&[30.0, 35.0, 40.0, 45.0]), 37.5);
    }

    #[test]
    fn test_mean_of_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_sample_std_dev() {
        let std = sample_std_dev(&[30.0, 35.0, 40.0, 45.0]);
        assert!((std - 6.454972243679028).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_of_single_value_is_nan() {
        assert!(sample_std_dev(&[42.0]).is_nan());
        assert!(sample_std_dev(&[]).is_nan());
    }
}
