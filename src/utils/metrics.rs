//! Accuracy metrics for in-sample fit evaluation.

use serde::{Deserialize, Serialize};

/// Accuracy of a model's fitted values against the observed series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Accuracy {
    /// Mean Absolute Percentage Error, in percent. None when every actual is zero.
    pub mape: Option<f64>,
    /// Root Mean Squared Error.
    pub rmse: f64,
}

impl Accuracy {
    /// Selection score: `100 - mape`, or 0 when MAPE is undefined.
    pub fn score(&self) -> f64 {
        self.mape.map(|m| 100.0 - m).unwrap_or(0.0)
    }
}

/// Calculate MAPE and RMSE between actual and fitted values.
///
/// Returns `None` for empty or mismatched inputs.
///
/// Periods where the actual value is zero contribute 0% error but still count
/// towards the average.
///
/// # Example
/// ```
/// use inventory_forecast::utils::accuracy;
///
/// let acc = accuracy(&[10.0, 20.0, 30.0], &[10.0, 20.0, 30.0]).unwrap();
/// assert_eq!(acc.mape, Some(0.0));
/// assert_eq!(acc.rmse, 0.0);
/// ```
pub fn accuracy(actual: &[f64], fitted: &[f64]) -> Option<Accuracy> {
    if actual.is_empty() || actual.len() != fitted.len() {
        return None;
    }

    Some(Accuracy {
        mape: mape(actual, fitted),
        rmse: rmse(actual, fitted),
    })
}

/// Score the finite entries of `fitted` against the matching actuals.
///
/// Fitted vectors use NaN for periods a model cannot predict one step ahead
/// (the first observation, or the first window or season).
pub fn in_sample_accuracy(actual: &[f64], fitted: &[f64]) -> Option<Accuracy> {
    if actual.len() != fitted.len() {
        return None;
    }
    let (a, f): (Vec<f64>, Vec<f64>) = actual
        .iter()
        .zip(fitted.iter())
        .filter(|(_, f)| f.is_finite())
        .map(|(&a, &f)| (a, f))
        .unzip();
    accuracy(&a, &f)
}

/// Mean Absolute Percentage Error in percent, with zero actuals contributing 0%.
pub fn mape(actual: &[f64], fitted: &[f64]) -> Option<f64> {
    if actual.is_empty() || actual.len() != fitted.len() {
        return None;
    }
    if actual.iter().all(|&a| a == 0.0) {
        return None;
    }

    let sum: f64 = actual
        .iter()
        .zip(fitted.iter())
        .map(|(a, f)| if *a == 0.0 { 0.0 } else { ((a - f) / a).abs() })
        .sum();
    Some(100.0 * sum / actual.len() as f64)
}

/// Root Mean Squared Error between two slices.
pub fn rmse(actual: &[f64], fitted: &[f64]) -> f64 {
    if actual.is_empty() || actual.len() != fitted.len() {
        return f64::NAN;
    }
    let mse = actual
        .iter()
        .zip(fitted.iter())
        .map(|(a, f)| (a - f).powi(2))
        .sum::<f64>()
        / actual.len() as f64;
    mse.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn accuracy_perfect_fit() {
        let acc = accuracy(&[10.0, 20.0, 30.0], &[10.0, 20.0, 30.0]).unwrap();
        assert_relative_eq!(acc.mape.unwrap(), 0.0);
        assert_relative_eq!(acc.rmse, 0.0);
        assert_relative_eq!(acc.score(), 100.0);
    }

    #[test]
    fn accuracy_known_values() {
        // Relative errors: 10%, 10%, 0%
        let acc = accuracy(&[10.0, 20.0, 30.0], &[11.0, 18.0, 30.0]).unwrap();
        assert_relative_eq!(acc.mape.unwrap(), 20.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(acc.rmse, (5.0_f64 / 3.0).sqrt(), epsilon = 1e-10);
        assert_relative_eq!(acc.score(), 100.0 - 20.0 / 3.0, epsilon = 1e-10);
    }

    #[test]
    fn zero_actuals_contribute_zero_percent() {
        // |4-5|/4 = 25%, zero period adds nothing but counts in the mean
        let acc = accuracy(&[0.0, 4.0], &[3.0, 5.0]).unwrap();
        assert_relative_eq!(acc.mape.unwrap(), 12.5, epsilon = 1e-10);
        assert_relative_eq!(acc.rmse, 5.0_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn all_zero_actuals_have_no_mape() {
        let acc = accuracy(&[0.0, 0.0, 0.0], &[1.0, 0.0, 2.0]).unwrap();
        assert!(acc.mape.is_none());
        assert!(acc.rmse > 0.0);
        assert_relative_eq!(acc.score(), 0.0);
    }

    #[test]
    fn accuracy_rejects_empty_and_mismatched() {
        assert!(accuracy(&[], &[]).is_none());
        assert!(accuracy(&[1.0, 2.0], &[1.0]).is_none());
    }

    #[test]
    fn in_sample_accuracy_skips_undefined_fits() {
        let actual = [5.0, 10.0, 20.0];
        let fitted = [f64::NAN, 10.0, 10.0];
        let acc = in_sample_accuracy(&actual, &fitted).unwrap();
        assert_relative_eq!(acc.mape.unwrap(), 25.0, epsilon = 1e-10);
    }

    #[test]
    fn in_sample_accuracy_with_no_defined_fits() {
        let acc = in_sample_accuracy(&[1.0, 2.0], &[f64::NAN, f64::NAN]);
        assert!(acc.is_none());
    }

    #[test]
    fn standalone_rmse() {
        assert_relative_eq!(
            rmse(&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]),
            1.0,
            epsilon = 1e-10
        );
        assert!(rmse(&[], &[]).is_nan());
    }
}
