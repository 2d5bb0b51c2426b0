//! Least-squares trend removal
//!
//! The fit runs over the sample index, so the result does not depend on the
//! time axis scaling.

use ndarray::{Array1, ArrayView1};

/// Trend model removed by [`detrend`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetrendKind {
    /// Subtract the least-squares line a + b*i
    #[default]
    Linear,

    /// Subtract the mean
    Constant,
}

/// Fit y ≈ intercept + slope * i by least squares
///
/// # Returns
/// `(intercept, slope)`, with slope 0 for fewer than two samples
pub fn linear_fit(y: ArrayView1<'_, f64>) -> (f64, f64) {
    let n = y.len();
    if n == 0 {
        return (0.0, 0.0);
    }

    // Centered index keeps the normal equations well conditioned for long inputs
    let center = (n - 1) as f64 / 2.0;
    let mean = y.sum() / n as f64;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (i, &value) in y.iter().enumerate() {
        let x = i as f64 - center;
        sxy += x * (value - mean);
        sxx += x * x;
    }

    let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
    let intercept = mean - slope * center;

    (intercept, slope)
}

/// Remove a fitted trend from a sequence
///
/// # Arguments
/// * `y` - Input sequence
/// * `kind` - Trend model to remove
///
/// # Returns
/// Residual of the same length as `y`
pub fn detrend(y: ArrayView1<'_, f64>, kind: DetrendKind) -> Array1<f64> {
    match kind {
        DetrendKind::Constant => {
            let mean = y.mean().unwrap_or(0.0);
            y.mapv(|value| value - mean)
        }
        DetrendKind::Linear => {
            let (intercept, slope) = linear_fit(y);
            Array1::from_iter(
                y.iter()
                    .enumerate()
                    .map(|(i, &value)| value - (intercept + slope * i as f64)),
            )
        }
    }
}
