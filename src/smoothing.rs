//! Trailing simple moving average
//!
//! The window grows from one sample up to `window` samples, then slides.
//! Missing samples (`None` or non-finite) occupy a window slot but are left
//! out of both the sum and the count.
//!
//! Each window is summed afresh rather than kept as a running total, so one
//! outlier cannot leave cancellation error in later entries once it has
//! slid out of the window.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default trailing window, in games.
pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 20;

/// Moving-average output, same length as the input.
///
/// Values are kept at full precision; use [`SmoothedSeries::rounded`] for
/// display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmoothedSeries {
    /// One entry per input sample; `None` where the window held no sample
    pub values: Vec<Option<f64>>,
}

impl SmoothedSeries {
    /// Project to 2 decimal places for a chart tooltip or table.
    #[must_use]
    pub fn rounded(&self) -> Vec<Option<f64>> {
        self.values.iter().map(|v| v.map(round_2dp)).collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Round half away from zero to 2 decimal places.
#[must_use]
pub fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn present(sample: Option<f64>) -> Option<f64> {
    match sample {
        Some(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Compute the trailing moving average of `values`.
///
/// Entry `i` is the mean of the present samples in
/// `values[i + 1 - window ..= i]` (clamped at 0).
///
/// # Errors
///
/// Returns `InvalidArgument` if `window` is zero.
///
/// # Examples
///
/// ```rust
/// use sprint_analytics::smoothing::moving_average;
///
/// let out = moving_average(&[Some(10.0), None, Some(20.0), Some(30.0)], 2)?;
/// assert_eq!(out.values, vec![Some(10.0), Some(10.0), Some(20.0), Some(25.0)]);
/// # Ok::<(), sprint_analytics::Error>(())
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn moving_average(values: &[Option<f64>], window: usize) -> Result<SmoothedSeries> {
    if window == 0 {
        return Err(Error::InvalidArgument(
            "moving average window must be greater than 0".to_string(),
        ));
    }

    let out = (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let (sum, count) = values[start..=i]
                .iter()
                .filter_map(|&sample| present(sample))
                .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
            (count > 0).then(|| sum / count as f64)
        })
        .collect();

    debug!(samples = values.len(), window, "computed moving average");
    Ok(SmoothedSeries { values: out })
}
