//! Trend extraction: the raw `(played_at, value)` performance line

use crate::record::RecordStore;
use serde::{Deserialize, Serialize};

/// Parallel timestamp/value sequences in ascending time order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Epoch seconds, ascending
    pub timestamps: Vec<i64>,
    /// Finishing times in seconds
    pub values: Vec<f64>,
}

impl TrendSeries {
    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Project every record of the store onto the trend line.
#[must_use]
pub fn extract_trend(store: &RecordStore) -> TrendSeries {
    let (timestamps, values) = store
        .iter()
        .map(|r| (r.played_at(), r.value()))
        .unzip();
    TrendSeries { timestamps, values }
}
