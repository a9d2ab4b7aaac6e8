//! Personal-best progression
//!
//! Merges the legacy baseline (bests recorded before live collection) with
//! every live improvement, producing a stepped, non-increasing series.

use crate::record::{BaselinePoint, LegacyBaseline, RecordStore};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parallel timestamp/value sequences of personal bests, ascending in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressionSeries {
    /// Epoch seconds at which each best was set
    pub timestamps: Vec<i64>,
    /// The best time set at that moment
    pub values: Vec<f64>,
}

impl ProgressionSeries {
    fn push(&mut self, played_at: i64, value: f64) {
        self.timestamps.push(played_at);
        self.values.push(value);
    }

    /// Iterate over `(played_at, value)` points.
    pub fn points(&self) -> impl Iterator<Item = BaselinePoint> + '_ {
        self.timestamps
            .iter()
            .zip(&self.values)
            .map(|(&t, &v)| BaselinePoint::new(t, v))
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Build the personal-best series.
///
/// Legacy points are emitted verbatim. The running best starts at the most
/// recent legacy value; with no baseline, the first live record is taken as
/// the first best. A live record is emitted only when strictly faster than
/// the running best.
#[must_use]
pub fn best_progression(legacy: &LegacyBaseline, store: &RecordStore) -> ProgressionSeries {
    let mut series = ProgressionSeries::default();
    for point in legacy.points() {
        series.push(point.played_at, point.value);
    }

    let mut best = legacy.latest().map(|p| p.value);
    for record in store {
        if best.map_or(true, |b| record.value() < b) {
            series.push(record.played_at(), record.value());
            best = Some(record.value());
        }
    }

    debug!(
        legacy = legacy.points().len(),
        live_bests = series.len() - legacy.points().len(),
        "computed best progression"
    );
    series
}
