//! Legacy baseline - personal bests recorded before live collection began

use super::{normalize, Chronology};
use crate::Result;
use serde::{Deserialize, Serialize};

/// One point of a `(timestamp, value)` series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselinePoint {
    /// Epoch seconds (UTC)
    pub played_at: i64,
    /// Finishing time in seconds
    pub value: f64,
}

impl BaselinePoint {
    /// Create a point.
    #[must_use]
    pub const fn new(played_at: i64, value: f64) -> Self {
        Self { played_at, value }
    }
}

/// Legacy personal-best series, held oldest-first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyBaseline {
    points: Vec<BaselinePoint>,
}

impl LegacyBaseline {
    /// Normalize a delivered baseline series.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the points are not sorted in the declared
    /// direction.
    pub fn new(points: Vec<BaselinePoint>, chronology: Chronology) -> Result<Self> {
        let points = normalize(points, chronology, |p| p.played_at)?;
        Ok(Self { points })
    }

    /// No baseline.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Points oldest-first.
    #[must_use]
    pub fn points(&self) -> &[BaselinePoint] {
        &self.points
    }

    /// The most recent point, which seeds the live personal best.
    #[must_use]
    pub fn latest(&self) -> Option<&BaselinePoint> {
        self.points.last()
    }

    /// Check if there is no baseline.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
