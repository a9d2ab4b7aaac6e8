//! Record - one completed timed game

use serde::{Deserialize, Serialize};

/// Record represents a single completed sprint.
///
/// `value` is the finishing time in seconds; lower is better. The auxiliary
/// stats are carried through for display and never read by a derivation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    played_at: i64,
    value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pieces: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pps: Option<f64>,
}

impl Record {
    /// Create a record with no auxiliary stats.
    ///
    /// # Arguments
    ///
    /// * `played_at` - Seconds since the Unix epoch (UTC)
    /// * `value` - Finishing time in seconds
    #[must_use]
    pub const fn new(played_at: i64, value: f64) -> Self {
        Self {
            played_at,
            value,
            accuracy: None,
            pieces: None,
            pps: None,
        }
    }

    /// Create a builder for a record with auxiliary stats.
    #[must_use]
    pub const fn builder(played_at: i64, value: f64) -> RecordBuilder {
        RecordBuilder::new(played_at, value)
    }

    /// Get the event timestamp (epoch seconds).
    #[must_use]
    pub const fn played_at(&self) -> i64 {
        self.played_at
    }

    /// Get the finishing time in seconds.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Get the accuracy percent, if recorded.
    #[must_use]
    pub const fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    /// Get the number of pieces placed, if recorded.
    #[must_use]
    pub const fn pieces(&self) -> Option<u32> {
        self.pieces
    }

    /// Get the placement rate in pieces per second, if recorded.
    #[must_use]
    pub const fn pps(&self) -> Option<f64> {
        self.pps
    }
}

/// Builder for `Record`.
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub const fn new(played_at: i64, value: f64) -> Self {
        Self {
            record: Record::new(played_at, value),
        }
    }

    /// Set the accuracy percent.
    #[must_use]
    pub const fn accuracy(mut self, accuracy: f64) -> Self {
        self.record.accuracy = Some(accuracy);
        self
    }

    /// Set the piece count.
    #[must_use]
    pub const fn pieces(mut self, pieces: u32) -> Self {
        self.record.pieces = Some(pieces);
        self
    }

    /// Set the placement rate.
    #[must_use]
    pub const fn pps(mut self, pps: f64) -> Self {
        self.record.pps = Some(pps);
        self
    }

    /// Build the `Record`.
    #[must_use]
    pub const fn build(self) -> Record {
        self.record
    }
}
