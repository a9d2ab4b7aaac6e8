//! Sliding-window percentile trend
//!
//! A fixed-capacity ring of the most recent finishing times. Once the ring
//! has been filled, every 10th game emits a P50/P90/P95 snapshot keyed by
//! the number of games played so far.
//!
//! ## Rank convention
//!
//! Snapshots sort a copy of the ring **descending** and read index
//! `floor(capacity * p)`. Because low times sit at the tail of that order,
//! "P90" lands near the fast end of the window: it reads as "90% of recent
//! games were at least this slow". This is not the textbook ascending
//! percentile and must not be swapped for one without changing what the
//! chart means.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default ring capacity, in games.
pub const DEFAULT_PERCENTILE_CAPACITY: usize = 200;

/// Snapshots are throttled to one every `EMIT_INTERVAL` games.
pub const EMIT_INTERVAL: usize = 10;

const RANKS: [f64; 3] = [0.50, 0.90, 0.95];

/// One emitted snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileSnapshot {
    /// Games played (1-indexed) when the snapshot was taken
    pub games_played: usize,
    /// Value at descending rank 0.50
    pub p50: f64,
    /// Value at descending rank 0.90
    pub p90: f64,
    /// Value at descending rank 0.95
    pub p95: f64,
}

/// Four parallel sequences, one entry per emitted snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentileSeries {
    /// Games played at emission
    pub games_played: Vec<usize>,
    /// P50 per emission
    pub p50: Vec<f64>,
    /// P90 per emission
    pub p90: Vec<f64>,
    /// P95 per emission
    pub p95: Vec<f64>,
}

impl PercentileSeries {
    fn push(&mut self, snapshot: PercentileSnapshot) {
        self.games_played.push(snapshot.games_played);
        self.p50.push(snapshot.p50);
        self.p90.push(snapshot.p90);
        self.p95.push(snapshot.p95);
    }

    /// Number of snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games_played.len()
    }

    /// Check if nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games_played.is_empty()
    }
}

/// Circular window over the most recent values.
///
/// The buffer is allocated once at `capacity` and never resized.
#[derive(Debug, Clone)]
pub struct PercentileWindow {
    buffer: Box<[f64]>,
    write: usize,
    seen: usize,
}

impl PercentileWindow {
    /// Create an empty window.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidArgument(
                "percentile window capacity must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            buffer: vec![0.0; capacity].into_boxed_slice(),
            write: 0,
            seen: 0,
        })
    }

    /// Ring capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Values pushed so far.
    #[must_use]
    pub const fn games_played(&self) -> usize {
        self.seen
    }

    /// Push the next value (oldest-first order), returning a snapshot if
    /// this game qualifies for emission.
    pub fn push(&mut self, value: f64) -> Option<PercentileSnapshot> {
        self.buffer[self.write] = value;
        self.write = (self.write + 1) % self.buffer.len();
        self.seen += 1;

        let n = self.seen;
        (n >= self.capacity() && n % EMIT_INTERVAL == 0).then(|| self.snapshot())
    }

    fn snapshot(&self) -> PercentileSnapshot {
        let mut sorted = self.buffer.to_vec();
        sorted.sort_by(|a, b| b.total_cmp(a));

        let len = sorted.len();
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_precision_loss,
            clippy::cast_sign_loss
        )]
        let at = |p: f64| sorted[((len as f64 * p).floor() as usize).min(len - 1)];

        let [p50, p90, p95] = RANKS.map(at);
        PercentileSnapshot {
            games_played: self.seen,
            p50,
            p90,
            p95,
        }
    }
}

/// Run a fresh window over `values` (oldest-first) and collect every
/// snapshot.
///
/// # Errors
///
/// Returns `InvalidArgument` if `capacity` is zero.
pub fn percentile_trend(
    values: impl IntoIterator<Item = f64>,
    capacity: usize,
) -> Result<PercentileSeries> {
    let mut window = PercentileWindow::new(capacity)?;
    let mut series = PercentileSeries::default();

    for value in values {
        if let Some(snapshot) = window.push(value) {
            series.push(snapshot);
        }
    }

    debug!(
        games = window.games_played(),
        capacity,
        snapshots = series.len(),
        "computed percentile trend"
    );
    Ok(series)
}
