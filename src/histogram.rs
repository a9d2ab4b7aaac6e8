//! Unit-width histogram of finishing times

use crate::record::Record;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default upper clip bound, in whole seconds.
pub const DEFAULT_CLIP_BOUND: i64 = 75;

const SECONDS_PER_DAY: i64 = 86_400;

/// Widest bucket range `bucketize` will allocate.
pub const MAX_BUCKETS: usize = 100_000;

/// Keep only records played within `max_age_days` of `now`.
///
/// `now` comes from the caller's clock so that bucketing stays a pure
/// function of its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecencyFilter {
    /// Reference time, epoch seconds
    pub now: i64,
    /// Maximum record age in days
    pub max_age_days: u32,
}

impl RecencyFilter {
    /// Create a filter.
    #[must_use]
    pub const fn new(now: i64, max_age_days: u32) -> Self {
        Self { now, max_age_days }
    }

    /// Check if a record is recent enough to count.
    #[must_use]
    pub const fn admits(&self, record: &Record) -> bool {
        self.now.saturating_sub(record.played_at()) <= self.max_age_days as i64 * SECONDS_PER_DAY
    }
}

/// Parallel bucket labels and counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    /// Lower edge of each bucket, in whole seconds
    pub bucket_labels: Vec<i64>,
    /// Records counted into each bucket
    pub bucket_counts: Vec<usize>,
}

impl Histogram {
    /// Total counted records.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bucket_counts.iter().sum()
    }

    /// Check if no buckets were constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bucket_labels.is_empty()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn bucket_of(value: f64) -> i64 {
    value.floor() as i64
}

/// Bucket finishing times into unit-width bins `min ..= max`.
///
/// The range spans the fastest time up to the slowest time, clipped at
/// `clip_bound`. Records above the clipped range are excluded, not folded
/// into the last bucket. The recency filter only affects counting; the
/// bucket range is always taken from the whole input.
///
/// # Errors
///
/// Returns `InvalidState` if clipping leaves an empty range (every record is
/// slower than `clip_bound`) or the range spans more than [`MAX_BUCKETS`]
/// buckets.
///
/// # Examples
///
/// ```rust
/// use sprint_analytics::histogram::bucketize;
/// use sprint_analytics::record::Record;
///
/// let records = [Record::new(1, 1.0), Record::new(2, 1.0), Record::new(3, 2.5)];
/// let histogram = bucketize(&records, 75, None)?;
/// assert_eq!(histogram.bucket_labels, vec![1, 2]);
/// assert_eq!(histogram.bucket_counts, vec![2, 1]);
/// # Ok::<(), sprint_analytics::Error>(())
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn bucketize<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    clip_bound: i64,
    recency: Option<RecencyFilter>,
) -> Result<Histogram> {
    let values: Vec<&Record> = records
        .into_iter()
        .filter(|r| r.value().is_finite())
        .collect();

    if values.is_empty() {
        warn!("histogram requested over empty input");
        return Ok(Histogram::default());
    }
    let (lo, hi) = values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
        (lo.min(r.value()), hi.max(r.value()))
    });

    let min = bucket_of(lo);
    let max = bucket_of(hi).min(clip_bound);
    if min > max {
        return Err(Error::InvalidState(format!(
            "histogram range collapsed: min bucket {min} exceeds clipped max {max}"
        )));
    }

    let width = max
        .checked_sub(min)
        .and_then(|span| span.checked_add(1))
        .and_then(|width| usize::try_from(width).ok())
        .filter(|&width| width <= MAX_BUCKETS)
        .ok_or_else(|| {
            Error::InvalidState(format!(
                "histogram range {min}..={max} exceeds {MAX_BUCKETS} buckets"
            ))
        })?;
    let mut bucket_counts = vec![0_usize; width];
    let mut excluded = 0_usize;

    for record in &values {
        let bucket = bucket_of(record.value());
        if bucket > max || recency.is_some_and(|f| !f.admits(record)) {
            excluded += 1;
            continue;
        }
        // bucket >= min: min is the floor of the smallest value
        bucket_counts[(bucket - min) as usize] += 1;
    }

    debug!(min, max, counted = values.len() - excluded, excluded, "bucketized values");
    Ok(Histogram {
        bucket_labels: (min..=max).collect(),
        bucket_counts,
    })
}
