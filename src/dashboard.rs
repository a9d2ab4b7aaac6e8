//! One-call computation of every derived series for an analysis session
//!
//! ```text
//! RecordStore ──┬─> trend ──> moving average
//!               ├─> percentile trend
//!               ├─> histogram
//!               ├─> best progression <── LegacyBaseline
//!               └─> top N
//! ```
//!
//! The derivations share nothing but immutable borrows of the store, so with
//! the `rayon` feature the independent branches run on the rayon pool.

use crate::config::AnalysisConfig;
use crate::histogram::{bucketize, Histogram, RecencyFilter};
use crate::percentile::{percentile_trend, PercentileSeries};
use crate::progression::{best_progression, ProgressionSeries};
use crate::record::{LegacyBaseline, Record, RecordStore};
use crate::smoothing::{moving_average, SmoothedSeries};
use crate::topk::top_n;
use crate::trend::{extract_trend, TrendSeries};
use crate::Result;
use serde::Serialize;
use tracing::{info, warn};

/// Every chart-ready series for one record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Total games played
    pub games_played: usize,
    /// Raw performance line
    pub trend: TrendSeries,
    /// Trailing moving average over the trend values
    pub moving_average: SmoothedSeries,
    /// Windowed percentile snapshots
    pub percentiles: PercentileSeries,
    /// Finishing-time distribution
    pub histogram: Histogram,
    /// Personal bests over time
    pub personal_bests: ProgressionSeries,
    /// Fastest games, best first
    pub top: Vec<Record>,
}

impl Dashboard {
    /// Compute every series.
    ///
    /// `now` is only read when `config.recency_days` is set.
    ///
    /// # Errors
    ///
    /// Returns the first derivation error; no partial dashboard is produced.
    pub fn compute(
        store: &RecordStore,
        legacy: &LegacyBaseline,
        config: &AnalysisConfig,
        now: i64,
    ) -> Result<Self> {
        config.validate()?;
        if store.is_empty() {
            warn!("computing dashboard over an empty record store");
        }

        let recency = config
            .recency_days
            .map(|days| RecencyFilter::new(now, days));

        let ((trend, moving_average), (percentiles, (histogram, (personal_bests, top)))) = join(
            || -> Result<_> {
                let trend = extract_trend(store);
                let values: Vec<Option<f64>> = trend.values.iter().copied().map(Some).collect();
                let smoothed = moving_average(&values, config.moving_average_window)?;
                Ok((trend, smoothed))
            },
            || {
                join(
                    || percentile_trend(store.iter().map(Record::value), config.percentile_capacity),
                    || {
                        join(
                            || bucketize(store, config.histogram_clip_bound, recency),
                            || Ok((best_progression(legacy, store), top_n(store, config.top_n)?)),
                        )
                    },
                )
            },
        )?;

        info!(
            games = store.len(),
            snapshots = percentiles.len(),
            buckets = histogram.bucket_labels.len(),
            bests = personal_bests.len(),
            "dashboard computed"
        );

        Ok(Self {
            games_played: store.len(),
            trend,
            moving_average,
            percentiles,
            histogram,
            personal_bests,
            top,
        })
    }

    /// Serialize for a charting layer.
    ///
    /// # Errors
    ///
    /// Returns `Json` if serialization fails (non-finite floats are written
    /// as `null`, so this does not happen for derived series).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(feature = "rayon")]
fn join<A, B, RA, RB>(a: A, b: B) -> Result<(RA, RB)>
where
    A: FnOnce() -> Result<RA> + Send,
    B: FnOnce() -> Result<RB> + Send,
    RA: Send,
    RB: Send,
{
    let (ra, rb) = rayon::join(a, b);
    Ok((ra?, rb?))
}

#[cfg(not(feature = "rayon"))]
fn join<A, B, RA, RB>(a: A, b: B) -> Result<(RA, RB)>
where
    A: FnOnce() -> Result<RA>,
    B: FnOnce() -> Result<RB>,
{
    Ok((a()?, b()?))
}
