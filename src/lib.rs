//! # sprint-analytics: Derived Views over Timed-Game Records
//!
//! sprint-analytics turns a newest-first feed of sprint results (finishing
//! time in seconds, lower is better) into chart-ready series: a trend line,
//! a trailing moving average, a sliding-window percentile trend, a
//! finishing-time histogram, a personal-best progression and a top-N table.
//!
//! ## Design Principles
//!
//! - **Explicit chronology**: the feed order is declared once when the
//!   [`RecordStore`] is built; every derivation reads the ascending view
//! - **Pure derivations**: each entry point takes immutable inputs and
//!   returns a fresh series, so reruns are bit-identical
//! - **Fail fast**: non-positive sizes are rejected before any output exists;
//!   empty input is a valid degenerate case
//!
//! ## Example Usage
//!
//! ```rust
//! use sprint_analytics::record::{Chronology, LegacyBaseline, Record, RecordStore};
//! use sprint_analytics::{AnalysisConfig, Dashboard};
//!
//! let feed = vec![
//!     Record::new(400, 45.0),
//!     Record::new(300, 70.0),
//!     Record::new(200, 50.0),
//!     Record::new(100, 60.0),
//! ];
//! let store = RecordStore::new(feed, Chronology::NewestFirst)?;
//!
//! let config = AnalysisConfig::builder().top_n(2).build()?;
//! let dashboard = Dashboard::compute(&store, &LegacyBaseline::empty(), &config, 0)?;
//!
//! assert_eq!(dashboard.personal_bests.values, vec![60.0, 50.0, 45.0]);
//! assert_eq!(dashboard.top[0].played_at(), 400);
//! # Ok::<(), sprint_analytics::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod histogram;
pub mod ingest;
pub mod percentile;
pub mod progression;
pub mod record;
pub mod smoothing;
pub mod topk;
pub mod trend;

pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use dashboard::Dashboard;
pub use error::{Error, Result};
pub use record::{Record, RecordStore};
