//! Record loading from archive exports
//!
//! The archive publishes one CSV per game mode, newest game first:
//!
//! ```text
//! played_at,time_ms,accuracy,pieces,pps
//! 2024-03-02T18:41:07Z,44812,96.5,100,2.23
//! ```
//!
//! `played_at` becomes whole epoch seconds (UTC, floored) and `time_ms`
//! becomes seconds. The auxiliary columns are optional. Legacy baseline
//! exports share the format.
//!
//! Columnar collaborators can hand over an Arrow `RecordBatch` instead; see
//! [`records_from_batch`].

mod columnar;
mod csv_source;

pub use columnar::records_from_batch;
pub use csv_source::{load_baseline_csv, load_records_csv, parse_played_at};
