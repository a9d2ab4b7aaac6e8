//! CSV archive reader

use crate::record::{BaselinePoint, Chronology, LegacyBaseline, Record, RecordStore};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use std::io::Read;
use tracing::{debug, warn};

const MS_PER_SECOND: f64 = 1000.0;

/// One raw archive row.
#[derive(Debug, Deserialize)]
struct RawRow {
    played_at: String,
    // archive header; `time` accepted for hand-written fixtures
    #[serde(alias = "time")]
    time_ms: Option<f64>,
    #[serde(default)]
    accuracy: Option<f64>,
    #[serde(default)]
    pieces: Option<u32>,
    #[serde(default)]
    pps: Option<f64>,
}

/// Parse an archive timestamp into epoch seconds.
///
/// Accepts RFC 3339 (`2024-03-02T18:41:07.512Z`) and naive
/// `YYYY-MM-DD HH:MM:SS` taken as UTC. Fractional seconds are floored.
///
/// # Errors
///
/// Returns `ParseError` if neither format matches.
pub fn parse_played_at(raw: &str) -> Result<i64> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.timestamp());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| dt.and_utc().timestamp())
        .map_err(|e| Error::ParseError(format!("unrecognized played_at {raw:?}: {e}")))
}

/// Rows whose time column is empty are skipped (aborted games); every other
/// malformed row, including a `NaN` or infinite time, fails the load.
fn read_rows<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0_usize;
    for (line, row) in rdr.deserialize::<RawRow>().enumerate() {
        let row = row?;
        let Some(time_ms) = row.time_ms else {
            skipped += 1;
            continue;
        };
        if !time_ms.is_finite() {
            return Err(Error::ParseError(format!(
                "row {}: finishing time {time_ms} is not finite",
                line + 1
            )));
        }
        let played_at = parse_played_at(&row.played_at)
            .map_err(|e| Error::ParseError(format!("row {}: {e}", line + 1)))?;

        let mut builder = Record::builder(played_at, time_ms / MS_PER_SECOND);
        if let Some(accuracy) = row.accuracy {
            builder = builder.accuracy(accuracy);
        }
        if let Some(pieces) = row.pieces {
            builder = builder.pieces(pieces);
        }
        if let Some(pps) = row.pps {
            builder = builder.pps(pps);
        }
        records.push(builder.build());
    }

    if skipped > 0 {
        warn!(skipped, "skipped rows without a finishing time");
    }
    debug!(rows = records.len(), "read archive csv");
    Ok(records)
}

/// Load a newest-first archive export into a store.
///
/// # Errors
///
/// Returns `Csv` or `ParseError` on malformed input and `InvalidArgument` if
/// the rows are not newest-first.
pub fn load_records_csv<R: Read>(reader: R) -> Result<RecordStore> {
    RecordStore::new(read_rows(reader)?, Chronology::NewestFirst)
}

/// Load a newest-first legacy personal-best export.
///
/// # Errors
///
/// Same as [`load_records_csv`].
pub fn load_baseline_csv<R: Read>(reader: R) -> Result<LegacyBaseline> {
    let points = read_rows(reader)?
        .into_iter()
        .map(|r| BaselinePoint::new(r.played_at(), r.value()))
        .collect();
    LegacyBaseline::new(points, Chronology::NewestFirst)
}
