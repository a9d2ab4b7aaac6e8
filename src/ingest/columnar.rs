//! Arrow `RecordBatch` reader

use crate::record::Record;
use crate::{Error, Result};
use arrow::array::{Array, Float64Array, Int64Array, UInt32Array};
use arrow::record_batch::RecordBatch;

fn column<'a, T: 'static>(batch: &'a RecordBatch, name: &str) -> Result<Option<&'a T>> {
    let Some(column) = batch.column_by_name(name) else {
        return Ok(None);
    };
    column
        .as_any()
        .downcast_ref::<T>()
        .map(Some)
        .ok_or_else(|| {
            Error::InvalidArgument(format!(
                "column {name} has unexpected type {:?}",
                column.data_type()
            ))
        })
}

fn optional<T, A: Array>(array: Option<&A>, row: usize, get: impl Fn(&A, usize) -> T) -> Option<T> {
    array.filter(|a| !a.is_null(row)).map(|a| get(a, row))
}

/// Convert a batch to records, preserving row order.
///
/// Required columns: `played_at` (Int64, epoch seconds) and either `value`
/// (Float64, seconds) or `time_ms` (Float64, milliseconds). Optional:
/// `accuracy` (Float64), `pieces` (UInt32), `pps` (Float64). Rows with a
/// null time are dropped.
///
/// # Errors
///
/// Returns `InvalidArgument` if a required column is missing, a column has
/// the wrong type, or a timestamp is null, and `ParseError` if a time is
/// `NaN` or infinite.
pub fn records_from_batch(batch: &RecordBatch) -> Result<Vec<Record>> {
    let played_at = column::<Int64Array>(batch, "played_at")?
        .ok_or_else(|| Error::InvalidArgument("missing column played_at".to_string()))?;
    let (time, scale) = match column::<Float64Array>(batch, "value")? {
        Some(values) => (values, 1.0),
        None => (
            column::<Float64Array>(batch, "time_ms")?.ok_or_else(|| {
                Error::InvalidArgument("missing column value or time_ms".to_string())
            })?,
            1000.0,
        ),
    };
    let accuracy = column::<Float64Array>(batch, "accuracy")?;
    let pieces = column::<UInt32Array>(batch, "pieces")?;
    let pps = column::<Float64Array>(batch, "pps")?;

    let mut records = Vec::with_capacity(batch.num_rows());
    for row in 0..batch.num_rows() {
        if time.is_null(row) {
            continue;
        }
        if played_at.is_null(row) {
            return Err(Error::InvalidArgument(format!("null played_at at row {row}")));
        }

        let raw = time.value(row);
        if !raw.is_finite() {
            return Err(Error::ParseError(format!(
                "row {row}: finishing time {raw} is not finite"
            )));
        }

        let mut builder = Record::builder(played_at.value(row), raw / scale);
        if let Some(v) = optional(accuracy, row, Float64Array::value) {
            builder = builder.accuracy(v);
        }
        if let Some(v) = optional(pieces, row, UInt32Array::value) {
            builder = builder.pieces(v);
        }
        if let Some(v) = optional(pps, row, Float64Array::value) {
            builder = builder.pps(v);
        }
        records.push(builder.build());
    }

    Ok(records)
}
