//! Error types for sprint-analytics
//!
//! Every derivation fails fast on a precondition violation; empty input is a
//! valid degenerate case and never reaches this module.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// sprint-analytics error types
#[derive(Error, Debug)]
pub enum Error {
    /// Caller supplied a non-positive window, capacity or N, a malformed
    /// configuration, or records out of chronological order
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal invariant violated (e.g. histogram bucket range collapsed)
    #[error("Invalid state: {0}\nThis indicates unvalidated input reached a derivation. Please report this issue.")]
    InvalidState(String),

    /// A raw row could not be turned into a record
    #[error("Parse error: {0}")]
    ParseError(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Arrow error (columnar ingestion)
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// JSON config or export error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
