//! Record Store - the normalized record set owned by one analysis session

use super::{normalize, Chronology, Record};
use crate::Result;
use tracing::debug;

/// In-memory holder for the records of one analysis session.
///
/// ## Design
///
/// Records are held in ascending `played_at` order. The order the feed
/// arrived in is declared once at construction, so windowed derivations
/// never iterate backwards over the raw feed. The store is immutable after
/// construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Normalize a delivered record sequence into a store.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the records are not sorted in the
    /// declared direction.
    pub fn new(records: Vec<Record>, chronology: Chronology) -> Result<Self> {
        let records = normalize(records, chronology, Record::played_at)?;
        debug!(records = records.len(), ?chronology, "normalized record store");
        Ok(Self { records })
    }

    /// Create an empty store.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Records in ascending chronological order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over records oldest-first.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Total games played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finishing times oldest-first, as present values for the smoother.
    #[must_use]
    pub fn values(&self) -> Vec<Option<f64>> {
        self.records.iter().map(|r| Some(r.value())).collect()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
