//! Game records and the chronologically normalized record store
//!
//! ## Data Flow
//!
//! ```text
//! loader (newest-first) ──> RecordStore::new(.., Chronology::NewestFirst)
//!                                 │  reverse + verify order
//!                                 ▼
//!                           ascending view ──> every derivation
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sprint_analytics::record::{Chronology, Record, RecordStore};
//!
//! let feed = vec![Record::new(300, 44.8), Record::new(200, 47.1), Record::new(100, 51.0)];
//! let store = RecordStore::new(feed, Chronology::NewestFirst)?;
//!
//! assert_eq!(store.len(), 3);
//! assert_eq!(store.records()[0].played_at(), 100);
//! # Ok::<(), sprint_analytics::Error>(())
//! ```

mod baseline;
mod game_record;
mod store;

pub use baseline::{BaselinePoint, LegacyBaseline};
pub use game_record::{Record, RecordBuilder};
pub use store::RecordStore;

use serde::{Deserialize, Serialize};

/// Order in which a collaborator delivered a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Chronology {
    /// Oldest record first (the order every derivation consumes).
    OldestFirst,
    /// Newest record first (the order the archive feed delivers).
    NewestFirst,
}

/// Put a sequence into ascending time order and verify the result.
///
/// Reversal is the whole normalization: the feed is already sorted, only in
/// the opposite direction. Anything still out of order afterwards is a
/// collaborator bug and is rejected rather than silently re-sorted.
pub(crate) fn normalize<T>(
    mut items: Vec<T>,
    chronology: Chronology,
    timestamp: impl Fn(&T) -> i64,
) -> crate::Result<Vec<T>> {
    if chronology == Chronology::NewestFirst {
        items.reverse();
    }

    if let Some(pos) = items
        .windows(2)
        .position(|pair| timestamp(&pair[0]) > timestamp(&pair[1]))
    {
        return Err(crate::Error::InvalidArgument(format!(
            "sequence declared {chronology:?} is out of order at position {pos}: {} > {}",
            timestamp(&items[pos]),
            timestamp(&items[pos + 1])
        )));
    }

    Ok(items)
}
