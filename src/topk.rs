//! Top-N selection of the fastest games
//!
//! **Problem**: sorting every game to show a top-10 table is O(N log N).
//!
//! **Solution**: bounded max-heap selection, O(N log K), then a sort of the
//! K survivors. The result is identical to a stable ascending sort followed
//! by `take(n)`.
//!
//! Ties keep feed order: the feed arrives newest-first, so among equal times
//! the most recent game ranks first.

use crate::record::{Record, RecordStore};
use crate::{Error, Result};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Default table size.
pub const DEFAULT_TOP_N: usize = 10;

// Heap item for ascending selection (max-heap: worst kept candidate on top)
#[derive(Debug)]
struct MaxHeapItem {
    value: f64,
    // position in feed order (0 = newest)
    rank: usize,
    index: usize,
}

impl MaxHeapItem {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.value
            .total_cmp(&other.value)
            .then(self.rank.cmp(&other.rank))
    }
}

impl PartialEq for MaxHeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

impl Eq for MaxHeapItem {}

impl Ord for MaxHeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key_cmp(other)
    }
}

impl PartialOrd for MaxHeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Select the `n` fastest records, best first.
///
/// Returns fewer than `n` records when the store is smaller. The store is
/// not modified.
///
/// # Errors
///
/// Returns `InvalidArgument` if `n` is zero.
///
/// # Examples
///
/// ```rust
/// use sprint_analytics::record::{Chronology, Record, RecordStore};
/// use sprint_analytics::topk::top_n;
///
/// let store = RecordStore::new(
///     vec![Record::new(100, 60.0), Record::new(200, 50.0), Record::new(300, 70.0), Record::new(400, 45.0)],
///     Chronology::OldestFirst,
/// )?;
///
/// let best = top_n(&store, 2)?;
/// assert_eq!(best[0].played_at(), 400);
/// assert_eq!(best[1].played_at(), 200);
/// # Ok::<(), sprint_analytics::Error>(())
/// ```
pub fn top_n(store: &RecordStore, n: usize) -> Result<Vec<Record>> {
    if n == 0 {
        return Err(Error::InvalidArgument(
            "n must be greater than 0".to_string(),
        ));
    }

    let records = store.records();
    let len = records.len();
    let mut heap: BinaryHeap<MaxHeapItem> = BinaryHeap::with_capacity(n.min(len));

    for (index, record) in records.iter().enumerate() {
        let item = MaxHeapItem {
            value: record.value(),
            rank: len - 1 - index,
            index,
        };

        if heap.len() < n {
            heap.push(item);
        } else if let Some(top) = heap.peek() {
            if item < *top {
                heap.pop();
                heap.push(item);
            }
        }
    }

    Ok(heap
        .into_sorted_vec()
        .into_iter()
        .map(|item| records[item.index].clone())
        .collect())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::record::Chronology;

    fn create_test_store(values: &[f64]) -> RecordStore {
        let records = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Record::new(i64::try_from(i).unwrap() * 100 + 100, v))
            .collect();
        RecordStore::new(records, Chronology::OldestFirst).unwrap()
    }

    #[test]
    fn test_top_n_basic() {
        let store = create_test_store(&[60.0, 50.0, 70.0, 45.0]);
        let result = top_n(&store, 2).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0], Record::new(400, 45.0));
        assert_eq!(result[1], Record::new(200, 50.0));
    }

    #[test]
    fn test_top_n_greater_than_length() {
        let store = create_test_store(&[3.0, 1.0, 2.0]);
        let result = top_n(&store, DEFAULT_TOP_N).unwrap();

        let values: Vec<f64> = result.iter().map(Record::value).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_top_n_ties_newest_first() {
        let store = create_test_store(&[40.0, 41.0, 40.0, 40.0]);
        let result = top_n(&store, 2).unwrap();

        let stamps: Vec<i64> = result.iter().map(Record::played_at).collect();
        assert_eq!(stamps, vec![400, 300]);
    }

    #[test]
    fn test_top_n_matches_stable_sort() {
        let values = [55.1, 48.2, 48.2, 61.0, 47.9, 50.0, 48.2, 70.3, 47.9];
        let store = create_test_store(&values);

        let mut feed: Vec<Record> = store.records().to_vec();
        feed.reverse();
        feed.sort_by(|a, b| a.value().partial_cmp(&b.value()).unwrap());

        for n in 1..=values.len() {
            let result = top_n(&store, n).unwrap();
            assert_eq!(result, feed[..n].to_vec(), "mismatch for n = {n}");
        }
    }

    #[test]
    fn test_top_n_nan_ranks_last() {
        let store = create_test_store(&[f64::NAN, 50.0, 40.0]);
        let result = top_n(&store, 2).unwrap();

        let values: Vec<f64> = result.iter().map(Record::value).collect();
        assert_eq!(values, vec![40.0, 50.0]);
    }

    #[test]
    fn test_top_n_does_not_mutate_store() {
        let store = create_test_store(&[3.0, 1.0, 2.0]);
        let before = store.clone();
        let _ = top_n(&store, 2).unwrap();
        assert_eq!(store, before);
    }

    #[test]
    fn test_top_n_zero_fails() {
        let store = create_test_store(&[1.0, 2.0, 3.0]);
        let result = top_n(&store, 0);

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("must be greater than 0"));
    }

    #[test]
    fn test_top_n_empty_store() {
        let result = top_n(&RecordStore::empty(), 5).unwrap();
        assert!(result.is_empty());
    }
}
