//! Append-only, thread-safe store of captured log records.

use crate::logging::LogSink;
use crate::model::{LogEvent, LogRecord};
use crate::view_state::VisibleRange;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[cfg(test)]
#[path = "log_store_tests.rs"]
mod tests;

/// Records in a visible range, copied out under a single lock.
#[derive(Debug, Clone, Default)]
pub struct VisibleSlice {
    /// Store length at the time of the snapshot.
    pub total: usize,
    /// Range the records were taken from.
    pub range: VisibleRange,
    /// Records for `range`, in display order.
    pub records: Vec<Arc<LogRecord>>,
}

/// Unbounded, insertion-ordered log buffer.
///
/// Producers on any thread call [`append`](Self::append); the draw thread
/// reads a viewport-sized slice once per frame. Records are never removed
/// or reordered.
#[derive(Debug, Default)]
pub struct LogStore {
    records: Mutex<Vec<Arc<LogRecord>>>,
}

impl LogStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Arc<LogRecord>>> {
        // Vec::push is all-or-nothing; a poisoned store is still consistent.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a record. Never fails.
    pub fn append(&self, record: LogRecord) {
        self.lock().push(Arc::new(record));
    }

    /// Records appended so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Nothing appended yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Record at `index`, if present.
    pub fn get(&self, index: usize) -> Option<Arc<LogRecord>> {
        self.lock().get(index).cloned()
    }

    /// Every record, in order. Intended for tests and small stores.
    pub fn snapshot(&self) -> Vec<Arc<LogRecord>> {
        self.lock().clone()
    }

    /// Compute a range from the current length and copy out only that range.
    ///
    /// Length and contents are read under the same lock, so a concurrent
    /// append cannot make the range point past the copied records.
    pub fn snapshot_visible<F>(&self, range_for: F) -> VisibleSlice
    where
        F: FnOnce(usize) -> VisibleRange,
    {
        let records = self.lock();
        let total = records.len();
        let range = range_for(total).clamped(total);
        let slice = records[range.start_index.get()..range.end_index.get()].to_vec();
        VisibleSlice {
            total,
            range,
            records: slice,
        }
    }
}

impl LogSink for LogStore {
    fn on_log(&self, event: LogEvent) {
        self.append(LogRecord::from_event(event));
    }
}
