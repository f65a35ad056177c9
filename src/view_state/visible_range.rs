//! Half-open range of console rows to draw.

use super::types::RecordIndex;

/// Records of the log store that fall inside the console viewport.
///
/// # Invariants
/// - `start_index <= end_index`
/// - `end_index <= total` for the store it was computed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleRange {
    /// First record drawn.
    pub start_index: RecordIndex,
    /// One past the last record drawn.
    pub end_index: RecordIndex,
}

impl VisibleRange {
    /// Debug builds assert `start_index <= end_index`.
    pub fn new(start_index: RecordIndex, end_index: RecordIndex) -> Self {
        debug_assert!(
            start_index <= end_index,
            "VisibleRange start {:?} > end {:?}",
            start_index,
            end_index
        );
        Self {
            start_index,
            end_index,
        }
    }

    /// Rows drawn.
    pub fn len(&self) -> usize {
        self.end_index.get().saturating_sub(self.start_index.get())
    }

    /// No rows drawn.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the record at `index` is one of the rows drawn.
    pub fn contains(&self, index: RecordIndex) -> bool {
        self.start_index <= index && index < self.end_index
    }

    /// Same range with both ends clamped to `total`.
    pub fn clamped(&self, total: usize) -> Self {
        let end = self.end_index.get().min(total);
        let start = self.start_index.get().min(end);
        Self::new(RecordIndex::new(start), RecordIndex::new(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: usize, end: usize) -> VisibleRange {
        VisibleRange::new(RecordIndex::new(start), RecordIndex::new(end))
    }

    mod construction {
        use super::*;

        #[test]
        fn equal_ends_make_an_empty_range() {
            let r = range(5, 5);
            assert!(r.is_empty());
            assert_eq!(r.len(), 0);
        }

        #[test]
        #[should_panic]
        #[cfg(debug_assertions)]
        fn new_panics_when_start_greater_than_end() {
            range(10, 5);
        }

        #[test]
        fn default_is_empty_at_the_first_record() {
            let r = VisibleRange::default();
            assert_eq!(r.start_index.get(), 0);
            assert!(r.is_empty());
        }
    }

    #[test]
    fn len_counts_rows_between_ends() {
        assert_eq!(range(5, 10).len(), 5);
        assert!(!range(5, 10).is_empty());
    }

    #[test]
    fn contains_includes_start_and_excludes_end() {
        let r = range(5, 10);
        assert!(r.contains(RecordIndex::new(5)));
        assert!(r.contains(RecordIndex::new(9)));
        assert!(!r.contains(RecordIndex::new(10)));
        assert!(!r.contains(RecordIndex::new(4)));
        assert!(!range(3, 3).contains(RecordIndex::new(3)));
    }

    mod clamping {
        use super::*;

        #[test]
        fn clamped_shrinks_to_total() {
            assert_eq!(range(5, 10).clamped(7), range(5, 7));
        }

        #[test]
        fn clamped_past_total_is_empty_at_total() {
            assert_eq!(range(8, 10).clamped(3), range(3, 3));
        }
    }
}
