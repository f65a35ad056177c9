//! Index and offset newtypes for the console list.

/// Row offset of the first line shown in a scrolled view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct LineOffset(usize);

impl LineOffset {
    /// Offset of `offset` rows from the top.
    pub fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Row count from the top.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Scroll down by `rows`, stopping at `usize::MAX`.
    pub fn saturating_add(&self, rows: usize) -> Self {
        Self(self.0.saturating_add(rows))
    }

    /// Scroll up by `rows`, stopping at the top.
    pub fn saturating_sub(&self, rows: usize) -> Self {
        Self(self.0.saturating_sub(rows))
    }
}

/// Position of a record in the log store, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RecordIndex(usize);

impl RecordIndex {
    /// Wrap a store position.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position as a plain index.
    pub fn get(&self) -> usize {
        self.0
    }
}
