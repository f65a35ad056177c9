//! Semantic scroll position

use super::types::LineOffset;

/// Semantic scroll position within a scrollable list.
///
/// A sum type that preserves scroll intent while content grows:
/// - `Top`: Always shows from row 0
/// - `Bottom`: Always shows the last rows in viewport
/// - `AtLine`: Specific absolute row offset
///
/// # Clamping Behavior
/// Positions resolve into `[0, max(0, total_height - viewport_height)]`,
/// so a viewport is never left blank past the end of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPosition {
    /// View from the very top (row 0).
    #[default]
    Top,

    /// View from the very bottom.
    /// Resolves to: total_height - viewport_height (clamped to 0).
    Bottom,

    /// Specific row offset from top.
    /// Clamped to valid range on resolution.
    AtLine(LineOffset),
}

impl ScrollPosition {
    /// Resolve to absolute row offset, clamped to the valid range.
    pub fn resolve(&self, total_height: usize, viewport_height: usize) -> LineOffset {
        let max_offset = total_height.saturating_sub(viewport_height);
        match self {
            Self::Top => LineOffset::new(0),
            Self::Bottom => LineOffset::new(max_offset),
            Self::AtLine(offset) => LineOffset::new(offset.get().min(max_offset)),
        }
    }

    /// Create AtLine position.
    pub fn at_line(offset: usize) -> Self {
        Self::AtLine(LineOffset::new(offset))
    }

    /// Move up by `amount` rows from the resolved position.
    pub fn scroll_up(&self, amount: usize, total_height: usize, viewport_height: usize) -> Self {
        let current = self.resolve(total_height, viewport_height);
        Self::AtLine(current.saturating_sub(amount))
    }

    /// Move down by `amount` rows; reaching the end snaps to `Bottom`.
    pub fn scroll_down(&self, amount: usize, total_height: usize, viewport_height: usize) -> Self {
        let max_offset = total_height.saturating_sub(viewport_height);
        let next = self
            .resolve(total_height, viewport_height)
            .saturating_add(amount);
        if next.get() >= max_offset {
            Self::Bottom
        } else {
            Self::AtLine(next)
        }
    }
}
