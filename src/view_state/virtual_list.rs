//! Virtualized list range computation.
//!
//! Given the scroll viewport reported by the drawing framework, decide which
//! rows of a fixed-row-height list need to be drawn. Cost is bounded by the
//! viewport, never by the number of rows.

use super::types::RecordIndex;
use super::visible_range::VisibleRange;

/// Row height used when the framework reports a non-positive or non-finite one.
pub const FALLBACK_ROW_HEIGHT: f32 = 1.0;

fn row_height_or_fallback(row_height: f32) -> f64 {
    if row_height.is_finite() && row_height > 0.0 {
        f64::from(row_height)
    } else {
        f64::from(FALLBACK_ROW_HEIGHT)
    }
}

fn non_negative(value: f32) -> f64 {
    if value.is_finite() && value > 0.0 {
        f64::from(value)
    } else {
        0.0
    }
}

/// Number of whole rows that fit in the viewport.
pub fn viewport_capacity(row_height: f32, viewport_height: f32) -> usize {
    (non_negative(viewport_height) / row_height_or_fallback(row_height)).floor() as usize
}

/// Rows to draw for a list of `total` rows.
///
/// The scroll offset is clamped to the content first, so the range covers at
/// least `min(total, viewport_capacity)` rows. With `auto_scroll`, the last
/// row is always included regardless of the scroll offset: a page that does
/// not reach the end is moved down to end at the last row.
pub fn visible_range(
    total: usize,
    row_height: f32,
    scroll_y: f32,
    viewport_height: f32,
    auto_scroll: bool,
) -> VisibleRange {
    if total == 0 {
        return VisibleRange::default();
    }

    let row = row_height_or_fallback(row_height);
    let viewport = non_negative(viewport_height);
    let max_scroll = (total as f64 * row - viewport).max(0.0);
    let scroll = non_negative(scroll_y).min(max_scroll);

    let start = ((scroll / row).floor() as usize).min(total);
    let end = (((scroll + viewport) / row).ceil() as usize)
        .min(total)
        .max(start);

    if auto_scroll && end < total {
        // Keep the page size, move it to the end of the list.
        let len = (end - start).max(1);
        return VisibleRange::new(RecordIndex::new(total - len), RecordIndex::new(total));
    }
    if auto_scroll && start == end {
        return VisibleRange::new(RecordIndex::new(total - 1), RecordIndex::new(total));
    }

    VisibleRange::new(RecordIndex::new(start), RecordIndex::new(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(range: VisibleRange) -> (usize, usize) {
        (range.start_index.get(), range.end_index.get())
    }

    #[test]
    fn empty_list_has_empty_range() {
        let range = visible_range(0, 20.0, 0.0, 200.0, false);
        assert!(range.is_empty());
        let range = visible_range(0, 20.0, 0.0, 200.0, true);
        assert!(range.is_empty());
    }

    #[test]
    fn top_of_list_shows_first_page() {
        let range = visible_range(1000, 20.0, 0.0, 200.0, false);
        assert_eq!(bounds(range), (0, 10));
    }

    #[test]
    fn partial_rows_are_included() {
        // 210px of viewport at 20px rows: row 10 is half visible.
        let range = visible_range(1000, 20.0, 0.0, 210.0, false);
        assert_eq!(bounds(range), (0, 11));
        // Scrolled by half a row: rows 0 and 10 are both partially visible.
        let range = visible_range(1000, 20.0, 10.0, 200.0, false);
        assert_eq!(bounds(range), (0, 11));
    }

    #[test]
    fn middle_of_list() {
        assert_eq!(
            bounds(visible_range(1000, 20.0, 4000.0, 200.0, false)),
            (200, 210)
        );
    }

    #[test]
    fn short_list_shows_everything() {
        assert_eq!(bounds(visible_range(3, 20.0, 0.0, 200.0, false)), (0, 3));
    }

    #[test]
    fn scroll_past_end_is_clamped() {
        assert_eq!(
            bounds(visible_range(100, 20.0, 1.0e9, 200.0, false)),
            (90, 100)
        );
    }

    #[test]
    fn negative_or_nan_scroll_is_treated_as_zero() {
        let range = visible_range(100, 20.0, -50.0, 200.0, false);
        assert_eq!(bounds(range), (0, 10));
        let range = visible_range(100, 20.0, f32::NAN, 200.0, false);
        assert_eq!(bounds(range), (0, 10));
    }

    #[test]
    fn bad_row_height_falls_back() {
        assert_eq!(bounds(visible_range(100, 0.0, 0.0, 5.0, false)), (0, 5));
        let range = visible_range(100, f32::INFINITY, 0.0, 5.0, false);
        assert_eq!(bounds(range), (0, 5));
    }

    #[test]
    fn auto_scroll_includes_last_row_even_when_scrolled_to_top() {
        let range = visible_range(1000, 20.0, 0.0, 200.0, true);
        assert_eq!(bounds(range), (990, 1000));
        assert!(range.contains(RecordIndex::new(999)));
    }

    #[test]
    fn auto_scroll_at_bottom_matches_naive_range() {
        let range = visible_range(1000, 20.0, 19_800.0, 200.0, true);
        assert_eq!(bounds(range), (990, 1000));
    }

    #[test]
    fn auto_scroll_with_zero_viewport_still_shows_last_row() {
        let range = visible_range(5, 20.0, 0.0, 0.0, true);
        assert_eq!(bounds(range), (4, 5));
    }

    #[test]
    fn capacity_counts_whole_rows() {
        assert_eq!(viewport_capacity(20.0, 200.0), 10);
        assert_eq!(viewport_capacity(20.0, 219.0), 10);
        assert_eq!(viewport_capacity(20.0, -1.0), 0);
    }
}
