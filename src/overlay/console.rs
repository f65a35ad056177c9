//! Virtualized log console.

use crate::model::Severity;
use crate::state::LogStore;
use crate::ui::{DebugUi, Rgba, TableCell};
use crate::view_state::{visible_range, VisibleRange};

/// Table id of the console body.
pub const CONSOLE_TABLE_ID: &str = "console";
/// Column headers of the console table.
pub const CONSOLE_HEADERS: [&str; 3] = ["Severity", "Source", "Message"];

/// What one console render drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleReport {
    /// Store length when the frame was taken.
    pub total: usize,
    /// Indices of the rows that were drawn.
    pub range: VisibleRange,
}

impl ConsoleReport {
    /// Rows drawn this frame.
    pub fn rows_drawn(&self) -> usize {
        self.range.len()
    }
}

/// Label color for a severity.
pub fn severity_color(severity: Severity) -> Rgba {
    match severity {
        Severity::Fatal => Rgba::MAGENTA,
        Severity::Error => Rgba::RED,
        Severity::Warning => Rgba::YELLOW,
        Severity::Info => Rgba::CYAN,
        Severity::Off | Severity::Invalid => Rgba::GRAY,
    }
}

/// Draw the rows of `store` that fall in the table's viewport.
///
/// Only the visible slice is copied out of the store and drawn; the rest of
/// the content height is covered by spacers. With `auto_scroll` the newest
/// record is always drawn and the table is pinned to the bottom.
pub fn render_console<U>(ui: &mut U, store: &LogStore, auto_scroll: bool) -> ConsoleReport
where
    U: DebugUi + ?Sized,
{
    let Some(metrics) = ui.begin_table(CONSOLE_TABLE_ID, &CONSOLE_HEADERS) else {
        return ConsoleReport::default();
    };
    let row_height = ui.row_height();

    let slice = store.snapshot_visible(|total| {
        visible_range(
            total,
            row_height,
            metrics.scroll_y,
            metrics.viewport_height,
            auto_scroll,
        )
    });

    let above = slice.range.start_index.get();
    let below = slice.total - slice.range.end_index.get();
    if above > 0 {
        ui.table_spacer(above as f32 * row_height);
    }
    for record in &slice.records {
        let message = if record.prefix().is_empty() {
            record.message().to_string()
        } else {
            format!("{} {}", record.prefix(), record.message())
        };
        let severity = record.severity();
        ui.table_row(&[
            TableCell::colored(severity.label(), severity_color(severity)),
            TableCell::plain(record.source()),
            TableCell::plain(&message),
        ]);
    }
    if below > 0 {
        ui.table_spacer(below as f32 * row_height);
    }

    if auto_scroll {
        ui.scroll_to_bottom();
    }
    ui.end_table();

    ConsoleReport {
        total: slice.total,
        range: slice.range,
    }
}
