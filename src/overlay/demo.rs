//! "UI demo" window: a tour of the drawing primitives the overlay relies on.

use super::console::severity_color;
use crate::model::Severity;
use crate::ui::{DebugUi, TableCell};

/// Label and click id of the counter button.
pub const DEMO_BUTTON_LABEL: &str = "Click me";

/// Interactive state of the demo window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoState {
    /// Counter button presses since the overlay was created.
    pub clicks: u32,
}

/// Draw the demo contents. The caller owns the window scope.
pub fn render_demo<U>(ui: &mut U, state: &mut DemoState)
where
    U: DebugUi + ?Sized,
{
    if ui.collapsing_header("Widgets") {
        if ui.button(DEMO_BUTTON_LABEL) {
            state.clicks = state.clicks.saturating_add(1);
        }
        ui.same_line();
        ui.text(&format!("clicked {} times", state.clicks));
    }

    if ui.collapsing_header("Colors") {
        for severity in [
            Severity::Fatal,
            Severity::Error,
            Severity::Warning,
            Severity::Info,
            Severity::Invalid,
        ] {
            ui.colored_text(severity_color(severity), severity.label());
        }
    }

    if ui.collapsing_header("Table") {
        if ui.begin_table("demo-table", &["Key", "Value"]).is_some() {
            let row_height = ui.row_height().to_string();
            ui.table_row(&[
                TableCell::plain("row height"),
                TableCell::plain(&row_height),
            ]);
            ui.table_row(&[TableCell::plain("frame"), TableCell::plain("immediate")]);
            ui.end_table();
        }
    }
}
