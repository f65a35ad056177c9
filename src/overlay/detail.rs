//! Read-only detail panel and on-screen highlight for the selected sprite.

use crate::model::SpriteRecord;
use crate::ui::{DebugUi, Rgba};
use crate::view_state::fit_to_target;

/// Label and click id of the button that drops the selection.
pub const CLEAR_SELECTION_LABEL: &str = "Clear selection";
/// Outline color of the selected sprite.
pub const HIGHLIGHT_COLOR: Rgba = Rgba::YELLOW;
/// Outline thickness, in host pixels.
pub const HIGHLIGHT_THICKNESS: f32 = 2.0;

/// Result of drawing the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetailResponse {
    /// A live selection was shown.
    pub rendered: bool,
    /// "Clear selection" was clicked.
    pub clear_requested: bool,
}

/// The text lines of the detail panel, in display order.
pub fn detail_lines(sprite: &SpriteRecord) -> Vec<String> {
    let rect = sprite.screen_rect;
    let color = sprite.color;
    let mut lines = vec![
        format!("Name: {}", sprite.name),
        format!("File: {}", sprite.file_name),
    ];
    if let Some(mask) = &sprite.mask_file_name {
        lines.push(format!("Mask: {mask}"));
    }
    lines.extend([
        format!("Size: {}", sprite.pixel_size),
        format!(
            "Position: ({}, {}) {}x{}",
            rect.x, rect.y, rect.width, rect.height
        ),
        format!("Blend: {}", sprite.blend_mode.label()),
        format!("Color: R {} G {} B {}", color.r, color.g, color.b),
        format!("Direction: {}", sprite.direction),
        format!("Visible: {}", sprite.visible),
    ]);
    lines
}

/// Draw the selected sprite's attributes and an enlarged preview.
///
/// Draws nothing without a selection. A sprite whose texture is not loaded
/// still gets its attributes, just no preview.
pub fn render_detail<U>(
    ui: &mut U,
    selected: Option<&SpriteRecord>,
    preview_size: f32,
) -> DetailResponse
where
    U: DebugUi + ?Sized,
{
    let Some(sprite) = selected else {
        return DetailResponse::default();
    };

    ui.separator();
    for line in detail_lines(sprite) {
        ui.text(&line);
    }
    if let Some(texture) = sprite.renderable_texture() {
        if let Some(size) = fit_to_target(sprite.pixel_size, preview_size) {
            ui.image(texture, size);
        }
    }
    let clear_requested = ui.button(CLEAR_SELECTION_LABEL);

    DetailResponse {
        rendered: true,
        clear_requested,
    }
}

/// Outline the selected sprite's screen rectangle. Returns whether anything was drawn.
pub fn render_highlight<U>(ui: &mut U, selected: Option<&SpriteRecord>, enabled: bool) -> bool
where
    U: DebugUi + ?Sized,
{
    match selected {
        Some(sprite) if enabled => {
            ui.foreground_rect(sprite.screen_rect, HIGHLIGHT_COLOR, HIGHLIGHT_THICKNESS);
            true
        }
        _ => false,
    }
}
