//! Thumbnail gallery over the host's sprite pools.

use crate::host::{SpriteHandle, SpritePool};
use crate::state::SelectionState;
use crate::ui::DebugUi;
use crate::view_state::{fit_to_target, full_size};

/// Gallery rendering options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryOptions {
    /// Longest side of a thumbnail.
    pub thumbnail_size: f32,
    /// Show a full-size tooltip while a thumbnail is hovered.
    pub hover_preview: bool,
}

/// What one gallery render drew and which thumbnail, if any, was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryReport {
    /// Thumbnails drawn across all pools.
    pub thumbnails: usize,
    /// Thumbnail clicked this frame.
    pub clicked: Option<SpriteHandle>,
    /// Thumbnail whose tooltip preview was shown.
    pub previewed: Option<SpriteHandle>,
}

/// Header text of a pool section.
pub fn pool_header(pool: &SpritePool) -> String {
    format!("{} ({})", pool.name(), pool.capacity())
}

/// Item id of a thumbnail: `"{pool}#{slot}@{generation}"`.
///
/// The generation makes the id change when the host reloads the slot, so a
/// click queued against the old record never lands on its replacement.
pub fn thumbnail_id(pool: &SpritePool, handle: SpriteHandle) -> String {
    format!("{}#{}@{}", pool.name(), handle.index(), handle.generation())
}

/// Draw one thumbnail per renderable sprite, pool by pool.
///
/// Slots that are empty, have no texture or have a zero-sized image are
/// skipped. Clicking a thumbnail replaces the selection; hovering only shows
/// a preview.
pub fn render_gallery<U>(
    ui: &mut U,
    pools: &[SpritePool],
    selection: &mut SelectionState,
    options: GalleryOptions,
) -> GalleryReport
where
    U: DebugUi + ?Sized,
{
    let mut report = GalleryReport::default();

    for pool in pools {
        if !ui.collapsing_header(&pool_header(pool)) {
            continue;
        }

        let mut first_in_pool = true;
        for (index, sprite) in pool.occupied() {
            let Some(texture) = sprite.renderable_texture() else {
                continue;
            };
            let (Some(size), Some(handle)) = (
                fit_to_target(sprite.pixel_size, options.thumbnail_size),
                pool.handle(index),
            ) else {
                continue;
            };

            if !first_in_pool {
                ui.same_line();
            }
            first_in_pool = false;

            let id = thumbnail_id(pool, handle);
            let response = ui.image_button(&id, texture, size, &index.to_string());
            report.thumbnails += 1;

            if response.clicked {
                selection.select(handle);
                report.clicked = Some(handle);
            }
            if response.hovered && options.hover_preview {
                if let Some(preview) = full_size(sprite.pixel_size) {
                    ui.tooltip_image(texture, preview);
                    report.previewed = Some(handle);
                }
            }
        }
    }

    report
}
