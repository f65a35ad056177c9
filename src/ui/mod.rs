//! Immediate-mode drawing boundary.
//!
//! The overlay never draws pixels itself. Each frame it walks its state and
//! issues calls against a [`DebugUi`]; the implementation decides layout,
//! input and output. [`RecordingUi`] captures the calls as [`DrawCommand`]s
//! and replays scripted input, the terminal shell renders them with ratatui.
//!
//! Pairing rules follow the usual immediate-mode conventions:
//! - `end_window` is called after every `begin_window`, whatever it returned.
//! - `end_menu`, `end_main_menu_bar` and `end_table` are called only when
//!   the matching `begin_*` succeeded.

mod recorder;

pub use recorder::{DrawCommand, RecordingUi, DEFAULT_VIEWPORT_ROWS};

use crate::model::{ScreenRect, TextureId};
use crate::view_state::ScaledSize;

/// 2D size or position in UI units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vec2 {
    /// Vector from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Draw color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, 255 is opaque.
    pub a: u8,
}

impl Rgba {
    /// Default text.
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// Dimmed text.
    pub const GRAY: Self = Self::opaque(128, 128, 128);
    /// Errors.
    pub const RED: Self = Self::opaque(255, 64, 64);
    /// Warnings and the selection outline.
    pub const YELLOW: Self = Self::opaque(255, 255, 0);
    /// Informational records.
    pub const GREEN: Self = Self::opaque(64, 220, 64);
    /// Accent.
    pub const CYAN: Self = Self::opaque(0, 200, 255);
    /// Records with an unknown severity.
    pub const MAGENTA: Self = Self::opaque(255, 0, 255);

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Scroll state of a table body, as reported by the framework.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Scroll offset from the top of the content, in UI units.
    pub scroll_y: f32,
    /// Height of the visible part of the body, in UI units.
    pub viewport_height: f32,
}

/// Interaction result for a single item this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemResponse {
    /// Activated this frame.
    pub clicked: bool,
    /// Under the pointer this frame.
    pub hovered: bool,
}

/// One cell of a table row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableCell<'a> {
    /// Cell contents.
    pub text: &'a str,
    /// Text color, `None` for the default.
    pub color: Option<Rgba>,
}

impl<'a> TableCell<'a> {
    /// Cell in the default color.
    pub fn plain(text: &'a str) -> Self {
        Self { text, color: None }
    }

    /// Cell drawn in `color`.
    pub fn colored(text: &'a str, color: Rgba) -> Self {
        Self {
            text,
            color: Some(color),
        }
    }
}

/// The immediate-mode drawing API the overlay renders against.
pub trait DebugUi {
    /// Start the main menu bar. Returns `false` if it is not shown.
    fn begin_main_menu_bar(&mut self) -> bool;
    /// Close a menu bar opened by `begin_main_menu_bar`.
    fn end_main_menu_bar(&mut self);

    /// Start a drop-down menu. Returns `true` while the menu is open.
    fn begin_menu(&mut self, label: &str) -> bool;
    /// Close a menu opened by `begin_menu`.
    fn end_menu(&mut self);

    /// Checkable menu item bound to `value`. Flips it and returns `true` when activated.
    fn menu_item_toggle(&mut self, label: &str, value: &mut bool) -> bool;

    /// Start a closable window. `open` is cleared when the user closes it.
    /// Returns `false` when the window is collapsed or clipped.
    fn begin_window(&mut self, title: &str, open: &mut bool, default_size: Vec2) -> bool;
    /// Close the current window.
    fn end_window(&mut self);

    /// Collapsible section header. Returns `true` while expanded.
    fn collapsing_header(&mut self, label: &str) -> bool;
    /// Line of text in the default color.
    fn text(&mut self, text: &str);
    /// Line of text drawn in `color`.
    fn colored_text(&mut self, color: Rgba, text: &str);
    /// Horizontal rule.
    fn separator(&mut self);
    /// Place the next item on the same line as the previous one.
    fn same_line(&mut self);
    /// Returns `true` when clicked this frame.
    fn button(&mut self, label: &str) -> bool;

    /// Height of one table row, in UI units.
    fn row_height(&self) -> f32;

    /// Start a scrollable table with a frozen header row.
    ///
    /// Returns the body's current scroll metrics, or `None` if the table is
    /// not visible.
    fn begin_table(&mut self, id: &str, headers: &[&str]) -> Option<ScrollMetrics>;
    /// Empty space standing in for rows that are not drawn.
    fn table_spacer(&mut self, height: f32);
    /// One body row.
    fn table_row(&mut self, cells: &[TableCell<'_>]);
    /// Pin the table's scroll position to the bottom of its content.
    fn scroll_to_bottom(&mut self);
    /// Close a table opened by `begin_table`.
    fn end_table(&mut self);

    /// Clickable image with a small text label over it.
    fn image_button(
        &mut self,
        id: &str,
        texture: TextureId,
        size: ScaledSize,
        label: &str,
    ) -> ItemResponse;
    /// Inline image.
    fn image(&mut self, texture: TextureId, size: ScaledSize);
    /// Image in a tooltip next to the cursor, for this frame only.
    fn tooltip_image(&mut self, texture: TextureId, size: ScaledSize);

    /// Unclipped rectangle outline in host screen coordinates, drawn above everything.
    fn foreground_rect(&mut self, rect: ScreenRect, color: Rgba, thickness: f32);
}
