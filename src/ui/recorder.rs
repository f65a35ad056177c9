//! Recording implementation of [`DebugUi`].
//!
//! Captures every call as a [`DrawCommand`] and answers interaction queries
//! from scripted input. Item ids used for scripted clicks:
//! - menu item: its label
//! - window close box: `"{title}#close"`
//! - collapsing header: `"{label}#header"` (a click toggles it)
//! - button: its label
//! - image button: the id passed by the caller

use super::{DebugUi, ItemResponse, Rgba, ScrollMetrics, TableCell, Vec2};
use crate::model::{ScreenRect, TextureId};
use crate::view_state::ScaledSize;
use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;

/// Visible body rows of a table with no scripted viewport.
pub const DEFAULT_VIEWPORT_ROWS: f32 = 10.0;

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Start of the main menu bar.
    BeginMenuBar,
    /// End of the main menu bar.
    EndMenuBar,
    /// Start of a drop-down menu.
    BeginMenu {
        /// Menu title.
        label: String,
    },
    /// End of a drop-down menu.
    EndMenu,
    /// Checkable menu entry.
    MenuItem {
        /// Entry label, also its click id.
        label: String,
        /// Check mark state when drawn.
        checked: bool,
    },
    /// Start of a closable window.
    BeginWindow {
        /// Window title.
        title: String,
        /// Size used the first time the window appears.
        default_size: Vec2,
    },
    /// End of a window.
    EndWindow,
    /// Collapsing header.
    Header {
        /// Header label.
        label: String,
        /// Whether its body is drawn.
        open: bool,
    },
    /// Line of text.
    Text {
        /// Text drawn.
        text: String,
        /// Color, `None` for the default.
        color: Option<Rgba>,
    },
    /// Horizontal separator.
    Separator,
    /// Next item stays on the current line.
    SameLine,
    /// Push button.
    Button {
        /// Button label, also its click id.
        label: String,
    },
    /// Start of a scrollable table.
    BeginTable {
        /// Table id.
        id: String,
        /// Column headers.
        headers: Vec<String>,
        /// Scroll state at the time of drawing.
        metrics: ScrollMetrics,
    },
    /// Empty space standing in for rows that were not drawn.
    Spacer {
        /// Height of the skipped rows.
        height: f32,
    },
    /// One table row.
    Row {
        /// Cell text with an optional color.
        cells: Vec<(String, Option<Rgba>)>,
    },
    /// Request to scroll the current table to its end.
    ScrollToBottom,
    /// End of a table.
    EndTable,
    /// Clickable image.
    ImageButton {
        /// Click id.
        id: String,
        /// Texture drawn.
        texture: TextureId,
        /// Drawn size.
        size: ScaledSize,
        /// Caption under the image.
        label: String,
    },
    /// Inline image.
    Image {
        /// Texture drawn.
        texture: TextureId,
        /// Drawn size.
        size: ScaledSize,
    },
    /// Image in a tooltip next to the pointer.
    TooltipImage {
        /// Texture drawn.
        texture: TextureId,
        /// Drawn size.
        size: ScaledSize,
    },
    /// Rectangle outline over the host surface.
    ForegroundRect {
        /// Outlined area in host pixels.
        rect: ScreenRect,
        /// Outline color.
        color: Rgba,
        /// Line thickness.
        thickness: f32,
    },
}

/// [`DebugUi`] that records commands and replays scripted input.
#[derive(Debug, Clone)]
pub struct RecordingUi {
    commands: Vec<DrawCommand>,
    row_height: f32,
    clicks: HashSet<String>,
    hovered: Option<String>,
    collapsed: HashSet<String>,
    table_metrics: HashMap<String, ScrollMetrics>,
    current_table: Option<String>,
    scroll_requests: Vec<String>,
}

impl Default for RecordingUi {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl RecordingUi {
    /// Recorder whose table rows are `row_height` units tall.
    pub fn new(row_height: f32) -> Self {
        Self {
            commands: Vec::new(),
            row_height,
            clicks: HashSet::new(),
            hovered: None,
            collapsed: HashSet::new(),
            table_metrics: HashMap::new(),
            current_table: None,
            scroll_requests: Vec::new(),
        }
    }

    /// Click item `id` the next time it is drawn.
    pub fn click(&mut self, id: impl Into<String>) {
        self.clicks.insert(id.into());
    }

    /// Forget clicks on items that were not drawn.
    pub fn discard_clicks(&mut self) {
        self.clicks.clear();
    }

    /// Keep the pointer over item `id` until changed.
    pub fn hover(&mut self, id: Option<String>) {
        self.hovered = id;
    }

    /// Scroll metrics reported for table `id`.
    pub fn set_table_metrics(&mut self, id: impl Into<String>, metrics: ScrollMetrics) {
        self.table_metrics.insert(id.into(), metrics);
    }

    /// Start a section header collapsed.
    pub fn collapse(&mut self, label: impl Into<String>) {
        self.collapsed.insert(label.into());
    }

    /// Commands recorded since the last [`take_commands`](Self::take_commands).
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop the recorded frame, keeping scripted state such as hover and viewports.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.scroll_requests.clear();
        std::mem::take(&mut self.commands)
    }

    /// Tables that asked to be pinned to the bottom this frame.
    pub fn scroll_requests(&self) -> &[String] {
        &self.scroll_requests
    }

    /// Ids of every image button drawn, in order.
    pub fn image_button_ids(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::ImageButton { id, .. } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Cell texts of every table row drawn, in order.
    pub fn rows(&self) -> Vec<Vec<&str>> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Row { cells } => {
                    Some(cells.iter().map(|(text, _)| text.as_str()).collect())
                }
                _ => None,
            })
            .collect()
    }

    /// Plain and colored texts drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded commands matching `pred`.
    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    fn take_click(&mut self, id: &str) -> bool {
        self.clicks.remove(id)
    }

    fn is_hovered(&self, id: &str) -> bool {
        self.hovered.as_deref() == Some(id)
    }

    /// Indented text dump of the recorded frame.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let mut depth = 0usize;
        for command in &self.commands {
            if matches!(
                command,
                DrawCommand::EndMenuBar
                    | DrawCommand::EndMenu
                    | DrawCommand::EndWindow
                    | DrawCommand::EndTable
            ) {
                depth = depth.saturating_sub(1);
                continue;
            }
            let line = describe_command(command);
            let _ = writeln!(out, "{:indent$}{line}", "", indent = depth * 2);
            if matches!(
                command,
                DrawCommand::BeginMenuBar
                    | DrawCommand::BeginMenu { .. }
                    | DrawCommand::BeginWindow { .. }
                    | DrawCommand::BeginTable { .. }
            ) {
                depth += 1;
            }
        }
        out
    }
}

fn describe_color(color: Rgba) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

fn describe_command(command: &DrawCommand) -> String {
    match command {
        DrawCommand::BeginMenuBar => "menu-bar".to_string(),
        DrawCommand::BeginMenu { label } => format!("menu {label}"),
        DrawCommand::MenuItem { label, checked } => {
            format!("[{}] {label}", if *checked { "x" } else { " " })
        }
        DrawCommand::BeginWindow { title, .. } => format!("window {title}"),
        DrawCommand::Header { label, open } => {
            format!("header {label} ({})", if *open { "open" } else { "closed" })
        }
        DrawCommand::Text { text, color: None } => format!("text {text:?}"),
        DrawCommand::Text {
            text,
            color: Some(color),
        } => format!("text {text:?} {}", describe_color(*color)),
        DrawCommand::Separator => "separator".to_string(),
        DrawCommand::SameLine => "same-line".to_string(),
        DrawCommand::Button { label } => format!("button {label:?}"),
        DrawCommand::BeginTable {
            id,
            headers,
            metrics,
        } => format!(
            "table {id} [{}] scroll={} viewport={}",
            headers.join(" | "),
            metrics.scroll_y,
            metrics.viewport_height
        ),
        DrawCommand::Spacer { height } => format!("spacer {height}"),
        DrawCommand::Row { cells } => format!(
            "row {}",
            cells
                .iter()
                .map(|(text, _)| text.as_str())
                .collect::<Vec<_>>()
                .join(" | ")
        ),
        DrawCommand::ScrollToBottom => "scroll-to-bottom".to_string(),
        DrawCommand::ImageButton {
            id,
            texture,
            size,
            label,
        } => format!(
            "image-button {id} tex={} {}x{} {label:?}",
            texture.get(),
            size.width,
            size.height
        ),
        DrawCommand::Image { texture, size } => {
            format!("image tex={} {}x{}", texture.get(), size.width, size.height)
        }
        DrawCommand::TooltipImage { texture, size } => format!(
            "tooltip tex={} {}x{}",
            texture.get(),
            size.width,
            size.height
        ),
        DrawCommand::ForegroundRect {
            rect,
            color,
            thickness,
        } => format!(
            "rect {},{} {}x{} {} x{thickness}",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            describe_color(*color)
        ),
        DrawCommand::EndMenuBar
        | DrawCommand::EndMenu
        | DrawCommand::EndWindow
        | DrawCommand::EndTable => String::new(),
    }
}

impl DebugUi for RecordingUi {
    fn begin_main_menu_bar(&mut self) -> bool {
        self.commands.push(DrawCommand::BeginMenuBar);
        true
    }

    fn end_main_menu_bar(&mut self) {
        self.commands.push(DrawCommand::EndMenuBar);
    }

    fn begin_menu(&mut self, label: &str) -> bool {
        self.commands.push(DrawCommand::BeginMenu {
            label: label.to_string(),
        });
        true
    }

    fn end_menu(&mut self) {
        self.commands.push(DrawCommand::EndMenu);
    }

    fn menu_item_toggle(&mut self, label: &str, value: &mut bool) -> bool {
        let activated = self.take_click(label);
        if activated {
            *value = !*value;
        }
        self.commands.push(DrawCommand::MenuItem {
            label: label.to_string(),
            checked: *value,
        });
        activated
    }

    /// A window closed through its close box reports `false` for that frame.
    fn begin_window(&mut self, title: &str, open: &mut bool, default_size: Vec2) -> bool {
        self.commands.push(DrawCommand::BeginWindow {
            title: title.to_string(),
            default_size,
        });
        if self.take_click(&format!("{title}#close")) {
            *open = false;
        }
        *open
    }

    fn end_window(&mut self) {
        self.commands.push(DrawCommand::EndWindow);
    }

    fn collapsing_header(&mut self, label: &str) -> bool {
        if self.take_click(&format!("{label}#header")) && !self.collapsed.remove(label) {
            self.collapsed.insert(label.to_string());
        }
        let open = !self.collapsed.contains(label);
        self.commands.push(DrawCommand::Header {
            label: label.to_string(),
            open,
        });
        open
    }

    fn text(&mut self, text: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            color: None,
        });
    }

    fn colored_text(&mut self, color: Rgba, text: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            color: Some(color),
        });
    }

    fn separator(&mut self) {
        self.commands.push(DrawCommand::Separator);
    }

    fn same_line(&mut self) {
        self.commands.push(DrawCommand::SameLine);
    }

    fn button(&mut self, label: &str) -> bool {
        self.commands.push(DrawCommand::Button {
            label: label.to_string(),
        });
        self.take_click(label)
    }

    fn row_height(&self) -> f32 {
        self.row_height
    }

    fn begin_table(&mut self, id: &str, headers: &[&str]) -> Option<ScrollMetrics> {
        let metrics = self
            .table_metrics
            .get(id)
            .copied()
            .unwrap_or(ScrollMetrics {
                scroll_y: 0.0,
                viewport_height: DEFAULT_VIEWPORT_ROWS * self.row_height,
            });
        self.current_table = Some(id.to_string());
        self.commands.push(DrawCommand::BeginTable {
            id: id.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            metrics,
        });
        Some(metrics)
    }

    fn table_spacer(&mut self, height: f32) {
        self.commands.push(DrawCommand::Spacer { height });
    }

    fn table_row(&mut self, cells: &[TableCell<'_>]) {
        self.commands.push(DrawCommand::Row {
            cells: cells
                .iter()
                .map(|cell| (cell.text.to_string(), cell.color))
                .collect(),
        });
    }

    fn scroll_to_bottom(&mut self) {
        if let Some(id) = self.current_table.clone() {
            self.scroll_requests.push(id);
        }
        self.commands.push(DrawCommand::ScrollToBottom);
    }

    fn end_table(&mut self) {
        self.current_table = None;
        self.commands.push(DrawCommand::EndTable);
    }

    fn image_button(
        &mut self,
        id: &str,
        texture: TextureId,
        size: ScaledSize,
        label: &str,
    ) -> ItemResponse {
        self.commands.push(DrawCommand::ImageButton {
            id: id.to_string(),
            texture,
            size,
            label: label.to_string(),
        });
        ItemResponse {
            clicked: self.take_click(id),
            hovered: self.is_hovered(id),
        }
    }

    fn image(&mut self, texture: TextureId, size: ScaledSize) {
        self.commands.push(DrawCommand::Image { texture, size });
    }

    fn tooltip_image(&mut self, texture: TextureId, size: ScaledSize) {
        self.commands
            .push(DrawCommand::TooltipImage { texture, size });
    }

    fn foreground_rect(&mut self, rect: ScreenRect, color: Rgba, thickness: f32) {
        self.commands.push(DrawCommand::ForegroundRect {
            rect,
            color,
            thickness,
        });
    }
}
