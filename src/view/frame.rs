//! Terminal rendering of one recorded overlay frame.
//!
//! The overlay draws into a [`RecordingUi`](crate::ui::RecordingUi); this
//! widget lays those commands out on a terminal buffer. Row 0 is the menu
//! bar, open windows share the rest of the screen top to bottom, and the
//! foreground outline is drawn last over everything. Each drawn interactive
//! item records its id in the [`HitMap`] so mouse input can be fed back into
//! the next frame.
//!
//! One table row is one terminal line, so table metrics are in rows.

use super::hit_test::HitMap;
use super::styles::{self, ColorConfig};
use crate::model::{PixelSize, ScreenRect};
use crate::ui::{DrawCommand, Rgba, ScrollMetrics};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols::border;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, StatefulWidget, Widget};
use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

/// Widest a non-final table column grows.
pub const MAX_COLUMN_WIDTH: u16 = 24;

/// Horizontal UI units per terminal column for image widgets.
pub const UNITS_PER_COLUMN: f32 = 10.0;

const CLOSE_BOX: &str = "[x]";

/// Where a table body landed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableLayout {
    /// Cells of the table body, below the header row.
    pub body: Rect,
    /// Rows of content, including spacer rows.
    pub content_rows: usize,
}

/// Layout facts produced by the last render.
#[derive(Debug, Clone, Default)]
pub struct FrameLayout {
    /// Clickable regions.
    pub hits: HitMap,
    /// Table bodies by table id.
    pub tables: HashMap<String, TableLayout>,
}

impl FrameLayout {
    /// Forget the previous frame.
    pub fn clear(&mut self) {
        self.hits.clear();
        self.tables.clear();
    }
}

/// Widget over a recorded frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    commands: &'a [DrawCommand],
    surface: PixelSize,
    colors: ColorConfig,
}

impl<'a> FrameView<'a> {
    /// `surface` is the host render surface the terminal stands in for.
    pub fn new(commands: &'a [DrawCommand], surface: PixelSize, colors: ColorConfig) -> Self {
        Self {
            commands,
            surface,
            colors,
        }
    }
}

struct Tooltip {
    anchor: Rect,
    text: String,
}

impl StatefulWidget for FrameView<'_> {
    type State = FrameLayout;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.clear();
        if area.is_empty() {
            return;
        }

        let mut menu: &[DrawCommand] = &[];
        let mut windows: Vec<(&str, &[DrawCommand])> = Vec::new();
        let mut outlines: Vec<(ScreenRect, Rgba)> = Vec::new();

        let mut i = 0;
        while i < self.commands.len() {
            match &self.commands[i] {
                DrawCommand::BeginMenuBar => {
                    let end = scope_end(self.commands, i, |c| matches!(c, DrawCommand::EndMenuBar));
                    menu = &self.commands[i + 1..end];
                    i = end;
                }
                DrawCommand::BeginWindow { title, .. } => {
                    let end = scope_end(self.commands, i, |c| matches!(c, DrawCommand::EndWindow));
                    windows.push((title.as_str(), &self.commands[i + 1..end]));
                    i = end;
                }
                DrawCommand::ForegroundRect { rect, color, .. } => {
                    outlines.push((*rect, *color));
                }
                _ => {}
            }
            i += 1;
        }

        let menu_row = Rect { height: 1, ..area };
        self.render_menu(menu, menu_row, buf, &mut state.hits);

        let desktop = Rect {
            y: area.y + 1,
            height: area.height - 1,
            ..area
        };
        let mut tooltips = Vec::new();
        if !windows.is_empty() && !desktop.is_empty() {
            let count = windows.len() as u32;
            let slots = Layout::vertical(vec![Constraint::Ratio(1, count); windows.len()])
                .split(desktop);
            for ((title, body), slot) in windows.into_iter().zip(slots.iter()) {
                self.render_window(title, body, *slot, buf, state, &mut tooltips);
            }
        }

        for tooltip in tooltips {
            render_tooltip(&tooltip, area, buf);
        }

        for (rect, color) in outlines {
            if let Some(cells) = surface_to_cells(rect, self.surface, area) {
                Block::bordered()
                    .border_set(border::THICK)
                    .border_style(self.colors.outline(color))
                    .render(cells, buf);
            }
        }
    }
}

/// Index of the command closing the scope opened at `start`, or the end of the list.
fn scope_end(commands: &[DrawCommand], start: usize, is_end: impl Fn(&DrawCommand) -> bool) -> usize {
    commands[start..]
        .iter()
        .position(is_end)
        .map_or(commands.len(), |offset| start + offset)
}

impl FrameView<'_> {
    fn render_menu(&self, items: &[DrawCommand], row: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        buf.set_style(row, styles::menu_style());
        let mut x = row.x;
        for command in items {
            let (text, id) = match command {
                DrawCommand::BeginMenu { label } => (format!(" {label}:"), None),
                DrawCommand::MenuItem { label, checked } => (
                    format!(" [{}] {label}", if *checked { "x" } else { " " }),
                    Some(label.as_str()),
                ),
                _ => continue,
            };
            let remaining = row.right().saturating_sub(x);
            if remaining == 0 {
                break;
            }
            let (end, _) = buf.set_stringn(x, row.y, &text, remaining as usize, Style::default());
            if let Some(id) = id {
                // Skip the leading space so the hit box starts at the bracket.
                hits.push(Rect::new(x + 1, row.y, end.saturating_sub(x + 1), 1), id);
            }
            x = end;
        }
    }

    fn render_window(
        &self,
        title: &str,
        body: &[DrawCommand],
        area: Rect,
        buf: &mut Buffer,
        state: &mut FrameLayout,
        tooltips: &mut Vec<Tooltip>,
    ) {
        let heading = Line::styled(format!(" {title} "), styles::title_style());
        let block = Block::bordered().title(heading);
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);

        let close_width = CLOSE_BOX.len() as u16;
        if area.width > close_width + 2 {
            let x = area.right() - close_width - 1;
            buf.set_string(x, area.y, CLOSE_BOX, Style::default());
            let close = Rect::new(x, area.y, close_width, 1);
            state.hits.push(close, format!("{title}#close"));
        }

        let mut cursor = Cursor::new(inner);
        let mut i = 0;
        while i < body.len() {
            match &body[i] {
                DrawCommand::Header { label, open } => {
                    let marker = if *open { "▼" } else { "▶" };
                    if let Some(rect) = cursor.place(inner.width) {
                        let heading = format!("{marker} {label}");
                        put(buf, rect, &heading, styles::header_style());
                        state.hits.push(rect, format!("{label}#header"));
                    }
                }
                DrawCommand::Text { text, color } => {
                    if let Some(rect) = cursor.place(text_width(text)) {
                        put(buf, rect, text, self.colors.fg(*color));
                    }
                }
                DrawCommand::Separator => {
                    if let Some(rect) = cursor.place(inner.width) {
                        let rule = "─".repeat(rect.width as usize);
                        put(buf, rect, &rule, Style::default());
                    }
                }
                DrawCommand::SameLine => cursor.same_line = true,
                DrawCommand::Button { label } => {
                    let text = format!("[ {label} ]");
                    if let Some(rect) = cursor.place(text_width(&text)) {
                        put(buf, rect, &text, styles::button_style());
                        state.hits.push(rect, label.as_str());
                    }
                }
                DrawCommand::ImageButton { id, size, label, .. } => {
                    let width = columns_for(size.width).max(text_width(label) + 2);
                    let inside = (width - 2) as usize;
                    let text = format!("[{label:^inside$}]");
                    if let Some(rect) = cursor.place(width) {
                        put(buf, rect, &text, styles::button_style());
                        state.hits.push(rect, id.as_str());
                    }
                }
                DrawCommand::Image { texture, size } => {
                    let text = format!(
                        "▣ texture #{} ({}x{})",
                        texture.get(),
                        size.width.round(),
                        size.height.round()
                    );
                    if let Some(rect) = cursor.place(text_width(&text)) {
                        put(buf, rect, &text, Style::default());
                    }
                }
                DrawCommand::TooltipImage { texture, size } => {
                    if let Some(anchor) = cursor.last {
                        tooltips.push(Tooltip {
                            anchor,
                            text: format!(
                                "texture #{} {}x{}",
                                texture.get(),
                                size.width.round(),
                                size.height.round()
                            ),
                        });
                    }
                }
                DrawCommand::BeginTable {
                    id,
                    headers,
                    metrics,
                } => {
                    let end = scope_end(body, i, |c| matches!(c, DrawCommand::EndTable));
                    let table = TableContent::collect(&body[i + 1..end]);
                    let rows = table.content_rows.saturating_add(1);
                    let wanted = u16::try_from(rows).unwrap_or(u16::MAX);
                    let rect = cursor.take_block(wanted);
                    let layout = self.render_table(headers, metrics, &table, rect, buf);
                    state.tables.insert(id.clone(), layout);
                    i = end;
                }
                _ => {}
            }
            i += 1;
        }
    }

    fn render_table(
        &self,
        headers: &[String],
        metrics: &ScrollMetrics,
        table: &TableContent<'_>,
        area: Rect,
        buf: &mut Buffer,
    ) -> TableLayout {
        let body = Rect {
            y: area.y.saturating_add(1).min(area.bottom()),
            height: area.height.saturating_sub(1),
            ..area
        };
        let layout = TableLayout {
            body,
            content_rows: table.content_rows,
        };
        if area.is_empty() {
            return layout;
        }

        let scroll = if table.pinned {
            table.content_rows.saturating_sub(body.height as usize)
        } else {
            metrics.scroll_y.max(0.0).round() as usize
        };
        let visible: Vec<&(usize, &[(String, Option<Rgba>)])> = table
            .rows
            .iter()
            .filter(|(offset, _)| *offset >= scroll && offset - scroll < body.height as usize)
            .collect();

        let columns = column_layout(headers, visible.iter().map(|(_, cells)| *cells), area);
        for (rect, header) in columns.iter().zip(headers) {
            put(buf, *rect, header, styles::header_style());
        }
        for (offset, cells) in visible {
            let y = body.y + (offset - scroll) as u16;
            for (rect, (text, color)) in columns.iter().zip(cells.iter()) {
                put(buf, Rect { y, ..*rect }, text, self.colors.fg(*color));
            }
        }
        layout
    }
}

/// Rows and spacers of one table, in content offsets.
struct TableContent<'a> {
    rows: Vec<(usize, &'a [(String, Option<Rgba>)])>,
    content_rows: usize,
    pinned: bool,
}

impl<'a> TableContent<'a> {
    fn collect(commands: &'a [DrawCommand]) -> Self {
        let mut rows = Vec::new();
        let mut offset = 0usize;
        let mut pinned = false;
        for command in commands {
            match command {
                DrawCommand::Spacer { height } => {
                    offset = offset.saturating_add(height.max(0.0).round() as usize);
                }
                DrawCommand::Row { cells } => {
                    rows.push((offset, cells.as_slice()));
                    offset += 1;
                }
                DrawCommand::ScrollToBottom => pinned = true,
                _ => {}
            }
        }
        Self {
            rows,
            content_rows: offset,
            pinned,
        }
    }
}

/// Column rectangles (one line tall, at `area.y`) sized by content.
fn column_layout<'c>(
    headers: &[String],
    rows: impl Iterator<Item = &'c [(String, Option<Rgba>)]>,
    area: Rect,
) -> Vec<Rect> {
    let mut widths: Vec<u16> = headers.iter().map(|h| text_width(h)).collect();
    for cells in rows {
        for (column, (text, _)) in cells.iter().enumerate() {
            let width = text_width(text);
            match widths.get_mut(column) {
                Some(current) => *current = (*current).max(width),
                None => widths.push(width),
            }
        }
    }

    let mut rects = Vec::with_capacity(widths.len());
    let mut x = area.x;
    let last = widths.len().saturating_sub(1);
    for (column, width) in widths.into_iter().enumerate() {
        let remaining = area.right().saturating_sub(x);
        let width = if column == last {
            remaining
        } else {
            width.min(MAX_COLUMN_WIDTH).min(remaining)
        };
        rects.push(Rect::new(x, area.y, width, 1));
        x = x.saturating_add(width).saturating_add(1).min(area.right());
    }
    rects
}

/// Flow layout of items inside a window.
struct Cursor {
    area: Rect,
    x: u16,
    y: u16,
    line_used: bool,
    same_line: bool,
    last: Option<Rect>,
}

impl Cursor {
    fn new(area: Rect) -> Self {
        Self {
            area,
            x: area.x,
            y: area.y,
            line_used: false,
            same_line: false,
            last: None,
        }
    }

    /// Place an item `width` columns wide; `None` once the window is full.
    fn place(&mut self, width: u16) -> Option<Rect> {
        let fits_on_line = self.x.saturating_add(1).saturating_add(width) <= self.area.right();
        let start = if self.line_used && self.same_line && fits_on_line {
            self.x + 1
        } else {
            if self.line_used {
                self.y = self.y.saturating_add(1);
            }
            self.area.x
        };
        self.same_line = false;
        if self.y >= self.area.bottom() || self.area.width == 0 {
            return None;
        }
        let width = width.min(self.area.right() - start);
        self.x = start + width;
        self.line_used = true;
        let rect = Rect::new(start, self.y, width, 1);
        self.last = Some(rect);
        Some(rect)
    }

    /// Take up to `height` full-width lines starting on a fresh line.
    fn take_block(&mut self, height: u16) -> Rect {
        if self.line_used {
            self.y = self.y.saturating_add(1);
        }
        let available = self.area.bottom().saturating_sub(self.y);
        let height = height.min(available);
        let top = self.y.min(self.area.bottom());
        let rect = Rect::new(self.area.x, top, self.area.width, height);
        self.y = self.y.saturating_add(height);
        self.x = self.area.x;
        self.line_used = false;
        self.same_line = false;
        rect
    }
}

fn render_tooltip(tooltip: &Tooltip, screen: Rect, buf: &mut Buffer) {
    let width = (text_width(&tooltip.text) + 2).min(screen.width);
    let height = 3.min(screen.height);
    let below = tooltip.anchor.bottom();
    let y = if below + height <= screen.bottom() {
        below
    } else {
        tooltip.anchor.y.saturating_sub(height).max(screen.y)
    };
    let x = tooltip.anchor.x.min(screen.right().saturating_sub(width));
    let popup = Rect::new(x, y, width, height);
    Clear.render(popup, buf);
    let block = Block::bordered();
    let inner = block.inner(popup);
    block.render(popup, buf);
    put(buf, inner, &tooltip.text, Style::default());
}

/// Map a rectangle in host surface pixels onto `area`.
///
/// The result is at least one cell in each direction and clipped to `area`;
/// `None` if the rectangle lies entirely off screen.
pub fn surface_to_cells(rect: ScreenRect, surface: PixelSize, area: Rect) -> Option<Rect> {
    if surface.is_empty() || area.is_empty() {
        return None;
    }
    let sx = f64::from(area.width) / f64::from(surface.width);
    let sy = f64::from(area.height) / f64::from(surface.height);

    let left = (f64::from(rect.x) * sx).floor();
    let top = (f64::from(rect.y) * sy).floor();
    let right = (f64::from(rect.x.saturating_add(rect.width)) * sx)
        .ceil()
        .max(left + 1.0);
    let bottom = (f64::from(rect.y.saturating_add(rect.height)) * sy)
        .ceil()
        .max(top + 1.0);

    let clip = |value: f64, max: u16| value.clamp(0.0, f64::from(max)) as u16;
    let (l, r) = (clip(left, area.width), clip(right, area.width));
    let (t, b) = (clip(top, area.height), clip(bottom, area.height));
    if r <= l || b <= t {
        return None;
    }
    Some(Rect::new(area.x + l, area.y + t, r - l, b - t))
}

fn columns_for(units: f32) -> u16 {
    (units / UNITS_PER_COLUMN).round().clamp(3.0, 12.0) as u16
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

fn put(buf: &mut Buffer, rect: Rect, text: &str, style: Style) {
    if !rect.is_empty() {
        buf.set_stringn(rect.x, rect.y, text, rect.width as usize, style);
    }
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
