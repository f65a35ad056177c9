//! Terminal shell (impure shell).
//!
//! Hosts the overlay over a simulated application in a terminal. Each frame
//! the overlay draws into a [`RecordingUi`], the recorded commands are laid
//! out by [`FrameView`], and mouse hits from that layout are fed back into
//! the recorder as scripted input for the next frame.

mod frame;
mod hit_test;
mod styles;

pub use frame::{surface_to_cells, FrameLayout, FrameView, TableLayout};
pub use hit_test::HitMap;
pub use styles::ColorConfig;

use crate::config::{KeyBindings, ResolvedConfig};
use crate::host::demo::{DemoHost, LogProducer};
use crate::host::HostContext;
use crate::logging::LogDispatcher;
use crate::model::{KeyAction, OverlayError};
use crate::overlay::{FrameReport, OverlaySlot, CONSOLE_TABLE_ID};
use crate::ui::{RecordingUi, ScrollMetrics, DEFAULT_VIEWPORT_ROWS};
use crate::view_state::ScrollPosition;
use crossterm::{
    event::{
        self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Time between host simulation steps.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Time between sample log events from the producer thread.
pub const LOG_INTERVAL: Duration = Duration::from_millis(250);

/// Lines moved per mouse wheel notch.
const WHEEL_LINES: usize = 3;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Overlay setup or host pool mutation failed
    #[error("Overlay error: {0}")]
    Overlay(#[from] OverlayError),
}

/// Demo host plus overlay, rendered to a terminal.
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    slot: OverlaySlot,
    host: DemoHost,
    ui: RecordingUi,
    key_bindings: KeyBindings,
    colors: ColorConfig,
    /// Layout of the last rendered frame (for mouse hit testing)
    layout: FrameLayout,
    console_scroll: ScrollPosition,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Set up the terminal in raw mode with alternate screen and mouse capture.
    pub fn new(
        host: DemoHost,
        dispatcher: &LogDispatcher,
        config: &ResolvedConfig,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Self::with_terminal(terminal, host, dispatcher, config, colors)
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;
        let mut last_step = Instant::now();

        loop {
            let timeout = FRAME_INTERVAL.saturating_sub(last_step.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => debug!(width, height, "terminal resized"),
                    _ => {}
                }
            }

            if last_step.elapsed() >= FRAME_INTERVAL {
                self.host.advance()?;
                last_step = Instant::now();
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create the overlay for `host` and attach it to `terminal`.
    ///
    /// The overlay's log store is registered with `dispatcher`.
    pub fn with_terminal(
        terminal: Terminal<B>,
        host: DemoHost,
        dispatcher: &LogDispatcher,
        config: &ResolvedConfig,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        let mut slot = OverlaySlot::new();
        slot.init(&host, dispatcher, config)?;

        Ok(Self {
            terminal,
            slot,
            host,
            // One table row per terminal line
            ui: RecordingUi::new(1.0),
            key_bindings: KeyBindings::default(),
            colors,
            layout: FrameLayout::default(),
            console_scroll: ScrollPosition::Bottom,
        })
    }

    /// Draw one overlay frame over the host.
    pub fn draw(&mut self) -> Result<FrameReport, TuiError> {
        let Some(overlay) = self.slot.instance() else {
            return Ok(FrameReport::default());
        };

        if overlay.flags().auto_scroll {
            self.console_scroll = ScrollPosition::Bottom;
        }
        if let Some(table) = self.layout.tables.get(CONSOLE_TABLE_ID) {
            let viewport = table.body.height as usize;
            let offset = self
                .console_scroll
                .resolve(overlay.store().len(), viewport);
            self.ui.set_table_metrics(
                CONSOLE_TABLE_ID,
                ScrollMetrics {
                    scroll_y: offset.get() as f32,
                    viewport_height: viewport as f32,
                },
            );
        }

        let report = overlay.draw_frame(&mut self.ui, &self.host);
        trace!(?report, "overlay frame");

        if self
            .ui
            .scroll_requests()
            .iter()
            .any(|id| id == CONSOLE_TABLE_ID)
        {
            self.console_scroll = ScrollPosition::Bottom;
        }
        self.ui.discard_clicks();
        let commands = self.ui.take_commands();

        let view = FrameView::new(&commands, self.host.surface_size(), self.colors);
        let layout = &mut self.layout;
        self.terminal
            .draw(|frame| frame.render_stateful_widget(view, frame.area(), layout))?;

        Ok(report)
    }

    /// Apply a key press. Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "key action");

        match action {
            KeyAction::Quit => return true,
            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom => self.scroll_console(action, 1),
            _ => {
                let Some(overlay) = self.slot.instance() else {
                    return false;
                };
                if action == KeyAction::ClearSelection {
                    overlay.selection_mut().clear();
                    return false;
                }
                let flags = overlay.flags_mut();
                let flag = match action {
                    KeyAction::ToggleConsole => &mut flags.show_console,
                    KeyAction::ToggleInspector => &mut flags.show_inspector,
                    KeyAction::ToggleDemo => &mut flags.show_demo,
                    KeyAction::ToggleAutoScroll => &mut flags.auto_scroll,
                    KeyAction::ToggleHighlight => &mut flags.highlight,
                    KeyAction::ToggleHoverPreview => &mut flags.hover_preview,
                    _ => return false,
                };
                *flag = !*flag;
            }
        }
        false
    }

    /// Apply a mouse event: clicks and hovers act on the next frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(id) = self.layout.hits.hit(mouse.column, mouse.row) {
                    debug!(id, "click");
                    self.ui.click(id);
                }
            }
            MouseEventKind::Moved => {
                let hovered = self
                    .layout
                    .hits
                    .hit(mouse.column, mouse.row)
                    .map(str::to_string);
                self.ui.hover(hovered);
            }
            MouseEventKind::ScrollUp => self.scroll_console(KeyAction::ScrollUp, WHEEL_LINES),
            MouseEventKind::ScrollDown => self.scroll_console(KeyAction::ScrollDown, WHEEL_LINES),
            _ => {}
        }
    }

    /// Move the console view. Reaching the bottom turns auto-scroll on,
    /// leaving it turns auto-scroll off.
    fn scroll_console(&mut self, action: KeyAction, lines: usize) {
        let Some(overlay) = self.slot.instance() else {
            return;
        };
        let total = overlay.store().len();
        let viewport = self
            .layout
            .tables
            .get(CONSOLE_TABLE_ID)
            .map_or(DEFAULT_VIEWPORT_ROWS as usize, |table| table.body.height as usize)
            .max(1);
        let page = viewport.saturating_sub(1).max(1);

        let current = self.console_scroll;
        let next = match action {
            KeyAction::ScrollUp => current.scroll_up(lines, total, viewport),
            KeyAction::ScrollDown => current.scroll_down(lines, total, viewport),
            KeyAction::PageUp => current.scroll_up(page, total, viewport),
            KeyAction::PageDown => current.scroll_down(page, total, viewport),
            KeyAction::ScrollToTop => ScrollPosition::Top,
            KeyAction::ScrollToBottom => ScrollPosition::Bottom,
            _ => current,
        };
        self.console_scroll = next;
        overlay.flags_mut().auto_scroll = next == ScrollPosition::Bottom;
    }

    /// Terminal the frames are drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Layout of the last drawn frame.
    pub fn layout(&self) -> &FrameLayout {
        &self.layout
    }

    /// Slot holding the overlay.
    pub fn slot_mut(&mut self) -> &mut OverlaySlot {
        &mut self.slot
    }

    /// Simulated host.
    pub fn host(&self) -> &DemoHost {
        &self.host
    }

    /// Mutable simulated host, for stepping it outside the event loop.
    pub fn host_mut(&mut self) -> &mut DemoHost {
        &mut self.host
    }

    /// Scroll position driven by the keyboard and wheel.
    pub fn console_scroll(&self) -> ScrollPosition {
        self.console_scroll
    }
}

/// Run the demo host with the overlay in this terminal until the user quits.
///
/// Note: Logging must be initialized by caller with the same dispatcher.
pub fn run_demo(
    config: &ResolvedConfig,
    dispatcher: &LogDispatcher,
    colors: ColorConfig,
) -> Result<(), TuiError> {
    let producer = LogProducer::spawn(LOG_INTERVAL)?;

    let host = DemoHost::new()?;
    let mut app = match TuiApp::new(host, dispatcher, config, colors) {
        Ok(app) => app,
        Err(err) => {
            if let Err(restore) = restore_terminal() {
                warn!(error = %restore, "failed to restore terminal");
            }
            return Err(err);
        }
    };

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;
    producer.stop();

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
