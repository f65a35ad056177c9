//! The diagnostic overlay.
//!
//! [`OverlaySlot`] is owned by the host's top-level state and holds at most
//! one [`Overlay`]. Once per frame the host calls [`Overlay::draw_frame`]
//! with its drawing backend and a read-only view of its sprite pools.

pub mod console;
pub mod demo;
pub mod detail;
pub mod gallery;

pub use console::{render_console, severity_color, ConsoleReport, CONSOLE_TABLE_ID};
pub use demo::{render_demo, DemoState};
pub use detail::{render_detail, render_highlight, DetailResponse};
pub use gallery::{render_gallery, GalleryOptions, GalleryReport};

use crate::config::ResolvedConfig;
use crate::host::{HostBinding, HostContext};
use crate::logging::LogDispatcher;
use crate::model::OverlayError;
use crate::state::{LogStore, OverlayFlags, SelectionState};
use crate::ui::{DebugUi, Vec2};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Title of the console window and its menu item.
pub const CONSOLE_TITLE: &str = "Console";
/// Title of the inspector window and its menu item.
pub const INSPECTOR_TITLE: &str = "Inspector";
/// Title of the widget demo window and its menu item.
pub const DEMO_TITLE: &str = "UI demo";

const CONSOLE_SIZE: Vec2 = Vec2::new(700.0, 300.0);
const INSPECTOR_SIZE: Vec2 = Vec2::new(450.0, 600.0);
const DEMO_SIZE: Vec2 = Vec2::new(400.0, 300.0);

/// What one call to [`Overlay::draw_frame`] drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Console rows drawn, `None` while the console is hidden.
    pub console: Option<ConsoleReport>,
    /// Gallery contents, `None` while the inspector or its section is closed.
    pub gallery: Option<GalleryReport>,
    /// Detail panel outcome.
    pub detail: DetailResponse,
    /// The selection was outlined over the host.
    pub highlighted: bool,
}

/// Overlay state: flags, selection, the log store and the host binding.
#[derive(Debug)]
pub struct Overlay {
    flags: OverlayFlags,
    selection: SelectionState,
    demo: DemoState,
    store: Arc<LogStore>,
    binding: HostBinding,
    thumbnail_size: f32,
    detail_preview_size: f32,
}

impl Overlay {
    /// Overlay bound to `host`. Does not register for log events.
    pub fn new<H: HostContext + ?Sized>(host: &H, config: &ResolvedConfig) -> Self {
        Self {
            flags: OverlayFlags::from_config(config),
            selection: SelectionState::new(),
            demo: DemoState::default(),
            store: Arc::new(LogStore::new()),
            binding: HostBinding::capture(host),
            thumbnail_size: config.thumbnail_size,
            detail_preview_size: config.detail_preview_size,
        }
    }

    /// Window and option toggles.
    pub fn flags(&self) -> &OverlayFlags {
        &self.flags
    }

    /// Mutable toggles, for hosts that drive them from their own input.
    pub fn flags_mut(&mut self) -> &mut OverlayFlags {
        &mut self.flags
    }

    /// Current sprite selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Mutable selection.
    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    /// Shared handle to the log store, for registering as a sink.
    pub fn store(&self) -> Arc<LogStore> {
        Arc::clone(&self.store)
    }

    /// Pools and surface as seen at initialization.
    pub fn binding(&self) -> &HostBinding {
        &self.binding
    }

    /// Draw one frame of the overlay.
    ///
    /// Order: menu bar, console, inspector (gallery then detail), demo,
    /// highlight. The selection is revalidated against `host` before use,
    /// and the overlay never clears or repaints the host's own output.
    pub fn draw_frame<U, H>(&mut self, ui: &mut U, host: &H) -> FrameReport
    where
        U: DebugUi + ?Sized,
        H: HostContext + ?Sized,
    {
        let mut report = FrameReport::default();

        self.selection.revalidate(host);
        self.draw_menu(ui);

        if self.flags.show_console {
            let visible =
                ui.begin_window(CONSOLE_TITLE, &mut self.flags.show_console, CONSOLE_SIZE);
            if visible {
                report.console = Some(render_console(ui, &self.store, self.flags.auto_scroll));
            }
            ui.end_window();
        }

        if self.flags.show_inspector {
            let visible = ui.begin_window(
                INSPECTOR_TITLE,
                &mut self.flags.show_inspector,
                INSPECTOR_SIZE,
            );
            if visible {
                let options = GalleryOptions {
                    thumbnail_size: self.thumbnail_size,
                    hover_preview: self.flags.hover_preview,
                };
                report.gallery = Some(render_gallery(
                    ui,
                    host.sprite_pools(),
                    &mut self.selection,
                    options,
                ));
                report.detail =
                    render_detail(ui, self.selection.resolve(host), self.detail_preview_size);
                if report.detail.clear_requested {
                    self.selection.clear();
                }
            }
            ui.end_window();
        }

        if self.flags.show_demo {
            if ui.begin_window(DEMO_TITLE, &mut self.flags.show_demo, DEMO_SIZE) {
                render_demo(ui, &mut self.demo);
            }
            ui.end_window();
        }

        report.highlighted =
            render_highlight(ui, self.selection.resolve(host), self.flags.highlight);
        report
    }

    fn draw_menu<U: DebugUi + ?Sized>(&mut self, ui: &mut U) {
        if !ui.begin_main_menu_bar() {
            return;
        }
        if ui.begin_menu("Windows") {
            ui.menu_item_toggle(CONSOLE_TITLE, &mut self.flags.show_console);
            ui.menu_item_toggle(INSPECTOR_TITLE, &mut self.flags.show_inspector);
            ui.menu_item_toggle(DEMO_TITLE, &mut self.flags.show_demo);
            ui.end_menu();
        }
        if ui.begin_menu("Options") {
            ui.menu_item_toggle("Auto-scroll", &mut self.flags.auto_scroll);
            ui.menu_item_toggle("Hover preview", &mut self.flags.hover_preview);
            ui.menu_item_toggle("Highlight", &mut self.flags.highlight);
            ui.end_menu();
        }
        ui.end_main_menu_bar();
    }
}

/// Host-owned holder of the process's single overlay.
#[derive(Debug, Default)]
pub struct OverlaySlot {
    overlay: Option<Overlay>,
}

impl OverlaySlot {
    /// Empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the overlay, bind it to `host` and register its store with `dispatcher`.
    ///
    /// # Errors
    /// [`OverlayError::AlreadyInitialized`] on a second call; the first
    /// overlay is kept.
    pub fn init<H>(
        &mut self,
        host: &H,
        dispatcher: &LogDispatcher,
        config: &ResolvedConfig,
    ) -> Result<&mut Overlay, OverlayError>
    where
        H: HostContext + ?Sized,
    {
        if self.overlay.is_some() {
            warn!("overlay init called twice; keeping the first overlay");
            return Err(OverlayError::AlreadyInitialized);
        }

        let overlay = Overlay::new(host, config);
        dispatcher.register(overlay.store());
        let binding = overlay.binding();
        info!(
            pools = binding.pools.len(),
            slots = binding.slot_count(),
            surface = %binding.surface,
            "overlay initialized"
        );
        Ok(self.overlay.insert(overlay))
    }

    /// The overlay, or `None` (with an error diagnostic) before `init`.
    pub fn instance(&mut self) -> Option<&mut Overlay> {
        if self.overlay.is_none() {
            error!("overlay instance requested before init");
        }
        self.overlay.as_mut()
    }

    /// Whether `init` has succeeded, without logging.
    pub fn is_initialized(&self) -> bool {
        self.overlay.is_some()
    }
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod tests;
