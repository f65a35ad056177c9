//! Visibility and behavior toggles of the overlay.

use crate::config::ResolvedConfig;

/// Per-window visibility and option switches, flipped by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayFlags {
    /// Console window open.
    pub show_console: bool,
    /// Inspector window open.
    pub show_inspector: bool,
    /// Widget demo window open.
    pub show_demo: bool,
    /// Console follows the newest record.
    pub auto_scroll: bool,
    /// Hovered thumbnails show a full-size tooltip.
    pub hover_preview: bool,
    /// The selected sprite is outlined over the host.
    pub highlight: bool,
}

impl Default for OverlayFlags {
    fn default() -> Self {
        Self {
            show_console: false,
            show_inspector: true,
            show_demo: false,
            auto_scroll: true,
            hover_preview: true,
            highlight: true,
        }
    }
}

impl OverlayFlags {
    /// Startup flags from resolved configuration.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            show_console: config.show_console,
            show_inspector: config.show_inspector,
            show_demo: config.show_demo,
            auto_scroll: config.auto_scroll,
            hover_preview: config.hover_preview,
            highlight: config.highlight,
        }
    }
}
