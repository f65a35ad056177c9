//! Terminal styling for overlay draw commands.

use crate::ui::Rgba;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Monochrome output.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Whether overlay colors reach the terminal.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }

    /// Foreground style for an overlay color.
    pub fn fg(self, color: Option<Rgba>) -> Style {
        match color {
            Some(color) if self.enabled => Style::default().fg(to_color(color)),
            _ => Style::default(),
        }
    }

    /// Style of the sprite highlight outline.
    pub fn outline(self, color: Rgba) -> Style {
        self.fg(Some(color)).add_modifier(Modifier::BOLD)
    }
}

/// Map an overlay color to a terminal truecolor value. Alpha is ignored.
pub fn to_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Window titles.
pub fn title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Table headers and collapsing headers.
pub fn header_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Main menu bar.
pub fn menu_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Buttons and menu items.
pub fn button_style() -> Style {
    Style::default().add_modifier(Modifier::UNDERLINED)
}
