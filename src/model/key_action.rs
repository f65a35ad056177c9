//! Domain-level keyboard actions independent of key bindings.

/// Actions the terminal host can trigger from the keyboard.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the console up by one row. Default: k/↑
    ScrollUp,
    /// Scroll the console down by one row. Default: j/↓
    ScrollDown,
    /// Scroll up by one page height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one page height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the oldest record. Default: g/Home
    ScrollToTop,
    /// Jump to the newest record. Default: G/End
    ScrollToBottom,

    // Visibility flags
    /// Show or hide the log console. Default: c
    ToggleConsole,
    /// Show or hide the sprite inspector. Default: i
    ToggleInspector,
    /// Show or hide the UI demo window. Default: d
    ToggleDemo,
    /// Toggle console auto-scroll. Default: a
    ToggleAutoScroll,
    /// Toggle the highlight rectangle. Default: h
    ToggleHighlight,
    /// Toggle thumbnail hover previews. Default: p
    ToggleHoverPreview,

    // Selection
    /// Drop the current sprite selection. Default: Esc
    ClearSelection,

    // Application
    /// Quit the host. Default: q
    Quit,
}
