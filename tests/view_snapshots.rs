//! Snapshot tests for overlay frames rendered to a terminal
//!
//! Uses insta + ratatui TestBackend: the overlay draws into a recorder, the
//! recorded frame is laid out by `FrameView`, and the buffer is compared.

use devoverlay::config::ResolvedConfig;
use devoverlay::host::{SpritePool, StaticHost};
use devoverlay::model::{LogRecord, PixelSize, ScreenRect, Severity, SpriteRecord, TextureId};
use devoverlay::overlay::Overlay;
use devoverlay::ui::RecordingUi;
use devoverlay::view::{ColorConfig, FrameLayout, FrameView};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Test Helpers =====

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Empty trailing lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

fn create_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn sample_host() -> StaticHost {
    let mut pools = SpritePool::standard_layout(2, 1);
    pools[0]
        .replace(
            0,
            SpriteRecord::new("hero", "hero.png")
                .with_texture(TextureId::new(7), PixelSize::new(200, 100))
                .with_screen_rect(ScreenRect::new(320, 240, 160, 120)),
        )
        .unwrap();
    StaticHost::new(pools, PixelSize::new(640, 480))
}

/// Draw one overlay frame into `terminal` and return its layout.
fn render_frame(
    terminal: &mut Terminal<TestBackend>,
    overlay: &mut Overlay,
    ui: &mut RecordingUi,
    host: &StaticHost,
) -> FrameLayout {
    overlay.draw_frame(ui, host);
    let commands = ui.take_commands();
    let mut layout = FrameLayout::default();
    let view = FrameView::new(&commands, host.surface, ColorConfig::disabled());
    terminal
        .draw(|frame| frame.render_stateful_widget(view, frame.area(), &mut layout))
        .unwrap();
    layout
}

// ===== Console =====

#[test]
fn snapshot_console_window() {
    let host = sample_host();
    let config = ResolvedConfig {
        show_console: true,
        show_inspector: false,
        ..ResolvedConfig::default()
    };
    let mut overlay = Overlay::new(&host, &config);
    let store = overlay.store();
    store.append(LogRecord::new(Severity::INFO_CODE, "src/app/main.rs", 12, "started"));
    store.append(LogRecord::new(Severity::ERROR_CODE, "src/net.rs", 40, "connection lost"));
    store.append(LogRecord::new(99, "C:\\game\\sprite.cpp", 7, "bad code"));

    let mut terminal = create_terminal(60, 8);
    let mut ui = RecordingUi::new(1.0);
    let layout = render_frame(&mut terminal, &mut overlay, &mut ui, &host);

    assert_eq!(layout.tables["console"].content_rows, 3);
    insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r"
 Windows: [x] Console [ ] Inspector [ ] UI demo Options: [x]
┌ Console ──────────────────────────────────────────────[x]┐
│Severity Source       Message                             │
│INFO     main.rs:12   started                             │
│ERROR    net.rs:40    connection lost                     │
│INVALID  sprite.cpp:7 bad code                            │
│                                                          │
└──────────────────────────────────────────────────────────┘
");
}

#[test]
fn console_shows_newest_rows_when_longer_than_window() {
    let host = sample_host();
    let config = ResolvedConfig {
        show_console: true,
        show_inspector: false,
        ..ResolvedConfig::default()
    };
    let mut overlay = Overlay::new(&host, &config);
    let store = overlay.store();
    for i in 0..100 {
        let message = format!("line {i}");
        store.append(LogRecord::new(Severity::INFO_CODE, "main.rs", i, message));
    }

    let mut terminal = create_terminal(60, 8);
    let mut ui = RecordingUi::new(1.0);
    render_frame(&mut terminal, &mut overlay, &mut ui, &host);

    let screen = buffer_to_string(terminal.backend().buffer());
    assert!(screen.contains("line 99"));
    assert!(!screen.contains("line 0 "));
}

// ===== Inspector =====

#[test]
fn selected_sprite_is_outlined_over_the_host() {
    let host = sample_host();
    let mut overlay = Overlay::new(&host, &ResolvedConfig::default());
    let handle = host.pools[0].handle(0).unwrap();
    overlay.selection_mut().select(handle);

    let mut terminal = create_terminal(64, 24);
    let mut ui = RecordingUi::new(1.0);
    render_frame(&mut terminal, &mut overlay, &mut ui, &host);

    // Sprite at (320, 240) on a 640x480 surface: the center of the screen.
    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(32, 12)].symbol(), "┏");
    assert!(buffer_to_string(buffer).contains("hero"));
}

#[test]
fn gallery_hits_are_recorded_per_thumbnail() {
    let host = sample_host();
    let mut overlay = Overlay::new(&host, &ResolvedConfig::default());

    let mut terminal = create_terminal(64, 24);
    let mut ui = RecordingUi::new(1.0);
    let layout = render_frame(&mut terminal, &mut overlay, &mut ui, &host);

    assert!(layout.hits.area_of("sprite#0@1").is_some());
    // Slot 1 has no sprite and the second pool is empty.
    assert!(layout.hits.area_of("sprite#1@1").is_none());
    assert!(layout.hits.area_of("sprite2#0@1").is_none());
}
