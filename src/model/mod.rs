//! Domain model types (pure).
//!
//! Log records, severities and the read-only view of host sprite records.

pub mod error;
pub mod key_action;
pub mod log_record;
pub mod severity;
pub mod sprite;

// Re-export for convenience
pub use error::OverlayError;
pub use key_action::KeyAction;
pub use log_record::{strip_directory, LogEvent, LogRecord};
pub use severity::Severity;
pub use sprite::{BlendMode, PixelSize, Rgb, ScreenRect, SpriteRecord, TextureId};
