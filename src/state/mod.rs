//! Overlay state (pure apart from the store's lock).
//!
//! Everything the overlay remembers between frames: captured log records,
//! the current sprite selection and the visibility flags.

pub mod log_store;
pub mod overlay_flags;
pub mod selection;

pub use log_store::{LogStore, VisibleSlice};
pub use overlay_flags::OverlayFlags;
pub use selection::SelectionState;
