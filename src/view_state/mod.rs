//! View-state layer (pure).
//!
//! Geometry decisions made before anything is drawn: which log rows fall in
//! the viewport, where a scroll position resolves to, how big a thumbnail is.

pub mod scroll;
pub mod thumbnail;
pub mod types;
pub mod virtual_list;
pub mod visible_range;

pub use scroll::ScrollPosition;
pub use thumbnail::{fit_to_target, full_size, ScaledSize};
pub use types::{LineOffset, RecordIndex};
pub use virtual_list::{viewport_capacity, visible_range};
pub use visible_range::VisibleRange;
