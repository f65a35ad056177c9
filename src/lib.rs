//! devoverlay
//!
//! In-process diagnostic overlay for a game-style host: a virtualized log
//! console fed from `tracing`, a sprite thumbnail gallery with selection and
//! detail view, and an on-screen highlight of the selected sprite.
//!
//! Pure core (`model`, `view_state`, `state`, `overlay` drawing against the
//! [`ui::DebugUi`] trait) / impure shell (`logging`, `view`).

pub mod config;
pub mod host;
pub mod logging;
pub mod model;
pub mod overlay;
pub mod state;
pub mod ui;
pub mod view;
pub mod view_state;
