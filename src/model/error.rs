//! Error types for the overlay core.
//!
//! Rendering never fails: missing textures, stale selections and unknown
//! severities are absorbed where they occur. The errors here cover the
//! few operations with a caller who can act on them: initializing the
//! overlay twice and host-side pool mutations addressed at bad slots.

use crate::host::PoolId;
use thiserror::Error;

/// Failures surfaced by overlay initialization and sprite pool mutation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OverlayError {
    /// `init` was called on a slot that already holds an overlay.
    ///
    /// The existing overlay is left untouched.
    #[error("Overlay is already initialized")]
    AlreadyInitialized,

    /// A handle referred to a pool the host does not have.
    #[error("Unknown sprite pool {0}")]
    UnknownPool(PoolId),

    /// A slot index was outside the pool's fixed capacity.
    #[error("Slot {index} out of range for pool {pool} (capacity {capacity})")]
    SlotOutOfRange {
        /// Pool that was addressed.
        pool: PoolId,
        /// Requested slot index.
        index: usize,
        /// Fixed capacity of the pool.
        capacity: usize,
    },
}
