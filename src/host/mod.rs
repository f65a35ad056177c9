//! Host binding: sprite pools and the handles the overlay uses to refer to them.
//!
//! The host owns every sprite record. The overlay refers to a record only
//! through a [`SpriteHandle`] (pool, slot, generation). Each slot carries a
//! generation counter that the host bumps whenever the slot is replaced or
//! cleared, so a handle taken before that point no longer resolves.

pub mod demo;

use crate::model::{OverlayError, PixelSize, SpriteRecord};
use std::fmt;

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;

/// Capacity of the fixed portrait pool.
pub const PORTRAIT_POOL_CAPACITY: usize = 3;

/// Identifies one of the host's sprite pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoolId(usize);

impl PoolId {
    /// Wrap the host's pool number.
    pub fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Pool number.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-owning reference to one occupied slot.
///
/// Resolves only while the slot still holds the record it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteHandle {
    pool: PoolId,
    index: usize,
    generation: u64,
}

impl SpriteHandle {
    /// Pool the slot belongs to.
    pub fn pool(&self) -> PoolId {
        self.pool
    }

    /// Pool-relative slot index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Slot generation the handle was taken at.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Display for SpriteHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}@{}", self.pool, self.index, self.generation)
    }
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u64,
    sprite: Option<SpriteRecord>,
}

/// Fixed-capacity collection of sprite slots.
#[derive(Debug, Clone)]
pub struct SpritePool {
    id: PoolId,
    name: String,
    slots: Vec<Slot>,
}

impl SpritePool {
    /// Create a pool with `capacity` empty slots.
    pub fn new(id: PoolId, name: impl Into<String>, capacity: usize) -> Self {
        Self {
            id,
            name: name.into(),
            slots: vec![Slot::default(); capacity],
        }
    }

    /// The standard three-pool layout: two general pools and the portrait pool.
    pub fn standard_layout(sprite_capacity: usize, sprite2_capacity: usize) -> Vec<Self> {
        vec![
            Self::new(PoolId::new(0), "sprite", sprite_capacity),
            Self::new(PoolId::new(1), "sprite2", sprite2_capacity),
            Self::new(PoolId::new(2), "portrait", PORTRAIT_POOL_CAPACITY),
        ]
    }

    /// Pool id.
    pub fn id(&self) -> PoolId {
        self.id
    }

    /// Display name, also the prefix of thumbnail ids.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Sprite in slot `index`, if the slot exists and is occupied.
    pub fn get(&self, index: usize) -> Option<&SpriteRecord> {
        self.slots.get(index).and_then(|slot| slot.sprite.as_ref())
    }

    /// Current generation of slot `index`.
    pub fn generation(&self, index: usize) -> Option<u64> {
        self.slots.get(index).map(|slot| slot.generation)
    }

    /// Handle to the record currently in slot `index`.
    pub fn handle(&self, index: usize) -> Option<SpriteHandle> {
        let slot = self.slots.get(index)?;
        slot.sprite.as_ref()?;
        Some(SpriteHandle {
            pool: self.id,
            index,
            generation: slot.generation,
        })
    }

    /// Resolve a handle taken from this pool.
    ///
    /// Returns `None` if the handle belongs to another pool, the slot has been
    /// replaced or cleared since, or the slot is empty.
    pub fn resolve(&self, handle: SpriteHandle) -> Option<&SpriteRecord> {
        if handle.pool != self.id {
            return None;
        }
        let slot = self.slots.get(handle.index)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.sprite.as_ref()
    }

    /// Iterate occupied slots in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &SpriteRecord)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.sprite.as_ref().map(|sprite| (index, sprite)))
    }

    /// Put a new record into slot `index`, invalidating older handles.
    pub fn replace(
        &mut self,
        index: usize,
        sprite: SpriteRecord,
    ) -> Result<SpriteHandle, OverlayError> {
        let id = self.id;
        let slot = self.slot_mut(index)?;
        slot.generation = slot.generation.wrapping_add(1);
        slot.sprite = Some(sprite);
        Ok(SpriteHandle {
            pool: id,
            index,
            generation: slot.generation,
        })
    }

    /// Empty slot `index`, invalidating older handles.
    pub fn clear(&mut self, index: usize) -> Result<Option<SpriteRecord>, OverlayError> {
        let slot = self.slot_mut(index)?;
        slot.generation = slot.generation.wrapping_add(1);
        Ok(slot.sprite.take())
    }

    /// Mutate the record in slot `index` in place.
    ///
    /// The record keeps its identity: existing handles stay valid.
    pub fn update<F>(&mut self, index: usize, f: F) -> Result<bool, OverlayError>
    where
        F: FnOnce(&mut SpriteRecord),
    {
        let slot = self.slot_mut(index)?;
        match slot.sprite.as_mut() {
            Some(sprite) => {
                f(sprite);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Slot, OverlayError> {
        let capacity = self.slots.len();
        let pool = self.id;
        self.slots
            .get_mut(index)
            .ok_or(OverlayError::SlotOutOfRange {
                pool,
                index,
                capacity,
            })
    }
}

/// What the overlay reads from the host each frame.
pub trait HostContext {
    /// Sprite pools in display order.
    fn sprite_pools(&self) -> &[SpritePool];

    /// Size of the host's render surface in pixels.
    fn surface_size(&self) -> PixelSize;

    /// Resolve a handle against the current pools.
    fn resolve(&self, handle: SpriteHandle) -> Option<&SpriteRecord> {
        self.sprite_pools()
            .iter()
            .find(|pool| pool.id() == handle.pool())
            .and_then(|pool| pool.resolve(handle))
    }
}

/// Shape of a pool as recorded when the overlay was bound to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSummary {
    /// Pool id.
    pub id: PoolId,
    /// Pool name.
    pub name: String,
    /// Slots in the pool.
    pub capacity: usize,
}

/// Snapshot of the host taken at overlay initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBinding {
    /// Pools in host order.
    pub pools: Vec<PoolSummary>,
    /// Host surface size at bind time.
    pub surface: PixelSize,
}

impl HostBinding {
    /// Record the pools and surface of `host`.
    pub fn capture<H: HostContext + ?Sized>(host: &H) -> Self {
        Self {
            pools: host
                .sprite_pools()
                .iter()
                .map(|pool| PoolSummary {
                    id: pool.id(),
                    name: pool.name().to_string(),
                    capacity: pool.capacity(),
                })
                .collect(),
            surface: host.surface_size(),
        }
    }

    /// Total slots across all bound pools.
    pub fn slot_count(&self) -> usize {
        self.pools.iter().map(|pool| pool.capacity).sum()
    }
}

/// Minimal [`HostContext`] over an owned list of pools.
#[derive(Debug, Clone)]
pub struct StaticHost {
    /// Pools in host order.
    pub pools: Vec<SpritePool>,
    /// Surface size reported to the overlay.
    pub surface: PixelSize,
}

impl StaticHost {
    /// Host over `pools` drawing to a surface of `surface` pixels.
    pub fn new(pools: Vec<SpritePool>, surface: PixelSize) -> Self {
        Self { pools, surface }
    }

    /// Mutable access to a pool by id.
    pub fn pool_mut(&mut self, id: PoolId) -> Result<&mut SpritePool, OverlayError> {
        self.pools
            .iter_mut()
            .find(|pool| pool.id() == id)
            .ok_or(OverlayError::UnknownPool(id))
    }
}

impl HostContext for StaticHost {
    fn sprite_pools(&self) -> &[SpritePool] {
        &self.pools
    }

    fn surface_size(&self) -> PixelSize {
        self.surface
    }
}
