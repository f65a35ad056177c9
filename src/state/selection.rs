//! Which sprite, if any, the inspector is showing.

use crate::host::{HostContext, SpriteHandle};
use crate::model::SpriteRecord;
use tracing::debug;

/// At most one selected sprite, held as a generation-checked handle.
///
/// The selection never owns the sprite. Call [`revalidate`](Self::revalidate)
/// once per frame before reading it: a handle whose slot was replaced or
/// emptied by the host is dropped there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<SpriteHandle>,
}

impl SelectionState {
    /// Nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `handle`, replacing any prior selection. Returns the previous one.
    pub fn select(&mut self, handle: SpriteHandle) -> Option<SpriteHandle> {
        let previous = self.selected.replace(handle);
        if previous != Some(handle) {
            debug!(%handle, "sprite selected");
        }
        previous
    }

    /// Drop the selection. Returns what was selected.
    pub fn clear(&mut self) -> Option<SpriteHandle> {
        self.selected.take()
    }

    /// Selected handle, which may be stale until the next `revalidate`.
    pub fn handle(&self) -> Option<SpriteHandle> {
        self.selected
    }

    /// Nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Resolve without mutating. `None` when empty or stale.
    pub fn resolve<'h, H>(&self, host: &'h H) -> Option<&'h SpriteRecord>
    where
        H: HostContext + ?Sized,
    {
        self.selected.and_then(|handle| host.resolve(handle))
    }

    /// Resolve the selection, clearing it if the host invalidated the slot.
    pub fn revalidate<'h, H>(&mut self, host: &'h H) -> Option<&'h SpriteRecord>
    where
        H: HostContext + ?Sized,
    {
        let handle = self.selected?;
        match host.resolve(handle) {
            Some(sprite) => Some(sprite),
            None => {
                debug!(%handle, "selected sprite slot was retired; clearing selection");
                self.selected = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{PoolId, SpritePool, StaticHost};
    use crate::model::{PixelSize, SpriteRecord, TextureId};

    fn host() -> StaticHost {
        let mut pools = SpritePool::standard_layout(4, 2);
        for (index, name) in ["hero", "enemy"].iter().enumerate() {
            pools[0]
                .replace(
                    index,
                    SpriteRecord::new(*name, format!("{name}.png"))
                        .with_texture(TextureId::new(index as u64 + 1), PixelSize::new(32, 32)),
                )
                .unwrap();
        }
        StaticHost::new(pools, PixelSize::new(640, 480))
    }

    #[test]
    fn starts_empty() {
        let selection = SelectionState::new();
        assert!(selection.is_empty());
        assert_eq!(selection.resolve(&host()), None);
    }

    #[test]
    fn select_round_trips_to_the_same_record() {
        let host = host();
        let mut selection = SelectionState::new();
        let handle = host.pools[0].handle(1).unwrap();

        selection.select(handle);

        let resolved = selection.resolve(&host).unwrap();
        assert!(std::ptr::eq(resolved, host.pools[0].get(1).unwrap()));
    }

    #[test]
    fn select_replaces_previous_selection() {
        let host = host();
        let mut selection = SelectionState::new();
        let first = host.pools[0].handle(0).unwrap();
        let second = host.pools[0].handle(1).unwrap();

        assert_eq!(selection.select(first), None);
        assert_eq!(selection.select(second), Some(first));

        assert_eq!(selection.handle(), Some(second));
        assert_eq!(selection.resolve(&host).unwrap().name, "enemy");
    }

    #[test]
    fn clear_empties_selection() {
        let host = host();
        let mut selection = SelectionState::new();
        selection.select(host.pools[0].handle(0).unwrap());

        assert!(selection.clear().is_some());
        assert!(selection.is_empty());
        assert_eq!(selection.clear(), None);
    }

    #[test]
    fn revalidate_keeps_live_selection() {
        let host = host();
        let mut selection = SelectionState::new();
        selection.select(host.pools[0].handle(0).unwrap());

        assert_eq!(selection.revalidate(&host).unwrap().name, "hero");
        assert!(!selection.is_empty());
    }

    #[test]
    fn revalidate_clears_replaced_slot() {
        let mut host = host();
        let mut selection = SelectionState::new();
        selection.select(host.pools[0].handle(0).unwrap());

        host.pool_mut(PoolId::new(0))
            .unwrap()
            .replace(0, SpriteRecord::new("boss", "boss.png"))
            .unwrap();

        assert_eq!(selection.resolve(&host), None);
        assert_eq!(selection.revalidate(&host), None);
        assert!(selection.is_empty());
    }

    #[test]
    fn revalidate_clears_emptied_slot() {
        let mut host = host();
        let mut selection = SelectionState::new();
        selection.select(host.pools[0].handle(1).unwrap());

        host.pool_mut(PoolId::new(0)).unwrap().clear(1).unwrap();

        assert_eq!(selection.revalidate(&host), None);
        assert!(selection.is_empty());
    }

    #[test]
    fn in_place_update_keeps_selection() {
        let mut host = host();
        let mut selection = SelectionState::new();
        selection.select(host.pools[0].handle(0).unwrap());

        host.pool_mut(PoolId::new(0))
            .unwrap()
            .update(0, |sprite| sprite.direction = 3)
            .unwrap();

        assert_eq!(selection.revalidate(&host).unwrap().direction, 3);
    }
}
