//! Simulated host application used by the `devoverlay` binary.
//!
//! Three pools of sprites drift across a fixed surface. Every few ticks one
//! slot is retired or reloaded, so a selection taken earlier goes stale the
//! way it would in a real game when an animation slot is reused.

use super::{HostContext, PoolId, SpritePool};
use crate::model::{BlendMode, OverlayError, PixelSize, Rgb, ScreenRect, SpriteRecord, TextureId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::{debug, error, info, trace, warn};

/// Size of the simulated host surface.
pub const DEMO_SURFACE: PixelSize = PixelSize {
    width: 640,
    height: 480,
};
/// Slots in the first sprite pool.
pub const DEMO_SPRITE_CAPACITY: usize = 8;
/// Slots in the second sprite pool.
pub const DEMO_SPRITE2_CAPACITY: usize = 4;

/// Ticks between slot retire/reload events.
pub const CHURN_INTERVAL: u64 = 40;

const SLOT_ASSERT: &str = "ASSERT(slot < capacity)";

const NAMES: [&str; 6] = ["hero", "slime", "bat", "chest", "torch", "door"];

/// Host with the standard pool layout and deterministic motion.
#[derive(Debug, Clone)]
pub struct DemoHost {
    pools: Vec<SpritePool>,
    surface: PixelSize,
    tick: u64,
    next_texture: u64,
}

impl DemoHost {
    /// Standard layout on [`DEMO_SURFACE`], every slot but the last of each pool loaded.
    pub fn new() -> Result<Self, OverlayError> {
        let mut host = Self {
            pools: SpritePool::standard_layout(DEMO_SPRITE_CAPACITY, DEMO_SPRITE2_CAPACITY),
            surface: DEMO_SURFACE,
            tick: 0,
            next_texture: 1,
        };
        for pool in 0..host.pools.len() {
            let capacity = host.pools[pool].capacity();
            for index in 0..capacity.saturating_sub(1) {
                let sprite = host.make_sprite(pool, index);
                host.pools[pool].replace(index, sprite)?;
            }
        }
        Ok(host)
    }

    fn make_sprite(&mut self, pool: usize, index: usize) -> SpriteRecord {
        let name = NAMES[(pool * 3 + index) % NAMES.len()];
        let texture = TextureId::new(self.next_texture);
        self.next_texture += 1;

        let size = match pool {
            2 => PixelSize::new(96, 128),
            _ => PixelSize::new(32 + 16 * (index as u32 % 3), 32 + 8 * (index as u32 % 4)),
        };
        let mut sprite = SpriteRecord::new(
            format!("{name}_{pool}_{index}"),
            format!("assets/{name}.png"),
        )
        .with_texture(texture, size)
        .with_screen_rect(ScreenRect::new(
            40 + 70 * index as i32,
            60 + 120 * pool as i32,
            size.width as i32,
            size.height as i32,
        ));
        if index % 2 == 1 {
            sprite = sprite.with_mask(format!("assets/{name}_mask.png"));
        }
        sprite.blend_mode = match index % 4 {
            0 => BlendMode::Alpha,
            1 => BlendMode::Add,
            2 => BlendMode::Sub,
            _ => BlendMode::Mul,
        };
        sprite.color = Rgb::new(255, 255 - 30 * (index as u8 % 5), 200);
        sprite.direction = index as i32 % 8;
        sprite
    }

    /// Advance one frame: move sprites and occasionally churn a slot.
    pub fn advance(&mut self) -> Result<(), OverlayError> {
        self.tick += 1;
        let tick = self.tick;
        let width = self.surface.width as i32;

        for pool in &mut self.pools {
            for index in 0..pool.capacity() {
                pool.update(index, |sprite| {
                    let step = 1 + (index as i32 % 3);
                    sprite.screen_rect.x = (sprite.screen_rect.x + step).rem_euclid(width);
                    if tick % 16 == 0 {
                        sprite.direction = (sprite.direction + 1) % 8;
                    }
                })?;
            }
        }

        if tick % CHURN_INTERVAL == 0 {
            self.churn(tick / CHURN_INTERVAL)?;
        }
        Ok(())
    }

    /// Alternate between retiring and reloading a slot of the first pool.
    fn churn(&mut self, round: u64) -> Result<(), OverlayError> {
        let pool = 0;
        let index = (round as usize) % self.pools[pool].capacity();
        if round % 2 == 1 {
            self.pools[pool].clear(index)?;
            debug!(pool, index, "retired sprite slot");
        } else {
            let sprite = self.make_sprite(pool, index);
            self.pools[pool].replace(index, sprite)?;
            debug!(pool, index, "reloaded sprite slot");
        }
        Ok(())
    }

    /// Mutable access to a pool by id.
    pub fn pool_mut(&mut self, id: PoolId) -> Result<&mut SpritePool, OverlayError> {
        self.pools
            .iter_mut()
            .find(|pool| pool.id() == id)
            .ok_or(OverlayError::UnknownPool(id))
    }
}

impl HostContext for DemoHost {
    fn sprite_pools(&self) -> &[SpritePool] {
        &self.pools
    }

    fn surface_size(&self) -> PixelSize {
        self.surface
    }
}

/// Background thread that emits a log event at every level until stopped.
#[derive(Debug)]
pub struct LogProducer {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl LogProducer {
    /// Start the thread, emitting one event every `interval`.
    pub fn spawn(interval: Duration) -> std::io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = std::thread::Builder::new()
            .name("log-producer".to_string())
            .spawn(move || {
                let mut n: u64 = 0;
                while !flag.load(Ordering::Relaxed) {
                    emit_sample(n);
                    n += 1;
                    std::thread::sleep(interval);
                }
            })?;
        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Signal the thread and wait for it.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("log producer thread panicked");
            }
        }
    }
}

impl Drop for LogProducer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn emit_sample(n: u64) {
    match n % 7 {
        0 => info!(frame = n, "frame presented"),
        1 => debug!(frame = n, "texture cache hit"),
        2 => trace!(frame = n, "input polled"),
        3 => warn!(frame = n, "frame took longer than budget"),
        4 => info!(target: "audio", frame = n, "stream refilled"),
        5 if n % 5 == 0 => error!(prefix = SLOT_ASSERT, frame = n, "slot lookup failed"),
        _ => info!(frame = n, "sprite batch submitted"),
    }
}
