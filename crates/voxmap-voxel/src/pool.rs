//! Recycling pool for tiles.
//!
//! The pool grows on demand and never shrinks, so after the first few
//! regenerations every acquire is served from previously created tiles and
//! no allocation happens per run.

use glam::Vec3;

use crate::coord::VoxelCoord;
use crate::tile::{Tile, TileId};

/// Owner of every inactive [`Tile`].
#[derive(Debug, Default)]
pub struct TilePool {
    free: Vec<Tile>,
    created: usize,
}

impl TilePool {
    /// Creates an empty pool. Tiles are created lazily by [`acquire`](Self::acquire).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pool holding `count` ready tiles.
    pub fn with_prewarm(count: usize) -> Self {
        let mut pool = Self::new();
        pool.prewarm(count);
        pool
    }

    /// Creates `count` additional tiles up front.
    pub fn prewarm(&mut self, count: usize) {
        self.free.reserve(count);
        for _ in 0..count {
            let tile = self.create();
            self.free.push(tile);
        }
        tracing::debug!(count, total = self.created, "Prewarmed tile pool");
    }

    /// Take a tile out of the pool, enabled and placed at `coord` / `position`.
    ///
    /// If the pool is empty exactly one new tile is created first.
    pub fn acquire(&mut self, coord: VoxelCoord, position: Vec3) -> Tile {
        let mut tile = match self.free.pop() {
            Some(tile) => tile,
            None => self.create(),
        };
        debug_assert!(!tile.is_enabled(), "pooled tile {:?} was still enabled", tile.id());
        tile.activate(coord, position);
        tile
    }

    /// Disable `tile` and return it to the pool.
    pub fn release(&mut self, mut tile: Tile) {
        tile.deactivate();
        self.free.push(tile);
    }

    /// Number of tiles currently waiting in the pool.
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Total number of tiles this pool has ever created.
    pub fn created(&self) -> usize {
        self.created
    }

    fn create(&mut self) -> Tile {
        let id = TileId(self.created as u32);
        self.created += 1;
        tracing::trace!(id = id.0, "Created tile");
        Tile::new(id)
    }
}
