//! The ordered set of active tiles making up the generated terrain.
//!
//! [`Grid`] keeps tiles in insertion order (the order the generator placed
//! them) alongside an [`FxHashMap`](rustc_hash::FxHashMap) index from voxel
//! coordinate to slot, giving O(1) occupancy queries for the culler.

use rustc_hash::FxHashMap;

use crate::coord::VoxelCoord;
use crate::pool::TilePool;
use crate::tile::Tile;

/// Owner of every active [`Tile`]. No two tiles share a coordinate.
#[derive(Debug, Default)]
pub struct Grid {
    tiles: Vec<Tile>,
    index: FxHashMap<VoxelCoord, usize>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an active tile.
    ///
    /// # Panics
    ///
    /// Panics if another tile already occupies the same coordinate. The
    /// generator visits each cell once, so this only fires on a logic error.
    pub fn push(&mut self, tile: Tile) {
        let coord = tile.coord();
        let slot = self.tiles.len();
        let previous = self.index.insert(coord, slot);
        assert!(previous.is_none(), "voxel {coord:?} is already occupied");
        self.tiles.push(tile);
    }

    /// Returns `true` if a tile occupies `coord`.
    pub fn contains(&self, coord: VoxelCoord) -> bool {
        self.index.contains_key(&coord)
    }

    /// The tile at `coord`, if any.
    pub fn get(&self, coord: VoxelCoord) -> Option<&Tile> {
        self.index.get(&coord).map(|&slot| &self.tiles[slot])
    }

    /// Number of active tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns `true` if the grid holds no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterates over the tiles in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Iterates over occupied coordinates in placement order.
    pub fn coords(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        self.tiles.iter().map(Tile::coord)
    }

    /// Returns every tile to `pool`, leaving the grid empty.
    ///
    /// Storage capacity is kept for the next run. Returns the number of
    /// tiles released.
    pub fn release_all(&mut self, pool: &mut TilePool) -> usize {
        let count = self.tiles.len();
        for tile in self.tiles.drain(..) {
            pool.release(tile);
        }
        self.index.clear();
        count
    }

    /// Returns every tile matching `predicate` to `pool`.
    ///
    /// Surviving tiles keep their relative order. Returns the number of
    /// tiles released.
    pub fn release_where(
        &mut self,
        pool: &mut TilePool,
        mut predicate: impl FnMut(&Tile) -> bool,
    ) -> usize {
        let mut released = 0;
        for tile in self.tiles.extract_if(.., |tile| predicate(tile)) {
            pool.release(tile);
            released += 1;
        }
        if released > 0 {
            self.reindex();
        }
        released
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (slot, tile) in self.tiles.iter().enumerate() {
            self.index.insert(tile.coord(), slot);
        }
    }
}
