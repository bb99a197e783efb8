//! A single pooled tile.

use glam::Vec3;

use crate::coord::VoxelCoord;

/// Stable identity of a tile for its whole lifetime.
///
/// Ids are handed out sequentially by the [`TilePool`](crate::TilePool) that
/// created the tile and are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

/// The placed object representing one occupied voxel.
///
/// Tiles are not `Clone`: each one exists exactly once and is
/// moved between the pool and the grid.
#[derive(Debug)]
pub struct Tile {
    id: TileId,
    coord: VoxelCoord,
    position: Vec3,
    enabled: bool,
}

impl Tile {
    /// A fresh, disabled tile at the origin.
    pub(crate) fn new(id: TileId) -> Self {
        Self {
            id,
            coord: VoxelCoord::default(),
            position: Vec3::ZERO,
            enabled: false,
        }
    }

    /// Enable the tile and place it at `coord` / `position`.
    pub(crate) fn activate(&mut self, coord: VoxelCoord, position: Vec3) {
        self.coord = coord;
        self.position = position;
        self.enabled = true;
    }

    /// Disable the tile and clear its placement.
    pub(crate) fn deactivate(&mut self) {
        self.coord = VoxelCoord::default();
        self.position = Vec3::ZERO;
        self.enabled = false;
    }

    /// The tile's identity.
    pub fn id(&self) -> TileId {
        self.id
    }

    /// The voxel cell this tile occupies.
    pub fn coord(&self) -> VoxelCoord {
        self.coord
    }

    /// World-space position of the tile's center.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Whether the tile is active (rendered and collidable).
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
