//! Voxel coordinates, pooled tiles, and the active tile grid.
//!
//! A [`Tile`] is always owned by exactly one of [`TilePool`] (inactive) or
//! [`Grid`] (active). Moving a tile between them is a move in the Rust sense,
//! so a tile can never be referenced from both sides at once.

pub mod coord;
pub mod grid;
pub mod pool;
pub mod tile;

pub use coord::VoxelCoord;
pub use grid::Grid;
pub use pool::TilePool;
pub use tile::{Tile, TileId};
