//! Interior tile culling.
//!
//! A tile whose six axis neighbors are all occupied can never be seen by any
//! camera ray. Such tiles are handed back to the pool before meshing so that
//! the combined mesh only carries geometry that can end up on screen.

use rustc_hash::FxHashSet;
use voxmap_voxel::{Grid, TilePool, VoxelCoord};

use crate::face_direction::FaceDirection;
use crate::occlusion::OcclusionMask;

/// Which of `coord`'s six neighbors are occupied in `grid`.
pub fn occlusion_mask(grid: &Grid, coord: VoxelCoord) -> OcclusionMask {
    let mut mask = OcclusionMask::NONE;
    for dir in FaceDirection::ALL {
        if grid.contains(dir.neighbor(coord)) {
            mask.set_blocked(dir);
        }
    }
    mask
}

/// Returns `true` if the voxel at `coord` is fully enclosed by other tiles.
pub fn is_interior(grid: &Grid, coord: VoxelCoord) -> bool {
    occlusion_mask(grid, coord).is_enclosed()
}

/// Removes interior tiles from a [`Grid`].
///
/// Classification is done against the grid as it stood before the pass, so
/// removing one interior tile never exposes a neighbor within the same pass.
#[derive(Debug, Default)]
pub struct VisibilityCuller {
    /// Scratch set of interior coordinates, kept between runs.
    interior: FxHashSet<VoxelCoord>,
}

impl VisibilityCuller {
    /// Creates a culler with an empty scratch set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Release every interior tile of `grid` to `pool`.
    ///
    /// Returns the number of tiles removed.
    pub fn cull(&mut self, grid: &mut Grid, pool: &mut TilePool) -> usize {
        self.interior.clear();
        self.interior
            .extend(grid.coords().filter(|&coord| is_interior(grid, coord)));

        if self.interior.is_empty() {
            tracing::debug!(inspected = grid.len(), "No interior tiles");
            return 0;
        }

        let inspected = grid.len();
        let interior = &self.interior;
        let culled = grid.release_where(pool, |tile| interior.contains(&tile.coord()));
        tracing::debug!(inspected, culled, remaining = grid.len(), "Culled interior tiles");
        culled
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn cuboid(pool: &mut TilePool, w: i32, h: i32, d: i32) -> Grid {
        let mut grid = Grid::new();
        for y in 0..h {
            for z in 0..d {
                for x in 0..w {
                    let c = VoxelCoord::new(x, y, z);
                    grid.push(pool.acquire(c, Vec3::ZERO));
                }
            }
        }
        grid
    }

    fn on_surface(c: VoxelCoord, w: i32, h: i32, d: i32) -> bool {
        c.x == 0 || c.y == 0 || c.z == 0 || c.x == w - 1 || c.y == h - 1 || c.z == d - 1
    }

    #[test]
    fn test_single_tile_has_no_neighbors() {
        let mut pool = TilePool::new();
        let grid = cuboid(&mut pool, 1, 1, 1);
        assert_eq!(occlusion_mask(&grid, VoxelCoord::new(0, 0, 0)), OcclusionMask::NONE);
    }

    #[test]
    fn test_center_of_3x3x3_is_interior() {
        let mut pool = TilePool::new();
        let grid = cuboid(&mut pool, 3, 3, 3);
        assert!(is_interior(&grid, VoxelCoord::new(1, 1, 1)));
        assert!(!is_interior(&grid, VoxelCoord::new(0, 1, 1)));
        assert_eq!(occlusion_mask(&grid, VoxelCoord::new(0, 1, 1)).count(), 5);
    }

    #[test]
    fn test_full_cuboid_keeps_only_surface() {
        let (w, h, d) = (8, 6, 5);
        let mut pool = TilePool::new();
        let mut grid = cuboid(&mut pool, w, h, d);
        let total = grid.len();

        let culled = VisibilityCuller::new().cull(&mut grid, &mut pool);

        let interior_count = ((w - 2) * (h - 2) * (d - 2)) as usize;
        assert_eq!(culled, interior_count);
        assert_eq!(grid.len(), total - interior_count);
        for c in grid.coords() {
            assert!(on_surface(c, w, h, d), "interior voxel {c:?} survived");
        }
        assert_eq!(pool.available(), interior_count);
        assert_eq!(pool.available() + grid.len(), pool.created());
    }

    #[test]
    fn test_classification_uses_pre_cull_grid() {
        // A 5x5x5 cube has a 3x3x3 interior. If removal were interleaved with
        // classification, later tiles would see holes and survive.
        let mut pool = TilePool::new();
        let mut grid = cuboid(&mut pool, 5, 5, 5);
        let culled = VisibilityCuller::new().cull(&mut grid, &mut pool);
        assert_eq!(culled, 27);
    }

    #[test]
    fn test_thin_slab_has_no_interior() {
        let mut pool = TilePool::new();
        let mut grid = cuboid(&mut pool, 8, 2, 8);
        assert_eq!(VisibilityCuller::new().cull(&mut grid, &mut pool), 0);
        assert_eq!(grid.len(), 128);
    }

    #[test]
    fn test_empty_grid() {
        let mut pool = TilePool::new();
        let mut grid = Grid::new();
        assert_eq!(VisibilityCuller::new().cull(&mut grid, &mut pool), 0);
    }

    #[test]
    fn test_culler_is_reusable() {
        let mut pool = TilePool::new();
        let mut culler = VisibilityCuller::new();

        let mut grid = cuboid(&mut pool, 3, 3, 3);
        assert_eq!(culler.cull(&mut grid, &mut pool), 1);
        grid.release_all(&mut pool);

        let mut grid = cuboid(&mut pool, 4, 4, 4);
        assert_eq!(culler.cull(&mut grid, &mut pool), 8);
    }
}
