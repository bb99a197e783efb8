//! Height-field terrain generation.
//!
//! Every `(x, z)` column gets a height from 2D noise; the column is filled
//! from `y = 0` up to that height. The result is a contiguous landmass with no
//! floating voxels or overhangs.

use glam::Vec3;
use voxmap_config::WorldParameters;
use voxmap_voxel::{Grid, TilePool, VoxelCoord};

use crate::draws::GenerationDraws;
use crate::height_noise::HeightNoise;

/// Number of occupied cells in a column whose noise height is `n`.
///
/// A cell `y` is occupied when `y < n`, capped at `height` layers.
pub fn column_fill(n: f64, height: u32) -> u32 {
    if n.is_nan() || n <= 0.0 {
        return 0;
    }
    let cells = n.ceil();
    if cells >= height as f64 {
        height
    } else {
        cells as u32
    }
}

/// Fills a [`Grid`] with tiles according to a noise height field.
pub struct HeightFieldGenerator {
    noise: Box<dyn HeightNoise>,
    /// Per-column fill counts, reused between runs.
    columns: Vec<u32>,
}

impl HeightFieldGenerator {
    /// Create a generator sampling `noise`.
    pub fn new(noise: impl HeightNoise + 'static) -> Self {
        Self {
            noise: Box::new(noise),
            columns: Vec::new(),
        }
    }

    /// The raw noise height of column `(x, z)` before clamping.
    ///
    /// `n(x, z) = noise((x + offset_x) / scale, (z + offset_z) / scale) * depth * 0.5`
    pub fn column_height(
        &self,
        params: &WorldParameters,
        draws: &GenerationDraws,
        x: u32,
        z: u32,
    ) -> f64 {
        let scale = draws.scale as f64;
        let nx = (x as f64 + draws.offset_x as f64) / scale;
        let nz = (z as f64 + draws.offset_z as f64) / scale;
        self.noise.sample(nx, nz) * params.depth as f64 * 0.5
    }

    /// Acquire a tile from `pool` for every occupied voxel and append it to `grid`.
    ///
    /// Tiles are placed at `coord * unit`. Voxels are visited layer by layer
    /// (Y outermost, then Z, then X). Returns the number of tiles placed.
    pub fn generate(
        &mut self,
        params: &WorldParameters,
        draws: &GenerationDraws,
        unit: Vec3,
        pool: &mut TilePool,
        grid: &mut Grid,
    ) -> usize {
        debug_assert!(params.is_valid(), "unvalidated parameters: {params:?}");
        debug_assert!(draws.scale > 0.0, "noise scale must be positive");

        let (width, height, depth) = (params.width, params.height, params.depth);

        self.columns.clear();
        self.columns.reserve(width as usize * depth as usize);
        for z in 0..depth {
            for x in 0..width {
                let n = self.column_height(params, draws, x, z);
                self.columns.push(column_fill(n, height));
            }
        }

        let mut placed = 0;
        for y in 0..height {
            for z in 0..depth {
                for x in 0..width {
                    let fill = self.columns[(z * width + x) as usize];
                    if y >= fill {
                        continue;
                    }
                    let coord = VoxelCoord::new(x as i32, y as i32, z as i32);
                    grid.push(pool.acquire(coord, coord.to_world(unit)));
                    placed += 1;
                }
            }
        }

        tracing::debug!(
            placed,
            scale = draws.scale,
            offset_x = draws.offset_x,
            offset_z = draws.offset_z,
            "Generated height field"
        );
        placed
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::height_noise::{ConstantNoise, PerlinNoise};

    fn params(height: u32, width: u32, depth: u32, scale: f32) -> WorldParameters {
        WorldParameters::new(height, width, depth, scale, scale).unwrap()
    }

    #[test]
    fn test_column_fill() {
        assert_eq!(column_fill(-1.0, 8), 0);
        assert_eq!(column_fill(0.0, 8), 0);
        assert_eq!(column_fill(0.1, 8), 1);
        assert_eq!(column_fill(2.0, 8), 2);
        assert_eq!(column_fill(2.5, 8), 3);
        assert_eq!(column_fill(100.0, 8), 8);
        assert_eq!(column_fill(f64::NAN, 8), 0);
    }

    #[test]
    fn test_constant_noise_fills_slab() {
        // n = 0.5 * depth(8) * 0.5 = 2 → layers 0 and 1.
        let p = params(8, 8, 8, 16.0);
        let mut generator = HeightFieldGenerator::new(ConstantNoise(0.5));
        let mut pool = TilePool::new();
        let mut grid = Grid::new();

        let placed = generator.generate(
            &p,
            &GenerationDraws::fixed(16.0, 0.0, 0.0),
            Vec3::ONE,
            &mut pool,
            &mut grid,
        );

        assert_eq!(placed, 8 * 8 * 2);
        assert_eq!(grid.len(), placed);
        assert!(grid.coords().all(|c| c.y < 2));
    }

    #[test]
    fn test_full_noise_clamped_to_height() {
        // n = 1.0 * 32 * 0.5 = 16, but only 8 layers exist.
        let p = params(8, 8, 32, 16.0);
        let mut generator = HeightFieldGenerator::new(ConstantNoise(1.0));
        let mut pool = TilePool::new();
        let mut grid = Grid::new();

        generator.generate(&p, &GenerationDraws::fixed(16.0, 0.0, 0.0), Vec3::ONE, &mut pool, &mut grid);
        assert_eq!(grid.len(), p.volume());
    }

    #[test]
    fn test_zero_noise_places_nothing() {
        let p = params(8, 8, 8, 16.0);
        let mut generator = HeightFieldGenerator::new(ConstantNoise(0.0));
        let mut pool = TilePool::new();
        let mut grid = Grid::new();

        let placed =
            generator.generate(&p, &GenerationDraws::fixed(16.0, 0.0, 0.0), Vec3::ONE, &mut pool, &mut grid);
        assert_eq!(placed, 0);
        assert_eq!(pool.created(), 0);
    }

    #[test]
    fn test_tiles_within_bounds_and_unique() {
        let p = WorldParameters::new(16, 24, 20, 8.0, 32.0).unwrap();
        let mut generator = HeightFieldGenerator::new(PerlinNoise::default());
        let mut pool = TilePool::new();
        let mut grid = Grid::new();

        generator.generate(
            &p,
            &GenerationDraws::fixed(11.0, 317.5, -92.25),
            Vec3::ONE,
            &mut pool,
            &mut grid,
        );

        let mut seen = HashSet::new();
        for c in grid.coords() {
            assert!(c.within(p.width, p.height, p.depth), "{c:?} out of bounds");
            assert!(seen.insert(c), "{c:?} placed twice");
        }
    }

    #[test]
    fn test_columns_are_contiguous_from_ground() {
        let p = params(16, 16, 16, 12.0);
        let mut generator = HeightFieldGenerator::new(PerlinNoise::new(3));
        let mut pool = TilePool::new();
        let mut grid = Grid::new();
        generator.generate(&p, &GenerationDraws::fixed(12.0, 40.0, 40.0), Vec3::ONE, &mut pool, &mut grid);

        for c in grid.coords() {
            if c.y > 0 {
                assert!(grid.contains(c.offset(0, -1, 0)), "floating voxel at {c:?}");
            }
        }
    }

    #[test]
    fn test_positions_scaled_by_unit() {
        let p = params(8, 8, 8, 16.0);
        let unit = Vec3::new(2.0, 0.5, 3.0);
        let mut generator = HeightFieldGenerator::new(ConstantNoise(0.25));
        let mut pool = TilePool::new();
        let mut grid = Grid::new();
        generator.generate(&p, &GenerationDraws::fixed(16.0, 0.0, 0.0), unit, &mut pool, &mut grid);

        for tile in grid.iter() {
            assert_eq!(tile.position(), tile.coord().to_world(unit));
        }
    }

    #[test]
    fn test_layer_major_order() {
        let p = params(8, 8, 8, 16.0);
        let mut generator = HeightFieldGenerator::new(ConstantNoise(1.0));
        let mut pool = TilePool::new();
        let mut grid = Grid::new();
        generator.generate(&p, &GenerationDraws::fixed(16.0, 0.0, 0.0), Vec3::ONE, &mut pool, &mut grid);

        let coords: Vec<_> = grid.coords().take(10).collect();
        assert_eq!(coords[0], VoxelCoord::new(0, 0, 0));
        assert_eq!(coords[1], VoxelCoord::new(1, 0, 0));
        assert_eq!(coords[8], VoxelCoord::new(0, 0, 1));
    }

    #[test]
    fn test_neighbouring_columns_are_smooth() {
        let p = params(128, 128, 128, 16.0);
        let generator = HeightFieldGenerator::new(PerlinNoise::default());
        let draws = GenerationDraws::fixed(16.0, -511.0, 203.0);
        // 0.25 of the unit noise range per voxel step, scaled by the amplitude.
        let bound = 0.25 * p.depth as f64 * 0.5;
        for z in 0..p.depth {
            for x in 0..p.width - 1 {
                let a = generator.column_height(&p, &draws, x, z);
                let b = generator.column_height(&p, &draws, x + 1, z);
                assert!((a - b).abs() < bound, "jump of {} at ({x}, {z})", (a - b).abs());
            }
        }
    }
}
