//! Summary of a completed regeneration.

use std::time::Duration;

use glam::Vec3;
use voxmap_config::WorldParameters;
use voxmap_terrain::GenerationDraws;

/// What one pass through the pipeline did.
#[derive(Clone, Debug, PartialEq)]
pub struct RegenerationReport {
    /// 1-based run counter.
    pub run: u64,
    /// Parameter snapshot the run used.
    pub params: WorldParameters,
    /// Random draws the run used.
    pub draws: GenerationDraws,
    /// Tiles returned to the pool during reset.
    pub released: usize,
    /// Tiles placed by the height field.
    pub generated: usize,
    /// Interior tiles removed by culling.
    pub culled: usize,
    /// Vertices in the combined mesh.
    pub vertices: usize,
    /// Triangles in the combined mesh.
    pub triangles: usize,
    /// Tiles ever created by the pool, after the run.
    pub pool_created: usize,
    /// Tiles waiting in the pool, after the run.
    pub pool_available: usize,
    /// Where the player was placed.
    pub spawn: Vec3,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

impl RegenerationReport {
    /// Tiles left in the grid after culling.
    pub fn surviving(&self) -> usize {
        self.generated - self.culled
    }
}
