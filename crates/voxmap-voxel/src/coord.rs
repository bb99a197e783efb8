//! Integer voxel coordinates.

use serde::{Deserialize, Serialize};

/// Identifies one cell of the voxel grid.
///
/// Signed so that neighbor lookups one step outside the volume (e.g. `x - 1`
/// at `x = 0`) are representable and simply miss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoxelCoord {
    /// Column index along X.
    pub x: i32,
    /// Layer index along Y.
    pub y: i32,
    /// Column index along Z.
    pub z: i32,
}

impl VoxelCoord {
    /// Creates a new coordinate.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the coordinate offset by `(dx, dy, dz)`.
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// World-space position of this cell for a tile of size `unit`.
    pub fn to_world(self, unit: glam::Vec3) -> glam::Vec3 {
        glam::Vec3::new(self.x as f32, self.y as f32, self.z as f32) * unit
    }

    /// Returns `true` if `0 <= x < width`, `0 <= y < height`, `0 <= z < depth`.
    pub fn within(self, width: u32, height: u32, depth: u32) -> bool {
        (0..width as i64).contains(&(self.x as i64))
            && (0..height as i64).contains(&(self.y as i64))
            && (0..depth as i64).contains(&(self.z as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(VoxelCoord::new(5, 10, 15).offset(1, 0, -1), VoxelCoord::new(6, 10, 14));
    }

    #[test]
    fn test_offset_negative_result() {
        assert_eq!(VoxelCoord::new(0, 0, 0).offset(-1, 0, 0), VoxelCoord::new(-1, 0, 0));
    }

    #[test]
    fn test_to_world_scales_by_unit() {
        let pos = VoxelCoord::new(2, 3, 4).to_world(glam::Vec3::new(0.5, 2.0, 1.0));
        assert_eq!(pos, glam::Vec3::new(1.0, 6.0, 4.0));
    }

    #[test]
    fn test_within_bounds() {
        assert!(VoxelCoord::new(0, 0, 0).within(8, 8, 8));
        assert!(VoxelCoord::new(7, 7, 7).within(8, 8, 8));
        assert!(!VoxelCoord::new(8, 0, 0).within(8, 8, 8));
        assert!(!VoxelCoord::new(0, -1, 0).within(8, 8, 8));
    }
}
