//! Prototype tile geometry.
//!
//! Every tile shares one [`TileMesh`]: a cube centered on the tile's origin
//! in local space. The [`TilePrototype`] pairs that mesh with the tile's
//! world-space size.

use glam::Vec3;

use crate::face_direction::FaceDirection;

/// A single vertex, laid out for direct GPU upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Position.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
    /// Texture coordinates.
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(MeshVertex, [u8; 32]);

/// Indexed triangle geometry in tile-local space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileMesh {
    /// Vertex buffer.
    pub vertices: Vec<MeshVertex>,
    /// Index buffer (triangles, 3 indices per triangle).
    pub indices: Vec<u32>,
}

impl TileMesh {
    /// A unit cube spanning `[-0.5, 0.5]` on every axis.
    ///
    /// Each face has its own four vertices so normals stay flat: 24 vertices,
    /// 36 indices.
    pub fn cube() -> Self {
        let mut mesh = Self {
            vertices: Vec::with_capacity(24),
            indices: Vec::with_capacity(36),
        };
        for dir in FaceDirection::ALL {
            mesh.push_face(dir);
        }
        mesh
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push_face(&mut self, direction: FaceDirection) {
        let (layer_axis, u_axis, v_axis) = direction.sweep_axes();
        let normal = direction.normal();
        let layer_pos = if direction.is_positive() { 0.5 } else { -0.5 };

        let corners = [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];
        let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

        let base = self.vertices.len() as u32;
        for (&(cu, cv), uv) in corners.iter().zip(uvs) {
            let mut position = [0.0_f32; 3];
            position[layer_axis] = layer_pos;
            position[u_axis] = cu;
            position[v_axis] = cv;
            self.vertices.push(MeshVertex {
                position,
                normal,
                uv,
            });
        }

        // Counter-clockwise when seen from outside the tile.
        let corner = |i: u32| Vec3::from(self.vertices[(base + i) as usize].position);
        let outward = (corner(1) - corner(0))
            .cross(corner(2) - corner(0))
            .dot(Vec3::from(normal))
            > 0.0;
        if outward {
            self.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        } else {
            self.indices
                .extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
        }
    }
}

/// The template every pooled tile is stamped from.
#[derive(Clone, Debug, PartialEq)]
pub struct TilePrototype {
    /// World-space size of one tile along each axis.
    pub unit: Vec3,
    /// Local-space geometry shared by every tile.
    pub mesh: TileMesh,
}

impl TilePrototype {
    /// A cube tile of the given size.
    pub fn cube(unit: Vec3) -> Self {
        Self {
            unit,
            mesh: TileMesh::cube(),
        }
    }
}

impl Default for TilePrototype {
    fn default() -> Self {
        Self::cube(Vec3::ONE)
    }
}
