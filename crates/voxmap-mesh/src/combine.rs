//! Merging every surviving tile into one mesh and one collision volume.
//!
//! After culling, the grid's tiles are baked into a single [`CombinedMesh`]
//! owned by a [`MeshAnchor`]. From then on the anchor is the only render and
//! collision surface for the whole generated volume.

use glam::{Mat3, Vec3};
use voxmap_voxel::Grid;

use crate::tile_mesh::{MeshVertex, TilePrototype};

/// An axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// The box enclosing every point in `points`, or `None` if empty.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Center point.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Collision volume derived from a combined mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshCollider {
    /// World-space bounds of the mesh.
    pub bounds: Aabb,
    /// Number of triangles the collider is built from.
    pub triangle_count: usize,
}

/// The merged geometry of every tile in the grid.
///
/// Indices are always `u32`; 16-bit indices would overflow at 2 731 cube
/// tiles, well below the largest configurable grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CombinedMesh {
    /// World-space vertices.
    pub vertices: Vec<MeshVertex>,
    /// Triangle indices into `vertices`.
    pub indices: Vec<u32>,
    /// Collision volume, present whenever the mesh has triangles.
    pub collider: Option<MeshCollider>,
}

impl CombinedMesh {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if the mesh has no geometry.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.collider = None;
    }
}

/// Bake every tile in `grid` into `out`, replacing its previous contents.
///
/// Each prototype vertex is scaled by the tile unit and translated to the
/// tile's position. An empty grid produces an empty mesh with no collider.
///
/// # Panics
///
/// Panics if the merged vertex count would not fit a `u32` index. The check
/// runs before any geometry is written.
pub fn combine_tiles(grid: &Grid, prototype: &TilePrototype, out: &mut CombinedMesh) {
    out.clear();

    let source = &prototype.mesh;
    let vertex_total = grid.len().checked_mul(source.vertices.len());
    assert!(
        vertex_total.is_some_and(|n| n <= u32::MAX as usize),
        "combined mesh of {} tiles exceeds the u32 index range",
        grid.len()
    );
    let vertex_total = vertex_total.unwrap_or_default();

    out.vertices.reserve(vertex_total);
    out.indices.reserve(grid.len() * source.indices.len());

    let unit = prototype.unit;
    let normal_matrix = Mat3::from_diagonal(unit.recip());

    for tile in grid.iter() {
        let base = out.vertices.len() as u32;
        let origin = tile.position();
        out.vertices.extend(source.vertices.iter().map(|v| MeshVertex {
            position: (origin + Vec3::from(v.position) * unit).to_array(),
            normal: (normal_matrix * Vec3::from(v.normal))
                .normalize_or_zero()
                .to_array(),
            uv: v.uv,
        }));
        out.indices.extend(source.indices.iter().map(|&i| base + i));
    }

    if !out.indices.is_empty() {
        let bounds = Aabb::from_points(out.vertices.iter().map(|v| Vec3::from(v.position)));
        out.collider = bounds.map(|bounds| MeshCollider {
            bounds,
            triangle_count: out.indices.len() / 3,
        });
    }

    tracing::debug!(
        tiles = grid.len(),
        vertices = out.vertices.len(),
        triangles = out.indices.len() / 3,
        "Combined tile meshes"
    );
}

/// Fixed owner of the combined mesh.
///
/// The mesh is replaced wholesale on each rebuild, never patched. Buffers of
/// a discarded mesh are kept and refilled by the next rebuild.
#[derive(Debug, Default)]
pub struct MeshAnchor {
    current: Option<CombinedMesh>,
    spare: CombinedMesh,
}

impl MeshAnchor {
    /// Creates an anchor with no mesh attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// The attached mesh, if one has been built since the last discard.
    pub fn mesh(&self) -> Option<&CombinedMesh> {
        self.current.as_ref()
    }

    /// The attached collider, if any.
    pub fn collider(&self) -> Option<&MeshCollider> {
        self.current.as_ref().and_then(|m| m.collider.as_ref())
    }

    /// Detach the current mesh and its collider.
    pub fn discard(&mut self) {
        if let Some(mut mesh) = self.current.take() {
            mesh.clear();
            self.spare = mesh;
        }
    }

    /// Discard the current mesh and build a new one from `grid`.
    pub fn rebuild(&mut self, grid: &Grid, prototype: &TilePrototype) -> &CombinedMesh {
        self.discard();
        let mut mesh = std::mem::take(&mut self.spare);
        combine_tiles(grid, prototype, &mut mesh);
        self.current.insert(mesh)
    }
}

#[cfg(test)]
mod tests {
    use voxmap_voxel::{TilePool, VoxelCoord};

    use super::*;

    fn grid_of(pool: &mut TilePool, coords: &[VoxelCoord], unit: Vec3) -> Grid {
        let mut grid = Grid::new();
        for &c in coords {
            grid.push(pool.acquire(c, c.to_world(unit)));
        }
        grid
    }

    #[test]
    fn test_empty_grid_yields_empty_mesh() {
        let mut mesh = CombinedMesh::default();
        combine_tiles(&Grid::new(), &TilePrototype::default(), &mut mesh);
        assert!(mesh.is_empty());
        assert!(mesh.indices.is_empty());
        assert!(mesh.collider.is_none());
    }

    #[test]
    fn test_vertex_count_is_sum_of_tiles() {
        let mut pool = TilePool::new();
        let coords: Vec<_> = (0..5).map(|x| VoxelCoord::new(x, 0, 0)).collect();
        let grid = grid_of(&mut pool, &coords, Vec3::ONE);
        let proto = TilePrototype::default();

        let mut mesh = CombinedMesh::default();
        combine_tiles(&grid, &proto, &mut mesh);

        assert_eq!(mesh.vertex_count(), 5 * proto.mesh.vertices.len());
        assert_eq!(mesh.indices.len(), 5 * proto.mesh.indices.len());
        assert_eq!(mesh.collider.map(|c| c.triangle_count), Some(5 * 12));
    }

    #[test]
    fn test_indices_reference_own_tile_vertices() {
        let mut pool = TilePool::new();
        let grid = grid_of(
            &mut pool,
            &[VoxelCoord::new(0, 0, 0), VoxelCoord::new(3, 0, 0)],
            Vec3::ONE,
        );
        let mut mesh = CombinedMesh::default();
        combine_tiles(&grid, &TilePrototype::default(), &mut mesh);

        assert!(mesh.indices[..36].iter().all(|&i| i < 24));
        assert!(mesh.indices[36..].iter().all(|&i| (24..48).contains(&i)));
    }

    #[test]
    fn test_vertices_transformed_to_world() {
        let unit = Vec3::new(2.0, 1.0, 0.5);
        let mut pool = TilePool::new();
        let grid = grid_of(&mut pool, &[VoxelCoord::new(1, 2, 3)], unit);
        let mut mesh = CombinedMesh::default();
        combine_tiles(&grid, &TilePrototype::cube(unit), &mut mesh);

        let bounds = mesh.collider.unwrap().bounds;
        let center = VoxelCoord::new(1, 2, 3).to_world(unit);
        assert!((bounds.center() - center).length() < 1e-5);
        assert!((bounds.size() - unit).length() < 1e-5);
        for v in &mesh.vertices {
            assert!((Vec3::from(v.normal).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_collider_spans_all_tiles() {
        let mut pool = TilePool::new();
        let grid = grid_of(
            &mut pool,
            &[VoxelCoord::new(0, 0, 0), VoxelCoord::new(4, 2, 6)],
            Vec3::ONE,
        );
        let mut mesh = CombinedMesh::default();
        combine_tiles(&grid, &TilePrototype::default(), &mut mesh);

        let bounds = mesh.collider.unwrap().bounds;
        assert_eq!(bounds.min, Vec3::splat(-0.5));
        assert_eq!(bounds.max, Vec3::new(4.5, 2.5, 6.5));
    }

    #[test]
    fn test_anchor_rebuild_replaces_mesh() {
        let mut pool = TilePool::new();
        let proto = TilePrototype::default();
        let mut anchor = MeshAnchor::new();
        assert!(anchor.mesh().is_none());

        let big = grid_of(
            &mut pool,
            &[VoxelCoord::new(0, 0, 0), VoxelCoord::new(1, 0, 0)],
            Vec3::ONE,
        );
        assert_eq!(anchor.rebuild(&big, &proto).vertex_count(), 48);

        let small = grid_of(&mut pool, &[VoxelCoord::new(5, 5, 5)], Vec3::ONE);
        assert_eq!(anchor.rebuild(&small, &proto).vertex_count(), 24);
        assert!(anchor.collider().is_some());
    }

    #[test]
    fn test_anchor_discard_drops_collider() {
        let mut pool = TilePool::new();
        let grid = grid_of(&mut pool, &[VoxelCoord::new(0, 0, 0)], Vec3::ONE);
        let mut anchor = MeshAnchor::new();
        anchor.rebuild(&grid, &TilePrototype::default());

        anchor.discard();
        assert!(anchor.mesh().is_none());
        assert!(anchor.collider().is_none());
    }
}
