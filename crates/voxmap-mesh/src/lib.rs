//! Tile geometry, interior culling, and mesh combination.

pub mod combine;
pub mod face_direction;
pub mod occlusion;
pub mod tile_mesh;
pub mod visibility;

pub use combine::{Aabb, CombinedMesh, MeshAnchor, MeshCollider, combine_tiles};
pub use face_direction::FaceDirection;
pub use occlusion::OcclusionMask;
pub use tile_mesh::{MeshVertex, TileMesh, TilePrototype};
pub use visibility::{VisibilityCuller, is_interior, occlusion_mask};
