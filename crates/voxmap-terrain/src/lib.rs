//! Procedural terrain: pluggable 2D height noise, per-run random draws, and
//! the height-field generator that fills a [`Grid`](voxmap_voxel::Grid) with
//! pooled tiles.

mod draws;
mod height_noise;
mod heightfield;

pub use draws::{DrawSource, GenerationDraws, OFFSET_RANGE};
pub use height_noise::{ConstantNoise, HeightNoise, PerlinNoise};
pub use heightfield::{HeightFieldGenerator, column_fill};
