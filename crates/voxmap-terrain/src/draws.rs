//! Per-run random draws.
//!
//! Each regeneration picks one noise scale and one 2D offset. Drawing them
//! from a seeded [`ChaCha8Rng`] makes a whole session replayable from a single
//! `u64`, while injecting [`GenerationDraws`] directly pins a single run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use voxmap_config::WorldParameters;

/// Default half-width of the offset range on each axis.
pub const OFFSET_RANGE: f32 = 1024.0;

/// The random values that fully determine one generated landscape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationDraws {
    /// Noise scale in `[min_scale, max_scale]`.
    pub scale: f32,
    /// Noise-space X offset.
    pub offset_x: f32,
    /// Noise-space Z offset.
    pub offset_z: f32,
}

impl GenerationDraws {
    /// Draws with a fixed scale and offset.
    pub fn fixed(scale: f32, offset_x: f32, offset_z: f32) -> Self {
        Self {
            scale,
            offset_x,
            offset_z,
        }
    }
}

/// Seeded source of [`GenerationDraws`].
#[derive(Clone, Debug)]
pub struct DrawSource {
    rng: ChaCha8Rng,
    seed: u64,
    offset_range: f32,
}

impl DrawSource {
    /// A reproducible source.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            offset_range: OFFSET_RANGE,
        }
    }

    /// A source seeded from the thread RNG. The chosen seed is available via
    /// [`seed`](Self::seed) so a surprising world can be replayed.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    /// Use `[-range, range]` for offsets instead of [`OFFSET_RANGE`].
    ///
    /// Non-finite or negative ranges collapse to zero.
    pub fn with_offset_range(mut self, range: f32) -> Self {
        self.offset_range = if range.is_finite() { range.max(0.0) } else { 0.0 };
        self
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw the scale and offsets for one run.
    pub fn draw(&mut self, params: &WorldParameters) -> GenerationDraws {
        let scale = self.rng.random_range(params.min_scale..=params.max_scale);
        let range = self.offset_range;
        let offset_x = self.rng.random_range(-range..=range);
        let offset_z = self.rng.random_range(-range..=range);
        GenerationDraws {
            scale,
            offset_x,
            offset_z,
        }
    }
}
