//! 2D height noise used to carve the height field.

use noise::{NoiseFn, Perlin};

/// A deterministic, continuous 2D noise function with output in `[0, 1]`.
///
/// Implementations must return identical values for identical inputs and must
/// not jump at integer lattice boundaries.
pub trait HeightNoise {
    /// Sample the noise at `(x, z)`.
    fn sample(&self, x: f64, z: f64) -> f64;
}

/// Gradient (Perlin) noise remapped from `[-1, 1]` to `[0, 1]`.
#[derive(Clone, Debug)]
pub struct PerlinNoise {
    perlin: Perlin,
}

impl PerlinNoise {
    /// Create a Perlin source with the given permutation seed.
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(Perlin::DEFAULT_SEED)
    }
}

impl HeightNoise for PerlinNoise {
    fn sample(&self, x: f64, z: f64) -> f64 {
        let raw = self.perlin.get([x, z]);
        (raw * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}

/// Noise that returns the same value everywhere. Produces flat slabs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantNoise(pub f64);

impl HeightNoise for ConstantNoise {
    fn sample(&self, _x: f64, _z: f64) -> f64 {
        self.0
    }
}
