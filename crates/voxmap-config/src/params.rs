//! World generation parameters and their bounds.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Inclusive bounds for `height`, `width`, and `depth` (in voxels).
pub const DIMENSION_BOUNDS: RangeInclusive<u32> = 8..=128;

/// Inclusive bounds for `min_scale` and `max_scale` (noise units per voxel).
pub const SCALE_BOUNDS: RangeInclusive<f32> = 8.0..=128.0;

/// Parameters controlling the size and roughness of the generated volume.
///
/// This is a plain `Copy` value: the generator takes a snapshot at the start
/// of every run, so later edits to the live settings never leak into a run
/// that is already in progress.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldParameters {
    /// Number of voxel layers along Y.
    pub height: u32,
    /// Number of voxel columns along X.
    pub width: u32,
    /// Number of voxel columns along Z. Also scales the noise amplitude.
    pub depth: u32,
    /// Lower bound for the randomly drawn noise scale.
    pub min_scale: f32,
    /// Upper bound for the randomly drawn noise scale.
    pub max_scale: f32,
}

impl Default for WorldParameters {
    fn default() -> Self {
        Self {
            height: 8,
            width: 8,
            depth: 8,
            min_scale: 16.0,
            max_scale: 24.0,
        }
    }
}

impl WorldParameters {
    /// Build a validated parameter set.
    pub fn new(
        height: u32,
        width: u32,
        depth: u32,
        min_scale: f32,
        max_scale: f32,
    ) -> Result<Self, ConfigError> {
        let params = Self {
            height,
            width,
            depth,
            min_scale,
            max_scale,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every field against its documented bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("height", self.height)?;
        check_dimension("width", self.width)?;
        check_dimension("depth", self.depth)?;
        check_scale("min_scale", self.min_scale)?;
        check_scale("max_scale", self.max_scale)?;
        if self.min_scale > self.max_scale {
            return Err(ConfigError::InvertedScale {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        Ok(())
    }

    /// Returns `true` if [`validate`](Self::validate) would succeed.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Total number of voxel cells in the bounding volume.
    pub fn volume(&self) -> usize {
        self.height as usize * self.width as usize * self.depth as usize
    }
}

fn check_dimension(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if DIMENSION_BOUNDS.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfBounds {
            field,
            value: value as f64,
            min: *DIMENSION_BOUNDS.start() as f64,
            max: *DIMENSION_BOUNDS.end() as f64,
        })
    }
}

fn check_scale(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails `contains`, so it is rejected here as well.
    if SCALE_BOUNDS.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfBounds {
            field,
            value: value as f64,
            min: *SCALE_BOUNDS.start() as f64,
            max: *SCALE_BOUNDS.end() as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(WorldParameters::default().is_valid());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(WorldParameters::new(8, 8, 8, 8.0, 8.0).is_ok());
        assert!(WorldParameters::new(128, 128, 128, 128.0, 128.0).is_ok());
    }

    #[test]
    fn test_dimension_below_minimum_rejected() {
        let err = WorldParameters::new(7, 8, 8, 16.0, 24.0).unwrap_err();
        match err {
            ConfigError::OutOfBounds { field, value, .. } => {
                assert_eq!(field, "height");
                assert_eq!(value, 7.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dimension_above_maximum_rejected() {
        let err = WorldParameters::new(8, 129, 8, 16.0, 24.0).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfBounds { field: "width", .. }
        ));
    }

    #[test]
    fn test_scale_out_of_range_rejected() {
        assert!(WorldParameters::new(8, 8, 8, 4.0, 24.0).is_err());
        assert!(WorldParameters::new(8, 8, 8, 16.0, 200.0).is_err());
        assert!(WorldParameters::new(8, 8, 8, f32::NAN, 24.0).is_err());
    }

    #[test]
    fn test_inverted_scale_rejected() {
        let err = WorldParameters::new(8, 8, 8, 32.0, 16.0).unwrap_err();
        assert!(matches!(err, ConfigError::InvertedScale { .. }));
    }

    #[test]
    fn test_volume() {
        let params = WorldParameters::new(10, 20, 30, 16.0, 16.0).unwrap();
        assert_eq!(params.volume(), 6000);
    }
}
