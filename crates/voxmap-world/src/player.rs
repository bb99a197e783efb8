//! Player placement above the generated volume.

use glam::Vec3;
use voxmap_config::WorldParameters;

/// Height above the top layer the player is dropped from.
pub const DEFAULT_CLEARANCE: f32 = 5.0;

/// The host's player: a transform plus a movement controller that can be
/// switched off while the player is teleported.
pub trait PlayerBody {
    /// Enable or disable the movement controller.
    fn set_movement_enabled(&mut self, enabled: bool);

    /// Move the player to `position` in world space.
    fn set_position(&mut self, position: Vec3);
}

/// Spawn point above the horizontal center of the volume.
///
/// `(width / 2 * unit.x, height * unit.y + clearance, depth / 2 * unit.z)`
pub fn spawn_position(params: &WorldParameters, unit: Vec3, clearance: f32) -> Vec3 {
    Vec3::new(
        params.width as f32 * 0.5 * unit.x,
        params.height as f32 * unit.y + clearance,
        params.depth as f32 * 0.5 * unit.z,
    )
}

/// A player with no host behind it, for tools and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessPlayer {
    /// Current position.
    pub position: Vec3,
    /// Whether the movement controller is active.
    pub movement_enabled: bool,
}

impl Default for HeadlessPlayer {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            movement_enabled: true,
        }
    }
}

impl PlayerBody for HeadlessPlayer {
    fn set_movement_enabled(&mut self, enabled: bool) {
        self.movement_enabled = enabled;
    }

    fn set_position(&mut self, position: Vec3) {
        tracing::debug!(x = position.x, y = position.y, z = position.z, "Player moved");
        self.position = position;
    }
}
