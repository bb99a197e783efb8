//! Bitmask recording which of a tile's six neighbors are occupied.

use crate::face_direction::FaceDirection;

/// Bitmask of occupied neighbors around a tile.
///
/// Bit 0 = +X, Bit 1 = −X, Bit 2 = +Y, Bit 3 = −Y, Bit 4 = +Z, Bit 5 = −Z.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OcclusionMask(pub u8);

impl OcclusionMask {
    /// No neighbors present.
    pub const NONE: Self = Self(0);
    /// All six neighbors present.
    pub const ALL: Self = Self(0b0011_1111);

    /// Returns `true` if the neighbor in the given direction is present.
    pub fn is_blocked(self, direction: FaceDirection) -> bool {
        self.0 & (1 << direction as u8) != 0
    }

    /// Marks the neighbor in the given direction as present.
    pub fn set_blocked(&mut self, direction: FaceDirection) {
        self.0 |= 1 << direction as u8;
    }

    /// Number of blocked directions (0–6).
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns `true` when every face is covered.
    pub fn is_enclosed(self) -> bool {
        self.count() > 5
    }
}
