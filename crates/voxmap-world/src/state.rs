//! Pipeline states.

/// Stage of the regeneration pipeline.
///
/// A run walks every state in declaration order and ends back at `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RegenState {
    /// Waiting for a trigger.
    #[default]
    Idle,
    /// Returning active tiles to the pool and dropping the old mesh.
    Resetting,
    /// Filling the grid from the height field.
    Generating,
    /// Releasing interior tiles.
    Culling,
    /// Baking the grid into the combined mesh.
    Combining,
    /// Teleporting the player above the new terrain.
    PlacingPlayer,
}

impl RegenState {
    /// The state that follows this one.
    pub fn next(self) -> Self {
        match self {
            Self::Idle => Self::Resetting,
            Self::Resetting => Self::Generating,
            Self::Generating => Self::Culling,
            Self::Culling => Self::Combining,
            Self::Combining => Self::PlacingPlayer,
            Self::PlacingPlayer => Self::Idle,
        }
    }
}
