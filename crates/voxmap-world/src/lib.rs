//! Regeneration orchestration: sequences reset, generation, culling, mesh
//! combination, and player placement into one synchronous pipeline.

mod error;
mod orchestrator;
mod player;
mod report;
mod state;

pub use error::RegenError;
pub use orchestrator::Orchestrator;
pub use player::{DEFAULT_CLEARANCE, HeadlessPlayer, PlayerBody, spawn_position};
pub use report::RegenerationReport;
pub use state::RegenState;
