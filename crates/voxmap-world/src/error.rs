//! Orchestrator error types.

use crate::state::RegenState;

/// Errors returned when a regeneration cannot start.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegenError {
    /// Another regeneration is in progress; the request was queued instead.
    #[error("regeneration already in progress ({0:?}); request queued")]
    Busy(RegenState),
}
