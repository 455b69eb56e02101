use thiserror::Error;

use sc_core::{AgentId, TargetId};

#[derive(Debug, Error)]
pub enum CoordError {
    /// A caller passed a malformed agent identity.
    #[error("invalid agent id {0}")]
    InvalidAgent(AgentId),

    #[error("assignment table references unknown target {0}")]
    UnknownTarget(TargetId),

    /// More than one agent is recorded against the same target.
    #[error("target {target} is held by {} agents: {holders:?}", holders.len())]
    InvariantViolation {
        target:  TargetId,
        holders: Vec<AgentId>,
    },
}

pub type CoordResult<T> = Result<T, CoordError>;
