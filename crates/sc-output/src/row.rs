//! Plain data row types written by output backends.
//!
//! Field order is column order: backends serialize rows positionally.

use serde::Serialize;

/// One agent's state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        f32,
    pub y:        f32,
    pub z:        f32,
    pub energy:   f32,
    /// Assigned target; `u32::MAX` if none.
    pub target:   u32,
    /// Resource pursued or carried; `u32::MAX` if none.
    pub resource: u32,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickSummaryRow {
    pub tick:              u64,
    pub assigned_agents:   u64,
    pub claimed_resources: u64,
    pub comm_links:        u64,
    pub conflicts:         u64,
    pub reassignments:     u64,
}
