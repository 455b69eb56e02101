//! Agent intents: the state changes an agent requests during its update.

use sc_core::{ResourceId, Vec3};

/// A change an agent wants applied to its own state this tick.
///
/// Produced by [`AgentPolicy::update`][crate::AgentPolicy::update] and applied
/// by sc-sim after every agent has updated.  When several intents touch the
/// same field, the last one wins.
///
/// Target assignments are not intents: agents call the `Coordinator`
/// directly, because exclusivity must be decided at request time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// New position and facing direction.
    Move { position: Vec3, heading: Vec3 },

    /// New energy level, clamped to `[0, max_energy]` when applied.
    SetEnergy(f32),

    /// Record the resource the agent is pursuing or carrying.  `None` clears
    /// it.  The claim itself is taken and released through the registry.
    HoldResource(Option<ResourceId>),

    /// Record the resource the agent has picked up.  `None` means delivered
    /// or dropped.
    Carry(Option<ResourceId>),
}
