//! Per-tick state passed to every policy callback.

use sc_agent::{AgentSnapshot, AgentStore};
use sc_claim::ClaimRegistry;
use sc_coord::{Coordinator, ResourceFinder};
use sc_core::{AgentId, Tick, World};

/// Everything an agent may consult during its update.
///
/// Built once per tick by sc-sim and shared immutably across all agents of
/// the update phase.  `agents` and `world` are read-only; `coordinator` and
/// `claims` are the shared coordination state and are mutated only through
/// their own `&self` methods.
pub struct AgentContext<'a> {
    pub tick: Tick,

    /// Simulated seconds per tick, for movement integration.
    pub tick_duration_secs: f32,

    pub agents: &'a AgentStore,

    /// Targets and resources, fixed for the whole run.
    pub world: &'a World,

    pub coordinator: &'a Coordinator,

    pub claims: &'a ClaimRegistry,

    pub resources: &'a ResourceFinder,
}

impl<'a> AgentContext<'a> {
    #[inline]
    pub fn new(
        tick:               Tick,
        tick_duration_secs: f32,
        agents:             &'a AgentStore,
        world:              &'a World,
        coordinator:        &'a Coordinator,
        claims:             &'a ClaimRegistry,
        resources:          &'a ResourceFinder,
    ) -> Self {
        Self { tick, tick_duration_secs, agents, world, coordinator, claims, resources }
    }

    /// The coordinator's view of `agent` this tick.
    #[inline]
    pub fn snapshot(&self, agent: AgentId) -> AgentSnapshot {
        self.agents.snapshot(agent)
    }
}
