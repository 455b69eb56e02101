//! Fluent builder for constructing a [`Sim`].

use sc_agent::{AgentRngs, AgentStore};
use sc_behavior::AgentPolicy;
use sc_claim::ClaimRegistry;
use sc_coord::{ConflictMonitor, Coordinator, ResourceFinder};
use sc_core::{SimConfig, World};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, tick duration, coordination settings
/// - [`AgentStore`] + [`AgentRngs`] — from [`sc_agent::AgentStoreBuilder`]
/// - [`World`] — every target and resource, known up front
/// - `P: AgentPolicy` — the agent logic
///
/// `build` validates the inputs and wires the coordination layer together:
/// the `Coordinator` and `ResourceFinder` receive the world directly, and the
/// `ConflictMonitor` receives the coordination settings.
///
/// # Example
///
/// ```rust,ignore
/// let (store, rngs) = AgentStoreBuilder::new(n, seed).build();
/// let mut sim = SimBuilder::new(config, store, rngs, world, IdlePolicy).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: AgentPolicy> {
    config: SimConfig,
    agents: AgentStore,
    rngs:   AgentRngs,
    world:  World,
    policy: P,
}

impl<P: AgentPolicy> SimBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(
        config: SimConfig,
        agents: AgentStore,
        rngs:   AgentRngs,
        world:  World,
        policy: P,
    ) -> Self {
        Self { config, agents, rngs, world, policy }
    }

    /// Validate inputs, build the coordination layer, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let agent_count = self.agents.count;
        if self.rngs.len() != agent_count {
            return Err(SimError::AgentCountMismatch {
                expected: agent_count,
                got:      self.rngs.len(),
                what:     "agent RNGs",
            });
        }

        let coordination = &self.config.coordination;
        let coordinator = Coordinator::from_world(&self.world, coordination.scoring);
        let resources = ResourceFinder::from_world(&self.world, coordination);
        let monitor = ConflictMonitor::new(coordination);

        Ok(Sim {
            clock:       self.config.make_clock(),
            config:      self.config,
            agents:      self.agents,
            rngs:        self.rngs,
            world:       self.world,
            policy:      self.policy,
            coordinator,
            claims:      ClaimRegistry::new(),
            resources,
            monitor,
        })
    }
}
