//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! RNGs live in a separate struct so the update phase can hold `&AgentStore`
//! (shared read of world state) and `&mut AgentRngs` (exclusive per-agent
//! RNG) at the same time:
//!
//! ```ignore
//! let store: &AgentStore = &sim.agents;
//! let intents = sim.rngs.inner
//!     .par_iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| policy.update(AgentId(i as u32), &ctx, rng))
//!     .collect::<Vec<_>>();
//! ```

use sc_core::{AgentId, AgentRng, ResourceId, Vec3};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, indexed by `AgentId`.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentSnapshot ─────────────────────────────────────────────────────────────

/// The read-only per-agent view consumed by the coordination layer each tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub position:   Vec3,
    /// Facing direction; need not be normalised.
    pub heading:    Vec3,
    pub energy:     f32,
    pub max_energy: f32,
}

impl AgentSnapshot {
    /// `energy / max_energy`, or `0.0` when `max_energy` is not positive.
    #[inline]
    pub fn energy_fraction(&self) -> f32 {
        if self.max_energy > 0.0 {
            self.energy / self.max_energy
        } else {
            0.0
        }
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them.  Fields are `pub` for direct indexed access; only
/// the apply phase of `sc-sim` writes them during a run.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    pub position: Vec<Vec3>,

    pub heading: Vec<Vec3>,

    /// Current energy in `[0, max_energy]`.
    pub energy: Vec<f32>,

    pub max_energy: Vec<f32>,

    /// The resource this agent is pursuing (claim held), if any.  Target
    /// assignments are not stored here; they live in the coordinator's
    /// assignment table.
    pub held_resource: Vec<Option<ResourceId>>,

    /// A resource already picked up and being carried.  Its claim has been
    /// released; policies must keep it out of further claims until the
    /// scenario is reset.
    pub cargo: Vec<Option<ResourceId>>,
}

impl AgentStore {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// Snapshot of one agent.  Panics if `agent` is out of range.
    #[inline]
    pub fn snapshot(&self, agent: AgentId) -> AgentSnapshot {
        let i = agent.index();
        AgentSnapshot {
            position:   self.position[i],
            heading:    self.heading[i],
            energy:     self.energy[i],
            max_energy: self.max_energy[i],
        }
    }

    /// Set energy, clamped to `[0, max_energy]`.
    pub fn set_energy(&mut self, agent: AgentId, energy: f32) {
        let i = agent.index();
        self.energy[i] = energy.clamp(0.0, self.max_energy[i].max(0.0));
    }

    /// Refill every agent to its maximum energy.
    pub fn refill_energy(&mut self) {
        self.energy.copy_from_slice(&self.max_energy);
    }

    pub(crate) fn new(count: usize, max_energy: f32) -> Self {
        Self {
            count,
            position:      vec![Vec3::ZERO; count],
            heading:       vec![Vec3::Z; count],
            energy:        vec![max_energy; count],
            max_energy:    vec![max_energy; count],
            held_resource: vec![None; count],
            cargo:         vec![None; count],
        }
    }
}
