//! The `Sim` struct and its tick loop.

use tracing::{debug, info, warn};

use sc_agent::{AgentRngs, AgentStore};
use sc_behavior::{AgentContext, AgentPolicy, Intent};
use sc_claim::ClaimRegistry;
use sc_coord::{ConflictMonitor, Coordinator, ResourceFinder};
use sc_core::{AgentId, SimClock, SimConfig, Tick, World};

use crate::{SimObserver, SimResult, TickReport};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<P>` holds all simulation state and drives the three-phase tick loop:
///
/// 1. **Update phase** (optionally parallel with the `parallel` feature):
///    call [`AgentPolicy::update`] for every agent.  Policies talk to the
///    `Coordinator` and `ClaimRegistry` directly; both lock internally.
/// 2. **Apply phase** (sequential, ascending `AgentId` for determinism):
///    - `Move{..}`          → position and heading.
///    - `SetEnergy(e)`      → energy, clamped to `[0, max_energy]`.
///    - `HoldResource(r)`   → held resource.
///    - `Carry(r)`          → carried resource.
/// 3. **Conflict phase**: one [`ConflictMonitor::tick`] over the updated
///    positions.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: AgentPolicy> {
    /// Global configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock. Tracks the current tick and maps to simulated time.
    pub clock: SimClock,

    /// Agent state (SoA arrays).  Policies read it through `AgentContext`;
    /// only the apply phase writes it.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Targets and resources.
    pub world: World,

    /// The agent logic.  Called once per agent per tick.
    pub policy: P,

    /// Target assignments.
    pub coordinator: Coordinator,

    /// Resource claims.
    pub claims: ClaimRegistry,

    /// Nearest-first resource lookup over `world.resources`.
    pub resources: ResourceFinder,

    pub monitor: ConflictMonitor,
}

impl<P: AgentPolicy> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Start a new scenario in place.
    ///
    /// Clears every target assignment and resource claim, drops held and
    /// carried resources and the monitor's reassignment history, then notifies the
    /// policy and the observer.  Positions, energy and the clock are kept.
    pub fn reset_scenario<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        self.coordinator.clear_assignments();
        self.claims.reset_all();
        self.monitor.reset();
        self.agents.held_resource.fill(None);
        self.agents.cargo.fill(None);
        self.policy.on_scenario_reset();
        observer.on_scenario_reset(now);
        info!(tick = %now, "scenario reset");
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let report = self.process_tick(now)?;
        observer.on_tick_end(now, &report);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.agents, &self.coordinator.snapshot());
        }
        self.clock.advance();
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<TickReport> {
        // ── Phase 1: update (produce) ─────────────────────────────────────
        let intents = self.compute_intents(now);

        // ── Phase 2: apply (consume) ──────────────────────────────────────
        //
        // Intents are indexed by AgentId; applying them in that order keeps
        // results deterministic even when the update phase ran in parallel.
        for (i, agent_intents) in intents.into_iter().enumerate() {
            self.apply_intents(AgentId(i as u32), agent_intents);
        }

        // ── Phase 3: conflict pass ────────────────────────────────────────
        let conflict = self.monitor.tick(now, &self.agents, &self.coordinator)?;

        let report = TickReport::new(
            now,
            self.coordinator.assigned_count(),
            self.claims.claimed_count(),
            conflict,
        );
        debug!(
            tick          = %now,
            assigned      = report.assigned_agents,
            claimed       = report.claimed_resources,
            links         = report.links.len(),
            conflicts     = report.conflicts.len(),
            reassignments = report.reassignments.len(),
            "tick complete"
        );
        Ok(report)
    }

    /// Compute intents for every agent.
    ///
    /// With the `parallel` Cargo feature the calls run on Rayon's thread pool;
    /// each worker gets exclusive access to one agent's RNG.
    fn compute_intents(&mut self, now: Tick) -> Vec<Vec<Intent>> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let policy = &self.policy;
        let rngs   = &mut self.rngs;
        let ctx = AgentContext::new(
            now,
            self.config.tick_duration_secs,
            &self.agents,
            &self.world,
            &self.coordinator,
            &self.claims,
            &self.resources,
        );

        #[cfg(not(feature = "parallel"))]
        {
            rngs.inner
                .iter_mut()
                .enumerate()
                .map(|(i, rng)| policy.update(AgentId(i as u32), &ctx, rng))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            rngs.inner
                .par_iter_mut()
                .enumerate()
                .map(|(i, rng)| policy.update(AgentId(i as u32), &ctx, rng))
                .collect()
        }
    }

    /// Apply a single agent's intents during the sequential write phase.
    fn apply_intents(&mut self, agent: AgentId, intents: Vec<Intent>) {
        let i = agent.index();
        for intent in intents {
            match intent {
                Intent::Move { position, heading } => {
                    if !position.is_finite() || !heading.is_finite() {
                        warn!(%agent, ?position, ?heading, "ignoring non-finite move");
                        continue;
                    }
                    self.agents.position[i] = position;
                    self.agents.heading[i] = heading;
                }
                Intent::SetEnergy(energy) => self.agents.set_energy(agent, energy),
                Intent::HoldResource(resource) => self.agents.held_resource[i] = resource,
                Intent::Carry(resource) => self.agents.cargo[i] = resource,
            }
        }
    }
}
