//! `ConflictMonitor`: per-tick detection of agents sharing a target.
//!
//! Each tick the monitor rebuilds the proximity graph, then visits agents in
//! ascending id order.  An agent is checked only if it holds a target and has
//! at least one agent within communication range.  If anyone else is also
//! recorded against that target, the agent is sent back through
//! [`Coordinator::reassign`].
//!
//! With two holders of one target, the lower id is visited first and
//! reassigned; by the time the higher id is visited it is the sole holder, so
//! it keeps the target.

use std::collections::HashMap;

use tracing::debug;

use sc_agent::AgentStore;
use sc_core::{AgentId, CoordinationConfig, TargetId, Tick};
use sc_spatial::{CommLink, ProximityGraph};

use crate::{CoordResult, Coordinator};

/// An agent found sharing its target with another agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conflict {
    pub agent:   AgentId,
    pub target:  TargetId,
    /// Every holder of `target` at detection time, `agent` included.
    pub holders: Vec<AgentId>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Reassignment {
    pub agent: AgentId,
    pub old:   TargetId,
    pub new:   Option<TargetId>,
}

/// What one monitor tick saw and did.
#[derive(Clone, Debug, Default)]
pub struct ConflictReport {
    /// In-range agent pairs, `a < b`.
    pub links:         Vec<CommLink>,
    pub conflicts:     Vec<Conflict>,
    pub reassignments: Vec<Reassignment>,
}

pub struct ConflictMonitor {
    range:           f32,
    cooldown_ticks:  u64,
    last_reassigned: HashMap<AgentId, Tick>,
}

impl ConflictMonitor {
    pub fn new(config: &CoordinationConfig) -> Self {
        Self {
            range:           config.communication_range,
            cooldown_ticks:  config.reassign_cooldown_ticks,
            last_reassigned: HashMap::new(),
        }
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    /// Run one detection pass over `agents`.
    pub fn tick(
        &mut self,
        now: Tick,
        agents: &AgentStore,
        coordinator: &Coordinator,
    ) -> CoordResult<ConflictReport> {
        let graph = ProximityGraph::build(&agents.position, self.range);
        let mut report = ConflictReport { links: graph.links().collect(), ..Default::default() };

        for agent in agents.agent_ids() {
            if !graph.has_neighbors(agent) {
                continue;
            }
            let Some(target) = coordinator.assignment_of(agent) else { continue };
            let holders = coordinator.holders_of(target);
            if holders.iter().all(|&h| h == agent) {
                continue;
            }
            report.conflicts.push(Conflict { agent, target, holders });

            if self.cooling_down(agent, now) {
                debug!(%agent, %target, "conflict ignored during reassignment cooldown");
                continue;
            }
            let new = coordinator.reassign(agent, &agents.snapshot(agent))?;
            self.last_reassigned.insert(agent, now);
            debug!(%agent, old = %target, new = ?new, "conflict reassignment");
            report.reassignments.push(Reassignment { agent, old: target, new });
        }

        Ok(report)
    }

    /// Forget reassignment history at a scenario boundary.
    pub fn reset(&mut self) {
        self.last_reassigned.clear();
    }

    fn cooling_down(&self, agent: AgentId, now: Tick) -> bool {
        self.cooldown_ticks > 0
            && self
                .last_reassigned
                .get(&agent)
                .is_some_and(|&t| now.since(t) < self.cooldown_ticks)
    }
}
