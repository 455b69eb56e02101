//! `Coordinator`: scoring-based target assignment.
//!
//! All table mutations happen inside one `parking_lot::Mutex` critical
//! section per call, so agents updated on different threads observe each
//! request as atomic and two requests can never pick the same target.

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use sc_agent::AgentSnapshot;
use sc_core::{AgentId, ScoringWeights, Target, TargetId, World};

use crate::{AssignmentTable, CoordError, CoordResult, score};

pub struct Coordinator {
    targets: Vec<Target>,
    weights: ScoringWeights,
    table:   Mutex<AssignmentTable>,
}

impl Coordinator {
    /// Build a coordinator over `targets`.  Iteration order of `targets` is
    /// the tie-break order of [`request_assignment`](Self::request_assignment).
    pub fn new(targets: Vec<Target>, weights: ScoringWeights) -> Self {
        Self { targets, weights, table: Mutex::new(AssignmentTable::new()) }
    }

    pub fn from_world(world: &World, weights: ScoringWeights) -> Self {
        Self::new(world.targets.clone(), weights)
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Assign the best-scoring unheld target to `agent`.
    ///
    /// Returns `Ok(None)` and leaves the table untouched when every target is
    /// held.  On success any previous assignment of `agent` is replaced.
    pub fn request_assignment(
        &self,
        agent: AgentId,
        snapshot: &AgentSnapshot,
    ) -> CoordResult<Option<TargetId>> {
        check_agent(agent)?;
        let mut table = self.table.lock();
        Ok(self.assign_locked(&mut table, agent, snapshot))
    }

    /// Drop `agent`'s assignment.  Returns the target it held, if any.
    pub fn release(&self, agent: AgentId) -> CoordResult<Option<TargetId>> {
        check_agent(agent)?;
        let released = self.table.lock().remove(agent);
        match released {
            Some(target) => debug!(%agent, %target, "target released"),
            None => warn!(%agent, "release requested for agent with no assignment"),
        }
        Ok(released)
    }

    /// Release then request in one critical section.
    ///
    /// The released target is a candidate again, so an agent may be handed
    /// back the same target when no one else holds it.
    pub fn reassign(
        &self,
        agent: AgentId,
        snapshot: &AgentSnapshot,
    ) -> CoordResult<Option<TargetId>> {
        check_agent(agent)?;
        let mut table = self.table.lock();
        if let Some(target) = table.remove(agent) {
            debug!(%agent, %target, "target released for reassignment");
        }
        Ok(self.assign_locked(&mut table, agent, snapshot))
    }

    /// Empty the table at a scenario boundary.
    pub fn clear_assignments(&self) {
        let mut table = self.table.lock();
        let cleared = table.len();
        table.clear();
        info!(cleared, "assignments cleared");
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn assignment_of(&self, agent: AgentId) -> Option<TargetId> {
        self.table.lock().get(agent)
    }

    pub fn holder_of(&self, target: TargetId) -> Option<AgentId> {
        self.table.lock().holder(target)
    }

    pub fn holders_of(&self, target: TargetId) -> Vec<AgentId> {
        self.table.lock().holders(target).to_vec()
    }

    pub fn assigned_count(&self) -> usize {
        self.table.lock().len()
    }

    /// A consistent copy of the whole table.
    pub fn snapshot(&self) -> AssignmentTable {
        self.table.lock().clone()
    }

    /// Exclusivity plus "every assigned target is known".
    pub fn check_invariants(&self) -> CoordResult<()> {
        let table = self.table.lock();
        table.check_invariants()?;
        for (_, target) in table.iter() {
            if !self.targets.iter().any(|t| t.id == target) {
                return Err(CoordError::UnknownTarget(target));
            }
        }
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Strictly-greater comparison starting at `f32::MIN`: the first target
    /// in iteration order wins ties, and non-finite scores never win.
    fn assign_locked(
        &self,
        table: &mut AssignmentTable,
        agent: AgentId,
        snapshot: &AgentSnapshot,
    ) -> Option<TargetId> {
        let mut best: Option<TargetId> = None;
        let mut best_score = f32::MIN;
        for target in self.targets.iter().filter(|t| !table.is_taken(t.id)) {
            let s = score(snapshot, target.position, &self.weights);
            if s > best_score {
                best_score = s;
                best = Some(target.id);
            }
        }

        let target = best?;
        table.insert(agent, target);
        debug!(%agent, %target, score = best_score, "target assigned");
        Some(target)
    }

    /// Record `agent → target` without the exclusivity check.
    #[cfg(test)]
    pub(crate) fn force_assign(&self, agent: AgentId, target: TargetId) {
        self.table.lock().insert(agent, target);
    }
}

#[inline]
fn check_agent(agent: AgentId) -> CoordResult<()> {
    if agent.is_valid() { Ok(()) } else { Err(CoordError::InvalidAgent(agent)) }
}
