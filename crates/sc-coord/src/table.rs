//! `AssignmentTable`: the current agent → target mapping.

use std::collections::{BTreeMap, HashMap};

use sc_core::{AgentId, TargetId};

use crate::{CoordError, CoordResult};

/// Forward and reverse assignment maps.
///
/// The reverse map stores a holder list rather than a single agent so that an
/// exclusivity violation stays observable (`holders`, `check_invariants`)
/// instead of silently overwriting one holder.  Under the `Coordinator` every
/// list has at most one element.
#[derive(Clone, Debug, Default)]
pub struct AssignmentTable {
    by_agent:  BTreeMap<AgentId, TargetId>,
    by_target: HashMap<TargetId, Vec<AgentId>>,
}

impl AssignmentTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_agent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_agent.is_empty()
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<TargetId> {
        self.by_agent.get(&agent).copied()
    }

    /// Every agent recorded against `target`, ascending.
    pub fn holders(&self, target: TargetId) -> &[AgentId] {
        self.by_target.get(&target).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The lowest-id holder of `target`, if any.
    pub fn holder(&self, target: TargetId) -> Option<AgentId> {
        self.holders(target).first().copied()
    }

    #[inline]
    pub fn is_taken(&self, target: TargetId) -> bool {
        !self.holders(target).is_empty()
    }

    /// `(agent, target)` pairs in ascending agent order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, TargetId)> + '_ {
        self.by_agent.iter().map(|(&a, &t)| (a, t))
    }

    /// Record `agent → target`, replacing any previous entry for `agent`.
    ///
    /// Does not check whether `target` is already held; callers that need
    /// exclusivity test [`is_taken`](Self::is_taken) first.
    pub(crate) fn insert(&mut self, agent: AgentId, target: TargetId) -> Option<TargetId> {
        let previous = self.remove(agent);
        self.by_agent.insert(agent, target);
        let holders = self.by_target.entry(target).or_default();
        if let Err(pos) = holders.binary_search(&agent) {
            holders.insert(pos, agent);
        }
        previous
    }

    pub(crate) fn remove(&mut self, agent: AgentId) -> Option<TargetId> {
        let target = self.by_agent.remove(&agent)?;
        if let Some(holders) = self.by_target.get_mut(&target) {
            holders.retain(|&a| a != agent);
            if holders.is_empty() {
                self.by_target.remove(&target);
            }
        }
        Some(target)
    }

    pub(crate) fn clear(&mut self) {
        self.by_agent.clear();
        self.by_target.clear();
    }

    /// Fails on the lowest target id held by more than one agent.
    pub fn check_invariants(&self) -> CoordResult<()> {
        let violation = self
            .by_target
            .iter()
            .filter(|(_, holders)| holders.len() > 1)
            .min_by_key(|&(&target, _)| target);
        match violation {
            Some((&target, holders)) => Err(CoordError::InvariantViolation {
                target,
                holders: holders.clone(),
            }),
            None => Ok(()),
        }
    }
}
