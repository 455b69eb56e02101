//! A policy whose agents never act.

use sc_core::{AgentId, AgentRng};

use crate::{AgentContext, AgentPolicy, Intent};

/// An [`AgentPolicy`] that always returns an empty intent list.
///
/// Useful in tests or for passive agents that only occupy space.
pub struct IdlePolicy;

impl AgentPolicy for IdlePolicy {
    fn update(
        &self,
        _agent: AgentId,
        _ctx:   &AgentContext<'_>,
        _rng:   &mut AgentRng,
    ) -> Vec<Intent> {
        vec![]
    }
}
