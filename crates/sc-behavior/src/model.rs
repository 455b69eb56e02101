//! The `AgentPolicy` trait: the extension point for agent logic.

use sc_core::{AgentId, AgentRng};

use crate::{AgentContext, Intent};

/// Pluggable agent decision logic.
///
/// Locomotion, perception and any reward logic live behind this trait; the
/// coordination layer only sees the resulting state and the calls made
/// through [`AgentContext`].
///
/// # Thread safety
///
/// With sc-sim's `parallel` feature, `update` runs for many agents at once
/// on Rayon workers, so implementations must be `Send + Sync`.  Per-agent
/// state belongs in `AgentStore`, not in the policy.
///
/// # Example
///
/// ```rust,ignore
/// struct Seeker;
///
/// impl AgentPolicy for Seeker {
///     fn update(&self, agent: AgentId, ctx: &AgentContext, _rng: &mut AgentRng) -> Vec<Intent> {
///         if ctx.coordinator.assignment_of(agent).is_none() {
///             let _ = ctx.coordinator.request_assignment(agent, &ctx.snapshot(agent));
///         }
///         vec![]
///     }
/// }
/// ```
pub trait AgentPolicy: Send + Sync + 'static {
    /// Called once per agent per tick.
    ///
    /// Return the state changes to apply.  An empty `Vec` leaves the agent
    /// as it is.
    fn update(
        &self,
        agent: AgentId,
        ctx:   &AgentContext<'_>,
        rng:   &mut AgentRng,
    ) -> Vec<Intent>;

    /// Called once when the scenario restarts, after assignments and claims
    /// have been cleared.
    ///
    /// Default: does nothing.
    fn on_scenario_reset(&self) {}
}
