//! Target preference function.

use sc_agent::AgentSnapshot;
use sc_core::{ScoringWeights, Vec3, geo::angle_deg};

/// Score of `target` for `agent`; higher is better.
///
/// ```text
/// -distance + energy_weight * (energy / max_energy) - angle_weight * angle_deg(heading, target - position)
/// ```
///
/// The energy term is `0` when `max_energy` is not positive.
pub fn score(agent: &AgentSnapshot, target: Vec3, weights: &ScoringWeights) -> f32 {
    let to_target = target - agent.position;
    -to_target.length() + weights.energy_weight * agent.energy_fraction()
        - weights.angle_weight * angle_deg(agent.heading, to_target)
}
