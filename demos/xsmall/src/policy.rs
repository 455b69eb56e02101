//! Courier / explorer agent logic.
//!
//! Even agent ids are couriers: they take a target from the coordinator,
//! drive to it and hand it back on arrival.  Odd ids are explorers: they
//! claim the nearest free resource, pick it up and deliver it to the
//! nearest target.  A picked-up resource is gone from the field until the
//! scenario is reset.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use sc_behavior::{AgentContext, AgentPolicy, Intent};
use sc_core::geo::{angle_deg, flatten, planar_distance};
use sc_core::{AgentId, AgentRng, ResourceId, Vec3};

/// Units per simulated second.
const MOVE_SPEED: f32 = 5.0;

/// Energy lost per simulated second regardless of movement.
const IDLE_DRAIN_PER_SEC: f32 = 0.01;

/// Energy lost per unit travelled.
const MOVE_DRAIN_PER_UNIT: f32 = 0.2;

const ARRIVAL_DISTANCE:  f32 = 1.0;
const ARRIVAL_ANGLE_DEG: f32 = 45.0;

/// Couriers give up a target farther than this.
const ABANDON_DISTANCE: f32 = 100.0;

const PICKUP_DISTANCE:   f32 = 2.0;
const DELIVERY_DISTANCE: f32 = 3.0;

#[derive(Default)]
pub struct FieldPolicy {
    arrivals:   AtomicUsize,
    deliveries: AtomicUsize,
    /// Resources picked up since the last scenario reset.
    collected:  Mutex<HashSet<ResourceId>>,
}

impl FieldPolicy {
    pub fn arrivals(&self) -> usize {
        self.arrivals.load(Ordering::Relaxed)
    }

    pub fn deliveries(&self) -> usize {
        self.deliveries.load(Ordering::Relaxed)
    }

    pub fn is_collected(&self, resource: ResourceId) -> bool {
        self.collected.lock().contains(&resource)
    }

    /// Take `resource` off the field until the next scenario reset.
    pub(crate) fn collect(&self, resource: ResourceId) {
        self.collected.lock().insert(resource);
    }

    fn release_target(&self, agent: AgentId, ctx: &AgentContext<'_>) {
        if let Err(e) = ctx.coordinator.release(agent) {
            warn!(%agent, error = %e, "target release failed");
        }
    }

    fn courier(&self, agent: AgentId, ctx: &AgentContext<'_>) -> Vec<Intent> {
        let i = agent.index();
        let pos = ctx.agents.position[i];

        let target = match ctx.coordinator.assignment_of(agent) {
            Some(t) => t,
            None => {
                match ctx.coordinator.request_assignment(agent, &ctx.snapshot(agent)) {
                    Ok(Some(t)) => t,
                    Ok(None) => return drain(ctx, i, 0.0),
                    Err(e) => {
                        warn!(%agent, error = %e, "target request failed");
                        return vec![];
                    }
                }
            }
        };
        let Ok(dest) = ctx.world.target(target).map(|t| t.position) else {
            self.release_target(agent, ctx);
            return vec![];
        };

        let distance = planar_distance(pos, dest);
        let facing = angle_deg(ctx.agents.heading[i], flatten(dest - pos));
        if distance < ARRIVAL_DISTANCE && facing < ARRIVAL_ANGLE_DEG {
            self.release_target(agent, ctx);
            self.arrivals.fetch_add(1, Ordering::Relaxed);
            trace!(%agent, %target, "courier arrived");
            return drain(ctx, i, 0.0);
        }
        if distance > ABANDON_DISTANCE || ctx.agents.energy[i] <= 0.0 {
            self.release_target(agent, ctx);
            return drain(ctx, i, 0.0);
        }
        step_toward(ctx, i, dest)
    }

    fn explorer(&self, agent: AgentId, ctx: &AgentContext<'_>) -> Vec<Intent> {
        let i = agent.index();
        let pos = ctx.agents.position[i];

        if let Some(carried) = ctx.agents.cargo[i] {
            let Some(drop_off) = nearest_target(ctx, pos) else {
                return drain(ctx, i, 0.0);
            };
            if planar_distance(pos, drop_off) < DELIVERY_DISTANCE {
                self.deliveries.fetch_add(1, Ordering::Relaxed);
                trace!(%agent, resource = %carried, "resource delivered");
                let mut intents = drain(ctx, i, 0.0);
                intents.push(Intent::Carry(None));
                return intents;
            }
            return step_toward(ctx, i, drop_off);
        }

        if let Some(resource) = ctx.agents.held_resource[i] {
            // Someone else picked it up after our claim went through.
            if self.is_collected(resource) {
                debug!(%agent, %resource, "pursued resource already collected");
                ctx.claims.release(resource);
                return vec![Intent::HoldResource(None)];
            }
            let Ok(spot) = ctx.world.resource(resource).map(|r| r.position) else {
                ctx.claims.release(resource);
                return vec![Intent::HoldResource(None)];
            };
            if pos.distance(spot) < PICKUP_DISTANCE {
                // Mark before releasing so nobody can claim it in between.
                self.collect(resource);
                ctx.claims.release(resource);
                return vec![Intent::HoldResource(None), Intent::Carry(Some(resource))];
            }
            return step_toward(ctx, i, spot);
        }

        let available = |r: ResourceId| !self.is_collected(r);
        match ctx.resources.claim_nearest(ctx.claims, pos, available) {
            Some(resource) => vec![Intent::HoldResource(Some(resource))],
            None => drain(ctx, i, 0.0),
        }
    }
}

impl AgentPolicy for FieldPolicy {
    fn update(&self, agent: AgentId, ctx: &AgentContext<'_>, _rng: &mut AgentRng) -> Vec<Intent> {
        if agent.0 % 2 == 0 {
            self.courier(agent, ctx)
        } else {
            self.explorer(agent, ctx)
        }
    }

    fn on_scenario_reset(&self) {
        self.collected.lock().clear();
    }
}

/// Move straight toward `dest` on the ground plane, limited by speed and
/// remaining energy.
fn step_toward(ctx: &AgentContext<'_>, i: usize, dest: Vec3) -> Vec<Intent> {
    let pos = ctx.agents.position[i];
    let energy = ctx.agents.energy[i];
    if energy <= 0.0 {
        return vec![];
    }

    let offset = flatten(dest - pos);
    let remaining = offset.length();
    let reach = (MOVE_SPEED * ctx.tick_duration_secs).min(energy / MOVE_DRAIN_PER_UNIT);
    let moved = remaining.min(reach);
    let heading = offset.try_normalize().unwrap_or(ctx.agents.heading[i]);

    let mut intents = vec![Intent::Move { position: pos + heading * moved, heading }];
    intents.extend(drain(ctx, i, moved));
    intents
}

fn drain(ctx: &AgentContext<'_>, i: usize, moved: f32) -> Vec<Intent> {
    let cost = IDLE_DRAIN_PER_SEC * ctx.tick_duration_secs + MOVE_DRAIN_PER_UNIT * moved;
    vec![Intent::SetEnergy(ctx.agents.energy[i] - cost)]
}

fn nearest_target(ctx: &AgentContext<'_>, pos: Vec3) -> Option<Vec3> {
    ctx.world
        .targets
        .iter()
        .map(|t| t.position)
        .min_by(|a, b| pos.distance_squared(*a).total_cmp(&pos.distance_squared(*b)))
}
