//! Deterministic per-agent and simulation-level RNG wrappers.
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! Agents never share RNG state, so a parallel update phase stays
//! reproducible regardless of thread scheduling.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Vec3};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Uniform point on the x/z plane inside a `width` × `length` rectangle
/// centred on the origin, at height `y`.
fn point_in_rect(rng: &mut SmallRng, width: f32, length: f32, y: f32) -> Vec3 {
    let hx = (width * 0.5).max(f32::EPSILON);
    let hz = (length * 0.5).max(f32::EPSILON);
    Vec3::new(rng.gen_range(-hx..hx), y, rng.gen_range(-hz..hz))
}

/// Unit heading on the x/z plane with a uniformly random yaw.
fn random_heading(rng: &mut SmallRng) -> Vec3 {
    let yaw = rng.gen_range(0.0..std::f32::consts::TAU);
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    pub fn point_in_rect(&mut self, width: f32, length: f32, y: f32) -> Vec3 {
        point_in_rect(&mut self.0, width, length, y)
    }

    pub fn heading(&mut self) -> Vec3 {
        random_heading(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for scenario construction and other global draws.
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    pub fn point_in_rect(&mut self, width: f32, length: f32, y: f32) -> Vec3 {
        point_in_rect(&mut self.0, width, length, y)
    }

    pub fn heading(&mut self) -> Vec3 {
        random_heading(&mut self.0)
    }
}
