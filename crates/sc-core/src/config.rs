//! Run and coordination configuration.
//!
//! Typically built in code or loaded from JSON by the application crate
//! (enable the `serde` feature) and passed to the simulation builder.

use crate::{CoreError, CoreResult, SimClock, Tick};

// ── ScoringWeights ────────────────────────────────────────────────────────────

/// Weights of the target scoring function:
///
/// ```text
/// score = -distance + energy_weight * (energy / max_energy) - angle_weight * angle_deg
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringWeights {
    pub energy_weight: f32,
    pub angle_weight:  f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self { energy_weight: 10.0, angle_weight: 0.1 }
    }
}

// ── CoordinationConfig ────────────────────────────────────────────────────────

/// Parameters of the coordination layer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CoordinationConfig {
    /// Maximum distance (inclusive) at which two agents detect conflicts.
    pub communication_range: f32,

    pub scoring: ScoringWeights,

    /// How many of the nearest free resources an agent tries to claim in one
    /// attempt before giving up for the tick.
    pub claim_candidates: usize,

    /// Minimum ticks between two conflict-triggered reassignments of the same
    /// agent.  `0` disables the backoff.
    pub reassign_cooldown_ticks: u64,
}

impl Default for CoordinationConfig {
    fn default() -> Self {
        Self {
            communication_range:     10.0,
            scoring:                 ScoringWeights::default(),
            claim_candidates:        3,
            reassign_cooldown_ticks: 0,
        }
    }
}

impl CoordinationConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if !self.communication_range.is_finite() || self.communication_range < 0.0 {
            return Err(CoreError::Config(format!(
                "communication_range must be finite and >= 0, got {}",
                self.communication_range
            )));
        }
        if !self.scoring.energy_weight.is_finite() || !self.scoring.angle_weight.is_finite() {
            return Err(CoreError::Config(format!(
                "scoring weights must be finite, got {:?}",
                self.scoring
            )));
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated seconds per tick.
    pub tick_duration_secs: f32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Emit an agent snapshot every N ticks.  `0` disables snapshots.
    pub output_interval_ticks: u64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub coordination: CoordinationConfig,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !self.tick_duration_secs.is_finite() || self.tick_duration_secs <= 0.0 {
            return Err(CoreError::Config(format!(
                "tick_duration_secs must be > 0, got {}",
                self.tick_duration_secs
            )));
        }
        self.coordination.validate()
    }
}
