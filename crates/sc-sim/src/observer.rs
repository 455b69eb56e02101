//! Simulation observer trait for progress reporting and data collection.

use sc_agent::AgentStore;
use sc_coord::{AssignmentTable, Conflict, ConflictReport, Reassignment};
use sc_core::Tick;
use sc_spatial::CommLink;

/// What happened during one tick.
#[derive(Clone, Debug, Default)]
pub struct TickReport {
    pub tick: Tick,

    /// Agents holding a target after the conflict pass.
    pub assigned_agents: usize,

    /// Resources claimed after the conflict pass.
    pub claimed_resources: usize,

    /// In-range agent pairs this tick.
    pub links: Vec<CommLink>,

    pub conflicts: Vec<Conflict>,

    pub reassignments: Vec<Reassignment>,
}

impl TickReport {
    pub(crate) fn new(
        tick:              Tick,
        assigned_agents:   usize,
        claimed_resources: usize,
        conflict:          ConflictReport,
    ) -> Self {
        Self {
            tick,
            assigned_agents,
            claimed_resources,
            links:         conflict.links,
            conflicts:     conflict.conflicts,
            reassignments: conflict.reassignments,
        }
    }
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {} agents assigned", report.assigned_agents);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick, after the conflict pass.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// `assignments` is a consistent copy of the coordinator's table taken
    /// after the conflict pass.
    fn on_snapshot(
        &mut self,
        _tick:        Tick,
        _agents:      &AgentStore,
        _assignments: &AssignmentTable,
    ) {}

    /// Called after [`Sim::reset_scenario`][crate::Sim::reset_scenario].
    fn on_scenario_reset(&mut self, _tick: Tick) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
