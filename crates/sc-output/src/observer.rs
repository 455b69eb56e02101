//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sc_agent::AgentStore;
use sc_coord::AssignmentTable;
use sc_core::{ResourceId, TargetId, Tick};
use sc_sim::{SimObserver, TickReport};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        let row = TickSummaryRow {
            tick:              tick.0,
            assigned_agents:   report.assigned_agents as u64,
            claimed_resources: report.claimed_resources as u64,
            comm_links:        report.links.len() as u64,
            conflicts:         report.conflicts.len() as u64,
            reassignments:     report.reassignments.len() as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, assignments: &AssignmentTable) {
        let rows: Vec<AgentSnapshotRow> = agents
            .agent_ids()
            .map(|agent| {
                let i = agent.index();
                let p = agents.position[i];
                AgentSnapshotRow {
                    agent_id: agent.0,
                    tick:     tick.0,
                    x:        p.x,
                    y:        p.y,
                    z:        p.z,
                    energy:   agents.energy[i],
                    target:   assignments.get(agent).unwrap_or(TargetId::INVALID).0,
                    resource: agents.held_resource[i]
                        .or(agents.cargo[i])
                        .unwrap_or(ResourceId::INVALID)
                        .0,
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

