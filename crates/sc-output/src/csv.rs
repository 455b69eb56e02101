//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `tick_summaries.csv`
//!
//! Headers are written eagerly so that a run which never reaches a snapshot
//! tick still leaves a well-formed file behind.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};
use serde::Serialize;

use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

pub const SNAPSHOT_HEADER: [&str; 8] =
    ["agent_id", "tick", "x", "y", "z", "energy", "target", "resource"];

pub const SUMMARY_HEADER: [&str; 6] = [
    "tick",
    "assigned_agents",
    "claimed_resources",
    "comm_links",
    "conflicts",
    "reassignments",
];

fn open_table(path: &Path, header: &[&str]) -> OutputResult<Writer<File>> {
    // Rows are serialized positionally; the header comes from the constant.
    let mut w = WriterBuilder::new().has_headers(false).from_path(path)?;
    w.write_record(header)?;
    Ok(w)
}

fn append<R: Serialize>(w: &mut Writer<File>, rows: &[R]) -> OutputResult<()> {
    for row in rows {
        w.serialize(row)?;
    }
    Ok(())
}

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create (truncating) both CSV files in `dir` and write their headers.
    ///
    /// `dir` must already exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self {
            snapshots: open_table(&dir.join("agent_snapshots.csv"), &SNAPSHOT_HEADER)?,
            summaries: open_table(&dir.join("tick_summaries.csv"), &SUMMARY_HEADER)?,
            finished:  false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        append(&mut self.snapshots, rows)
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        append(&mut self.summaries, std::slice::from_ref(row))
    }

    fn finish(&mut self) -> OutputResult<()> {
        if std::mem::replace(&mut self.finished, true) {
            return Ok(());
        }
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
