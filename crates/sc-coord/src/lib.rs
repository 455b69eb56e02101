//! `sc-coord` — the coordination layer.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`table`]       | `AssignmentTable`: agent → target with reverse lookup      |
//! | [`scoring`]     | `score()`: the target preference function                  |
//! | [`coordinator`] | `Coordinator`: request / release / reassign / clear        |
//! | [`resources`]   | `ResourceFinder`: nearest-first claim over a `ClaimRegistry` |
//! | [`conflict`]    | `ConflictMonitor`, `ConflictReport`                        |
//! | [`error`]       | `CoordError`, `CoordResult`                                |
//!
//! # Data flow
//!
//! ```text
//! agent update ──► Coordinator::request_assignment ──► AssignmentTable
//!                                                          │
//! end of tick ──► ConflictMonitor::tick ── reads ─────────┘
//!                        │
//!                        └──► Coordinator::reassign (losing agent)
//! ```
//!
//! The monitor never touches the table itself; every mutation goes through
//! the `Coordinator`, which serialises them behind one mutex.

pub mod conflict;
pub mod coordinator;
pub mod error;
pub mod resources;
pub mod scoring;
pub mod table;

#[cfg(test)]
mod tests;

pub use conflict::{Conflict, ConflictMonitor, ConflictReport, Reassignment};
pub use coordinator::Coordinator;
pub use error::{CoordError, CoordResult};
pub use resources::ResourceFinder;
pub use scoring::score;
pub use table::AssignmentTable;
