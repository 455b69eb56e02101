//! `sc-core` — foundational types for the swarm coordination framework.
//!
//! This crate is a dependency of every other `sc-*` crate.  It has no `sc-*`
//! dependencies and few external ones (`glam`, `rand`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `TargetId`, `ResourceId`                   |
//! | [`geo`]         | `Vec3` re-export, angle and planar distance helpers   |
//! | [`world`]       | `Destination`, `Target`, `Resource`, `World`          |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `SimConfig`, `CoordinationConfig`, `ScoringWeights`   |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, world and config.   |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod world;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CoordinationConfig, ScoringWeights, SimConfig};
pub use error::{CoreError, CoreResult};
pub use geo::Vec3;
pub use ids::{AgentId, ResourceId, TargetId};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Tick};
pub use world::{Destination, Resource, Target, World, WorldBuilder};
