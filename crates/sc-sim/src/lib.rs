//! `sc-sim` — tick loop orchestrator for the swarm coordination framework.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Update   — call AgentPolicy::update for every agent
//!                (parallel with the `parallel` feature).  Agents request
//!                and release targets and claim resources synchronously.
//!   ② Apply    — for each agent in ascending AgentId order:
//!                  Move { .. }       → position, heading
//!                  SetEnergy(e)      → energy (clamped)
//!                  HoldResource(r)   → held resource
//!                  Carry(r)          → carried resource
//!   ③ Monitor  — one ConflictMonitor pass; losing agents are reassigned.
//!   ④ Observe  — on_tick_end(TickReport), on_snapshot every N ticks.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the update phase on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sc_agent::AgentStoreBuilder;
//! use sc_behavior::IdlePolicy;
//! use sc_sim::{NoopObserver, SimBuilder};
//!
//! let (store, rngs) = AgentStoreBuilder::new(16, 42).build();
//! let mut sim = SimBuilder::new(config, store, rngs, world, IdlePolicy).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickReport};
pub use sim::Sim;
