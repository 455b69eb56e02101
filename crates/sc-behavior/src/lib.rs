//! `sc-behavior` — the interface between agents and the coordination layer.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`intent`]  | `Intent` enum (`Move`, `SetEnergy`, `HoldResource`, `Carry`) |
//! | [`context`] | `AgentContext<'a>`: per-tick state plus coordination handles |
//! | [`model`]   | `AgentPolicy` trait                                          |
//! | [`noop`]    | `IdlePolicy`: placeholder that never produces intents        |
//!
//! # Design notes
//!
//! The tick loop in sc-sim has two agent phases:
//!
//! 1. **Update phase** (parallel with the `parallel` feature): call
//!    `AgentPolicy::update` for every agent.  Agent state is read through
//!    `&AgentContext`.  Coordination calls (`request_assignment`, `release`,
//!    `try_claim`) happen here, synchronously, through the shared
//!    `Coordinator` and `ClaimRegistry`; both serialise internally.
//!
//! 2. **Apply phase** (sequential, ascending id): consume the collected
//!    `Vec<Intent>`s and mutate `AgentStore`.
//!
//! Policies therefore only need to be `Send + Sync`; they never hold mutable
//! per-agent state of their own.

pub mod context;
pub mod intent;
pub mod model;
pub mod noop;


pub use context::AgentContext;
pub use intent::Intent;
pub use model::AgentPolicy;
pub use noop::IdlePolicy;
