//! `sc-agent` — Structure-of-Arrays agent storage.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`store`]     | `AgentStore` (SoA arrays), `AgentSnapshot`, `AgentRngs`   |
//! | [`builder`]   | `AgentStoreBuilder` (fluent construction)                 |
//!
//! The coordination layer never owns agent state.  It reads an
//! [`AgentSnapshot`] per agent per tick (position, heading, energy) and the
//! agent's own policy writes back through intents applied by `sc-sim`.

pub mod builder;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use store::{AgentRngs, AgentSnapshot, AgentStore};
