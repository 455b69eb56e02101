//! `sc-claim` — the resource claim registry.
//!
//! A [`ClaimRegistry`] maps each `ResourceId` to a claimed flag.  Agents that
//! pursue interchangeable resources call [`ClaimRegistry::try_claim`] from
//! inside their own update; at most one caller ever wins a given resource
//! until it is released or the scenario resets.
//!
//! The whole map sits behind one `parking_lot::Mutex`.  Every operation is a
//! single short critical section around one map access and never waits on
//! anything else, so the registry is safe to share across Rayon workers.

pub mod registry;


pub use registry::ClaimRegistry;
