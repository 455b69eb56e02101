//! `sc-spatial` — spatial indexing for proximity and nearest-destination
//! queries.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`entry`]     | `PointEntry<K>`: R-tree leaf shared by both indexes          |
//! | [`proximity`] | `ProximityGraph` (per-tick in-range agent pairs), `CommLink` |
//! | [`index`]     | `DestinationIndex<K>` (nearest-first destination lookup)     |
//!
//! Both structures bulk-load an `rstar` R-tree.  The proximity graph is
//! rebuilt every tick from agent positions, so its cost is
//! O(N log N + in-range pairs) rather than O(N²).

pub mod entry;
pub mod index;
pub mod proximity;


pub use index::DestinationIndex;
pub use proximity::{CommLink, ProximityGraph};
