//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! ```rust
//! use sc_agent::AgentStoreBuilder;
//! use sc_core::Vec3;
//!
//! let (store, rngs) = AgentStoreBuilder::new(4, /*seed=*/ 42)
//!     .max_energy(100.0)
//!     .positions(vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z])
//!     .build();
//!
//! assert_eq!(store.count, 4);
//! assert_eq!(rngs.len(),  4);
//! assert_eq!(store.energy[2], 100.0);
//! ```

use sc_core::Vec3;

use crate::{AgentRngs, AgentStore};

/// Default energy capacity for agents built without an explicit value.
pub const DEFAULT_MAX_ENERGY: f32 = 100.0;

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// Agents start at full energy, facing `+z`, at the origin unless positions
/// are supplied.  Position and heading vectors shorter than `count` are
/// applied to the leading agents only.
pub struct AgentStoreBuilder {
    count:      usize,
    seed:       u64,
    max_energy: f32,
    positions:  Vec<Vec3>,
    headings:   Vec<Vec3>,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            max_energy: DEFAULT_MAX_ENERGY,
            positions:  Vec::new(),
            headings:   Vec::new(),
        }
    }

    /// Energy capacity shared by every agent (also the starting energy).
    pub fn max_energy(mut self, max_energy: f32) -> Self {
        self.max_energy = max_energy;
        self
    }

    pub fn positions(mut self, positions: Vec<Vec3>) -> Self {
        self.positions = positions;
        self
    }

    pub fn headings(mut self, headings: Vec<Vec3>) -> Self {
        self.headings = headings;
        self
    }

    /// Construct `AgentStore` and `AgentRngs`.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let mut store = AgentStore::new(self.count, self.max_energy);

        for (slot, pos) in store.position.iter_mut().zip(self.positions) {
            *slot = pos;
        }
        for (slot, heading) in store.heading.iter_mut().zip(self.headings) {
            *slot = heading;
        }

        let rngs = AgentRngs::new(self.count, self.seed);
        (store, rngs)
    }
}
