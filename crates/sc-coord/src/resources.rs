//! Nearest-first resource claiming.

use sc_claim::ClaimRegistry;
use sc_core::{CoordinationConfig, Resource, ResourceId, Vec3, World};
use sc_spatial::DestinationIndex;

/// Finds and claims the closest free resource for an agent.
///
/// Holds an immutable R-tree over resource positions; claim state lives in
/// the shared [`ClaimRegistry`].
pub struct ResourceFinder {
    index:      DestinationIndex<ResourceId>,
    candidates: usize,
}

impl ResourceFinder {
    /// `candidates` is how many free resources one call tries before giving up.
    pub fn new(resources: &[Resource], candidates: usize) -> Self {
        Self { index: DestinationIndex::from_resources(resources), candidates }
    }

    pub fn from_world(world: &World, config: &CoordinationConfig) -> Self {
        Self::new(&world.resources, config.claim_candidates)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Closest resource to `position` regardless of claim state.
    pub fn nearest(&self, position: Vec3) -> Option<ResourceId> {
        self.index.nearest(position)
    }

    /// Try to claim one of the nearest free resources.
    ///
    /// Walks resources in ascending distance, keeps those that are unclaimed
    /// and pass `is_available`, and attempts `try_claim` on the first
    /// `candidates` of them in order.  A candidate can still be lost to a
    /// concurrent caller between the check and the claim; the next one is
    /// tried then.
    pub fn claim_nearest(
        &self,
        registry: &ClaimRegistry,
        position: Vec3,
        mut is_available: impl FnMut(ResourceId) -> bool,
    ) -> Option<ResourceId> {
        self.index
            .nearest_iter(position)
            .filter(|&r| !registry.is_claimed(r) && is_available(r))
            .take(self.candidates)
            .find(|&r| registry.try_claim(r))
    }
}
