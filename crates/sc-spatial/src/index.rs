//! Static nearest-first index over destinations.

use rstar::RTree;

use sc_core::{Resource, ResourceId, Target, TargetId, Vec3};

use crate::entry::PointEntry;

/// An immutable R-tree over destination points keyed by `K`.
///
/// Built once when the world is known; destinations never move.
pub struct DestinationIndex<K> {
    tree: RTree<PointEntry<K>>,
}

impl<K: Copy> DestinationIndex<K> {
    pub fn new(items: impl IntoIterator<Item = (K, Vec3)>) -> Self {
        let entries: Vec<PointEntry<K>> = items
            .into_iter()
            .map(|(key, pos)| PointEntry::new(key, pos))
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// The destination closest to `pos`, or `None` if the index is empty.
    pub fn nearest(&self, pos: Vec3) -> Option<K> {
        self.tree.nearest_neighbor(&pos.to_array()).map(|e| e.key)
    }

    /// All destinations in ascending distance from `pos`, lazily.
    pub fn nearest_iter(&self, pos: Vec3) -> impl Iterator<Item = K> + '_ {
        self.tree
            .nearest_neighbor_iter(&pos.to_array())
            .map(|e| e.key)
    }

    /// Keys of every destination within `radius` (inclusive) of `pos`.
    pub fn within(&self, pos: Vec3, radius: f32) -> Vec<K> {
        self.tree
            .locate_within_distance(pos.to_array(), radius * radius)
            .map(|e| e.key)
            .collect()
    }
}

impl DestinationIndex<ResourceId> {
    pub fn from_resources(resources: &[Resource]) -> Self {
        Self::new(resources.iter().map(|r| (r.id, r.position)))
    }
}

impl DestinationIndex<TargetId> {
    pub fn from_targets(targets: &[Target]) -> Self {
        Self::new(targets.iter().map(|t| (t.id, t.position)))
    }
}
