//! R-tree leaf type.

use rstar::{AABB, PointDistance, RTreeObject};

use sc_core::Vec3;

/// Entry stored in an R-tree: a 3-D `[x, y, z]` point with an attached key.
#[derive(Clone, Debug)]
pub struct PointEntry<K> {
    pub point: [f32; 3],
    pub key:   K,
}

impl<K> PointEntry<K> {
    #[inline]
    pub fn new(key: K, position: Vec3) -> Self {
        Self { point: position.to_array(), key }
    }
}

impl<K> RTreeObject for PointEntry<K> {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl<K> PointDistance for PointEntry<K> {
    /// Squared Euclidean distance.
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}
