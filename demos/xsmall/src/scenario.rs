//! Synthetic field: targets and resources scattered over a square map.

use sc_core::{SimRng, Vec3, World, WorldBuilder};

pub const MAP_SIZE:       f32   = 40.0;
pub const TARGET_COUNT:   usize = 6;
pub const RESOURCE_COUNT: usize = 10;

/// Scatter targets and resources uniformly over the map at ground level.
pub fn build_world(rng: &mut SimRng) -> World {
    let mut b = WorldBuilder::new();
    for _ in 0..TARGET_COUNT {
        b.add_target(rng.point_in_rect(MAP_SIZE, MAP_SIZE, 0.0));
    }
    for _ in 0..RESOURCE_COUNT {
        b.add_resource(rng.point_in_rect(MAP_SIZE, MAP_SIZE, 0.0));
    }
    b.build()
}

/// Start positions and headings for `count` agents.
pub fn spawn_points(rng: &mut SimRng, count: usize) -> (Vec<Vec3>, Vec<Vec3>) {
    (0..count)
        .map(|_| (rng.point_in_rect(MAP_SIZE, MAP_SIZE, 0.0), rng.heading()))
        .unzip()
}
