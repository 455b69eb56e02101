//! Geometry helpers on top of `glam::Vec3`.
//!
//! World space is y-up: agents move on the x/z plane and `y` is height.
//! Angles are in degrees because the scoring weights are calibrated per
//! degree.

pub use glam::Vec3;

/// Vectors shorter than this have no meaningful direction.
const DIRECTION_EPSILON: f32 = 1e-6;

/// Unsigned angle between `a` and `b` in degrees, in `[0, 180]`.
///
/// Returns `0.0` when either vector is (near) zero length, so an agent
/// standing exactly on a destination is treated as facing it.
pub fn angle_deg(a: Vec3, b: Vec3) -> f32 {
    let denom = (a.length_squared() * b.length_squared()).sqrt();
    if denom < DIRECTION_EPSILON {
        return 0.0;
    }
    let cos = (a.dot(b) / denom).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Euclidean distance on the x/z plane, ignoring height.
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}

/// Copy of `v` with the vertical component zeroed.
#[inline]
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
