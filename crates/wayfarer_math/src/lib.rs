//! # wayfarer_math - Gameplay Math
//!
//! Small math primitives used by the character controller:
//! vectors, rotations, rays and the handful of intersection
//! tests the controller needs (aim plane, ground sphere, trigger spheres).

pub mod vector;
pub mod quaternion;
pub mod ray;
pub mod plane;
pub mod intersect;

pub use vector::*;
pub use quaternion::*;
pub use ray::*;
pub use plane::*;
pub use intersect::*;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const TAU: f32 = PI * 2.0;
    pub const FRAC_PI_2: f32 = PI / 2.0;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
    pub const EPSILON: f32 = 1e-6;
}

/// Convert degrees to radians
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * consts::DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians * consts::RAD_TO_DEG
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp value between min and max
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min { min }
    else if value > max { max }
    else { value }
}

/// Frame-rate independent damping of `current` toward `target`.
///
/// `damp_time` is the time constant in seconds; after one `damp_time`
/// roughly 63% of the remaining distance has been covered. A non-positive
/// `damp_time` snaps straight to the target.
#[inline]
pub fn damp(current: f32, target: f32, damp_time: f32, delta_time: f32) -> f32 {
    if damp_time <= 0.0 {
        return target;
    }
    let t = 1.0 - (-delta_time.max(0.0) / damp_time).exp();
    lerp(current, target, t)
}

pub mod prelude {
    pub use crate::vector::{Vec2, Vec3};
    pub use crate::quaternion::Quat;
    pub use crate::ray::Ray;
    pub use crate::plane::Plane;
    pub use crate::intersect::{ray_plane, point_in_sphere, spheres_overlap};
    pub use crate::{radians, degrees, lerp, clamp, damp};
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_damp_converges() {
        let mut value = 0.0;
        for _ in 0..200 {
            value = damp(value, 0.75, 0.1, 1.0 / 60.0);
        }
        assert_relative_eq!(value, 0.75, epsilon = 1e-4);
    }

    #[test]
    fn test_damp_does_not_snap() {
        let value = damp(0.0, 1.0, 0.1, 1.0 / 60.0);
        assert!(value > 0.0 && value < 0.5);
    }

    #[test]
    fn test_damp_zero_time_snaps() {
        assert_eq!(damp(0.2, 1.0, 0.0, 0.016), 1.0);
    }

    #[test]
    fn test_radians_roundtrip() {
        assert_relative_eq!(degrees(radians(90.0)), 90.0, epsilon = 1e-4);
    }
}
