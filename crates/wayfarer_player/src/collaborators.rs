//! Engine services the controller queries
//!
//! The controller never owns physics or a camera. The host passes them into
//! `CharacterController::tick` each frame.

use wayfarer_math::{Ray, Vec2, Vec3};

/// Physics queries used by the character
pub trait PhysicsWorld {
    /// Does a sphere at `center` touch anything on `layer_mask`
    fn check_sphere(&self, center: Vec3, radius: f32, layer_mask: u32) -> bool;

    /// Move a body from `from` by `delta`, returning where it ends up after
    /// collisions. Unobstructed by default.
    fn sweep(&self, from: Vec3, delta: Vec3) -> Vec3 {
        from + delta
    }
}

/// The camera used for pointer aiming
pub trait AimCamera {
    /// World-space ray through a screen position
    fn screen_point_to_ray(&self, screen: Vec2) -> Ray;
}
