//! 3D Ray for intersection testing
//!
//! Used for pointer aiming: the camera turns a screen point into a ray
//! which is then cut against the character's ground plane.

use crate::vector::Vec3;

/// 3D ray for intersection testing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Ray origin point
    pub origin: Vec3,
    /// Ray direction (normalized)
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with normalized direction
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Create a ray from two points
    #[inline]
    pub fn from_points(start: Vec3, end: Vec3) -> Self {
        Self::new(start, end - start)
    }

    /// Get a point at distance t along the ray
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Check if the ray direction is valid (non-zero length)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.direction.length_squared() > 1e-10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(ray.direction, Vec3::Z);
        assert!(ray.is_valid());
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::from_points(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO);
        let p = ray.at(4.0);
        assert!((p - Vec3::new(0.0, 6.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_zero_direction_invalid() {
        let ray = Ray::new(Vec3::ONE, Vec3::ZERO);
        assert!(!ray.is_valid());
    }
}
