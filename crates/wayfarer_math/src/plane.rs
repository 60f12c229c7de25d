//! Infinite planes

use crate::intersect::ray_plane;
use crate::ray::Ray;
use crate::vector::Vec3;

/// Plane in 3D space (ax + by + cz + d = 0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    /// Plane normal (unit vector)
    pub normal: Vec3,
    /// Signed distance term
    pub distance: f32,
}

impl Plane {
    /// Create a plane from a point on the plane and its normal
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize();
        Self {
            normal,
            distance: -normal.dot(point),
        }
    }

    /// Horizontal plane (normal +Y) through `point`
    #[inline]
    pub fn horizontal_through(point: Vec3) -> Self {
        Self::from_point_normal(point, Vec3::Y)
    }

    /// A point lying on the plane
    #[inline]
    pub fn origin_point(&self) -> Vec3 {
        self.normal * -self.distance
    }

    /// Signed distance from a point to the plane
    #[inline]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Intersect a ray with the plane.
    ///
    /// Returns the hit point, or `None` when the ray is parallel to the plane
    /// or the plane lies behind the ray origin.
    pub fn raycast(&self, ray: &Ray) -> Option<Vec3> {
        let t = ray_plane(ray, self.origin_point(), self.normal)?;
        Some(ray.at(t))
    }
}
