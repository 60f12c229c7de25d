//! Intersection tests

use crate::ray::Ray;
use crate::vector::Vec3;

/// Ray-Plane intersection
///
/// Returns the distance along the ray, or `None` if the ray is parallel to
/// the plane or the hit lies behind the origin.
pub fn ray_plane(ray: &Ray, plane_point: Vec3, plane_normal: Vec3) -> Option<f32> {
    let denom = plane_normal.dot(ray.direction);

    // Parallel
    if denom.abs() < 0.0001 {
        return None;
    }

    let t = (plane_point - ray.origin).dot(plane_normal) / denom;

    if t >= 0.0 {
        Some(t)
    } else {
        None
    }
}

/// Is `point` inside (or on) the sphere
#[inline]
pub fn point_in_sphere(point: Vec3, center: Vec3, radius: f32) -> bool {
    (point - center).length_squared() <= radius * radius
}

/// Do two spheres overlap
#[inline]
pub fn spheres_overlap(a_center: Vec3, a_radius: f32, b_center: Vec3, b_radius: f32) -> bool {
    let r = a_radius + b_radius;
    (a_center - b_center).length_squared() <= r * r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_plane_hit() {
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);
        let t = ray_plane(&ray, Vec3::ZERO, Vec3::Y).unwrap();
        assert!((t - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_plane_parallel() {
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::Z);
        assert!(ray_plane(&ray, Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn test_point_in_sphere() {
        assert!(point_in_sphere(Vec3::new(0.5, 0.0, 0.0), Vec3::ZERO, 1.0));
        assert!(!point_in_sphere(Vec3::new(1.5, 0.0, 0.0), Vec3::ZERO, 1.0));
    }

    #[test]
    fn test_spheres_overlap() {
        assert!(spheres_overlap(Vec3::ZERO, 1.0, Vec3::new(1.9, 0.0, 0.0), 1.0));
        assert!(!spheres_overlap(Vec3::ZERO, 1.0, Vec3::new(2.1, 0.0, 0.0), 1.0));
    }
}
