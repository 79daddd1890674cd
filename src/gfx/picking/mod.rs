//! # Object Picking
//!
//! Pointer positions are turned into world-space rays and tested against
//! actor bounding boxes.
//!
//! ## How it works
//!
//! 1. **Pointer to Ray**: unproject the NDC position at the near and far planes
//!    through the inverse view-projection matrix
//! 2. **Ray to Local Space**: move the ray into the actor's frame with the
//!    inverse of its world transform, so the untransformed box can be used
//! 3. **Selection**: the closest hit along the world ray wins
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::{Matrix4, SquareMatrix, Vector2};
//! use diorama::gfx::{geometry::BoundingBox, picking::Ray, transform::Transform};
//!
//! let ray = Ray::from_ndc(Vector2::new(0.0, 0.0), Matrix4::identity()).unwrap();
//! let unit = BoundingBox::from_points(&[[-0.5, -0.5, -0.5], [0.5, 0.5, 0.5]]);
//! assert!(ray.hit_distance(&unit, &Transform::identity()).is_some());
//! ```

use cgmath::{InnerSpace, Matrix4, SquareMatrix, Vector2, Vector3, Vector4};

use crate::gfx::{geometry::BoundingBox, transform::Transform};

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Ray through an NDC position, from the near plane (`z = -1`) towards the
    /// far plane (`z = 1`). `None` when the matrix cannot be inverted.
    pub fn from_ndc(ndc: Vector2<f32>, view_projection: Matrix4<f32>) -> Option<Self> {
        let inverse = view_projection.invert()?;

        let unproject = |z: f32| {
            let point = inverse * Vector4::new(ndc.x, ndc.y, z, 1.0);
            point.truncate() / point.w
        };

        let near = unproject(-1.0);
        let far = unproject(1.0);
        let direction = far - near;
        if direction.magnitude2() <= f32::EPSILON {
            return None;
        }

        Some(Self::new(near, direction))
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }

    /// World-space distance to the first hit with `bounds` placed by `world`.
    pub fn hit_distance(&self, bounds: &BoundingBox, world: &Transform) -> Option<f32> {
        let inverse = world.inverse()?.matrix();

        let origin = inverse * self.origin.extend(1.0);
        let target = inverse * self.point_at(1.0).extend(1.0);
        let local = Ray::new(
            origin.truncate() / origin.w,
            target.truncate() / target.w - origin.truncate() / origin.w,
        );

        let t = bounds.intersect_ray(&local)?;
        let local_hit = local.point_at(t);
        let world_hit = world.matrix() * local_hit.extend(1.0);
        Some((world_hit.truncate() / world_hit.w - self.origin).magnitude())
    }
}

/// Result of a pick: what was hit and how far along the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickResult<T> {
    pub target: T,
    pub distance: f32,
}

/// Closest hit among `candidates`.
pub fn closest<T, I>(candidates: I) -> Option<PickResult<T>>
where
    I: IntoIterator<Item = PickResult<T>>,
{
    candidates
        .into_iter()
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{perspective, Deg};

    fn unit_box() -> BoundingBox {
        BoundingBox::new(Vector3::new(-0.5, -0.5, -0.5), Vector3::new(0.5, 0.5, 0.5))
    }

    fn view_projection() -> Matrix4<f32> {
        perspective(Deg(45.0), 1.0, 0.1, 100.0)
            * Matrix4::from_translation(Vector3::new(0.0, 0.0, -5.0))
    }

    #[test]
    fn test_center_ray_points_into_screen() {
        let ray = Ray::from_ndc(Vector2::new(0.0, 0.0), view_projection()).unwrap();
        assert!(ray.direction.z < -0.99);
        assert!(ray.origin.x.abs() < 1e-4);
    }

    #[test]
    fn test_hit_distance_respects_world_transform() {
        let ray = Ray::from_ndc(Vector2::new(0.0, 0.0), view_projection()).unwrap();

        let at_origin = ray.hit_distance(&unit_box(), &Transform::identity()).unwrap();
        let shifted = Transform::from_translation(Vector3::new(3.0, 0.0, 0.0));

        assert!((ray.point_at(at_origin).z - 0.5).abs() < 1e-3);
        assert!(ray.hit_distance(&unit_box(), &shifted).is_none());
    }

    #[test]
    fn test_scaled_box_is_hit_at_world_distance() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, -1.0));
        let doubled = Transform::from_scale(2.0);

        let distance = ray.hit_distance(&unit_box(), &doubled).unwrap();
        assert!((distance - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_closest_pick() {
        let hits = vec![
            PickResult { target: "far", distance: 8.0 },
            PickResult { target: "near", distance: 2.0 },
        ];
        assert_eq!(closest(hits).map(|hit| hit.target), Some("near"));
        assert!(closest(Vec::<PickResult<u32>>::new()).is_none());
    }
}
