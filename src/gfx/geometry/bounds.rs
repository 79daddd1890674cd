//! Axis-aligned bounding boxes.

use cgmath::{ElementWise, Matrix4, Vector3, Vector4, Zero};

use crate::gfx::{picking::Ray, transform::Transform};

/// Axis-aligned bounding box of untransformed vertex positions.
///
/// `min <= max` holds component-wise for every box built through
/// [`BoundingBox::from_points`]; empty input yields the zero box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl BoundingBox {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// The degenerate box at the origin.
    pub fn zero() -> Self {
        Self::new(Vector3::zero(), Vector3::zero())
    }

    /// Create a box enclosing a set of vertices
    pub fn from_points(vertices: &[[f32; 3]]) -> Self {
        let Some(first) = vertices.first() else {
            return Self::zero();
        };

        let mut min = Vector3::from(*first);
        let mut max = min;

        for vertex in vertices.iter().skip(1) {
            min.x = min.x.min(vertex[0]);
            min.y = min.y.min(vertex[1]);
            min.z = min.z.min(vertex[2]);
            max.x = max.x.max(vertex[0]);
            max.y = max.y.max(vertex[1]);
            max.z = max.z.max(vertex[2]);
        }

        Self::new(min, max)
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

    /// Full extent `max - min`.
    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::new(
            Vector3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            Vector3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        )
    }

    fn corners(&self) -> [Vector3<f32>; 8] {
        [
            Vector3::new(self.min.x, self.min.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.min.z),
            Vector3::new(self.min.x, self.max.y, self.min.z),
            Vector3::new(self.min.x, self.min.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.max.z),
            Vector3::new(self.min.x, self.max.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.max.z),
        ]
    }

    /// Box enclosing all eight corners after `transform`.
    pub fn transform(&self, transform: &Transform) -> BoundingBox {
        let matrix: Matrix4<f32> = transform.matrix();
        let corners: Vec<[f32; 3]> = self
            .corners()
            .iter()
            .map(|corner| {
                let transformed = matrix * Vector4::new(corner.x, corner.y, corner.z, 1.0);
                [
                    transformed.x / transformed.w,
                    transformed.y / transformed.w,
                    transformed.z / transformed.w,
                ]
            })
            .collect();

        BoundingBox::from_points(&corners)
    }

    /// Slab test. Returns the distance along the ray to the first hit.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = Vector3::new(
            1.0 / ray.direction.x,
            1.0 / ray.direction.y,
            1.0 / ray.direction.z,
        );

        let t_min = (self.min - ray.origin).mul_element_wise(inv_dir);
        let t_max = (self.max - ray.origin).mul_element_wise(inv_dir);

        let t1 = Vector3::new(
            t_min.x.min(t_max.x),
            t_min.y.min(t_max.y),
            t_min.z.min(t_max.z),
        );
        let t2 = Vector3::new(
            t_min.x.max(t_max.x),
            t_min.y.max(t_max.y),
            t_min.z.max(t_max.z),
        );

        let t_near = t1.x.max(t1.y.max(t1.z));
        let t_far = t2.x.min(t2.y.min(t2.z));

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Deg;

    #[test]
    fn test_box_from_points() {
        let vertices = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [-1.0, -1.0, -3.0]];
        let bounds = BoundingBox::from_points(&vertices);

        assert_eq!(bounds.min, Vector3::new(-1.0, -1.0, -3.0));
        assert_eq!(bounds.max, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(bounds.center(), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(bounds.size(), Vector3::new(2.0, 2.0, 4.0));
    }

    #[test]
    fn test_empty_points_give_zero_box() {
        assert_eq!(BoundingBox::from_points(&[]), BoundingBox::zero());
    }

    #[test]
    fn test_ray_intersection() {
        let bounds = BoundingBox::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));

        let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        let hit = bounds.intersect_ray(&ray).expect("ray should hit");
        assert!((hit - 4.0).abs() < 1e-5);

        let ray_miss = Ray::new(Vector3::new(5.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(bounds.intersect_ray(&ray_miss).is_none());
    }

    #[test]
    fn test_transformed_box_stays_ordered() {
        let bounds = BoundingBox::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 1.0, 1.0));
        let rotated = bounds.transform(&Transform::from_axis_angle(Vector3::unit_z(), Deg(90.0)));

        assert!(rotated.min.x <= rotated.max.x);
        assert!(rotated.min.y <= rotated.max.y);
        assert!(rotated.min.z <= rotated.max.z);
        assert!((rotated.size().y - 2.0).abs() < 1e-5);
    }
}
